//! Error pattern search.
//!
//! A non-zero syndrome is resolved to the unique error pattern of weight 3 or
//! less whose parity-check rows XOR to it. Two equivalent resolvers exist:
//!
//! - [`search`]: ordered enumeration of all 1-, 2- and 3-bit patterns
//!   (23 + 253 + 1771 = 2047 candidates in the worst case)
//! - [`lookup`]: a 2048-entry table indexed by syndrome, generated at compile
//!   time from the same enumeration
//!
//! Because the code has minimum distance 7, no two patterns of weight 3 or
//! less share a syndrome, so enumeration order never changes the result.
//! The order is still fixed (weight first, then lexicographic) so the search
//! is reproducible.

use crate::codec::matrix::{CODEWORD_BITS, H, PARITY_BITS};
use crate::codec::syndrome::{check_codeword_width, syndrome_unchecked, Syndrome};
use crate::codec::DecodeStrategy;
use crate::error::Result;

const ROWS: usize = CODEWORD_BITS as usize;
const TABLE_SIZE: usize = 1 << PARITY_BITS;

/// A set of up to three codeword bit positions.
///
/// Position `p` refers to numeric bit `22 - p` of a codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ErrorPattern {
    positions: [u8; 3],
    weight: u8,
}

impl ErrorPattern {
    /// The empty pattern
    pub const NONE: ErrorPattern = ErrorPattern {
        positions: [0; 3],
        weight: 0,
    };

    const fn single(i: usize) -> Self {
        ErrorPattern {
            positions: [i as u8, 0, 0],
            weight: 1,
        }
    }

    const fn pair(i: usize, j: usize) -> Self {
        ErrorPattern {
            positions: [i as u8, j as u8, 0],
            weight: 2,
        }
    }

    const fn triple(i: usize, j: usize, k: usize) -> Self {
        ErrorPattern {
            positions: [i as u8, j as u8, k as u8],
            weight: 3,
        }
    }

    /// Number of flipped bits
    pub fn weight(&self) -> u8 {
        self.weight
    }

    /// Flipped positions in ascending order
    pub fn positions(&self) -> &[u8] {
        &self.positions[..self.weight as usize]
    }

    /// The pattern as a 23-bit XOR mask
    pub fn mask(&self) -> u32 {
        self.positions()
            .iter()
            .fold(0, |mask, &p| mask | 1 << (ROWS - 1 - p as usize))
    }

    /// Syndrome produced by this pattern alone
    pub fn syndrome(&self) -> Syndrome {
        let value = self
            .positions()
            .iter()
            .fold(0u16, |s, &p| s ^ H[p as usize]);
        Syndrome::from_raw(value)
    }
}

/// Outcome of correcting one received word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// The word is a codeword; nothing was flipped
    Valid(u32),
    /// A pattern of weight 1 to 3 was found and flipped
    Corrected {
        /// The corrected codeword
        codeword: u32,
        /// The flipped positions
        pattern: ErrorPattern,
    },
    /// No pattern of weight 3 or less matches; the word is left unchanged
    Uncorrectable {
        /// The received word, unmodified
        received: u32,
        /// Its non-zero syndrome
        syndrome: Syndrome,
    },
}

impl Correction {
    /// The corrected codeword, or the received word when uncorrectable
    pub fn codeword(&self) -> u32 {
        match *self {
            Correction::Valid(codeword) => codeword,
            Correction::Corrected { codeword, .. } => codeword,
            Correction::Uncorrectable { received, .. } => received,
        }
    }

    /// Number of bits flipped by the correction
    pub fn bits_flipped(&self) -> u8 {
        match self {
            Correction::Corrected { pattern, .. } => pattern.weight(),
            _ => 0,
        }
    }

    /// True when the search found no matching pattern
    pub fn is_uncorrectable(&self) -> bool {
        matches!(self, Correction::Uncorrectable { .. })
    }
}

/// Finds the lowest-weight pattern over `rows` whose XOR equals `target`.
#[allow(clippy::needless_range_loop)]
fn search_rows(rows: &[u16; ROWS], target: u16) -> Option<ErrorPattern> {
    for i in 0..ROWS {
        if rows[i] == target {
            return Some(ErrorPattern::single(i));
        }
    }

    for i in 0..ROWS {
        for j in i + 1..ROWS {
            if rows[i] ^ rows[j] == target {
                return Some(ErrorPattern::pair(i, j));
            }
        }
    }

    for i in 0..ROWS {
        for j in i + 1..ROWS {
            let partial = rows[i] ^ rows[j];
            for k in j + 1..ROWS {
                if partial ^ rows[k] == target {
                    return Some(ErrorPattern::triple(i, j, k));
                }
            }
        }
    }

    None
}

/// Resolves a syndrome by brute-force enumeration.
///
/// Returns [`ErrorPattern::NONE`] for the zero syndrome and `None` when no
/// pattern of weight 3 or less matches.
pub fn search(syndrome: Syndrome) -> Option<ErrorPattern> {
    if syndrome.is_zero() {
        return Some(ErrorPattern::NONE);
    }
    search_rows(&H, syndrome.value())
}

static SYNDROME_TABLE: [ErrorPattern; TABLE_SIZE] = build_syndrome_table(&H);

const fn build_syndrome_table(rows: &[u16; ROWS]) -> [ErrorPattern; TABLE_SIZE] {
    let mut table = [ErrorPattern::NONE; TABLE_SIZE];

    let mut i = 0;
    while i < ROWS {
        let s = rows[i] as usize;
        if s != 0 && table[s].weight == 0 {
            table[s] = ErrorPattern::single(i);
        }
        i += 1;
    }

    i = 0;
    while i < ROWS {
        let mut j = i + 1;
        while j < ROWS {
            let s = (rows[i] ^ rows[j]) as usize;
            if s != 0 && table[s].weight == 0 {
                table[s] = ErrorPattern::pair(i, j);
            }
            j += 1;
        }
        i += 1;
    }

    i = 0;
    while i < ROWS {
        let mut j = i + 1;
        while j < ROWS {
            let mut k = j + 1;
            while k < ROWS {
                let s = (rows[i] ^ rows[j] ^ rows[k]) as usize;
                if s != 0 && table[s].weight == 0 {
                    table[s] = ErrorPattern::triple(i, j, k);
                }
                k += 1;
            }
            j += 1;
        }
        i += 1;
    }

    table
}

const fn covered_syndromes(table: &[ErrorPattern; TABLE_SIZE]) -> usize {
    let mut count = 0;
    let mut s = 1;
    while s < TABLE_SIZE {
        if table[s].weight != 0 {
            count += 1;
        }
        s += 1;
    }
    count
}

// Perfect code: every non-zero syndrome has a pattern of weight <= 3.
const _: () = assert!(covered_syndromes(&build_syndrome_table(&H)) == TABLE_SIZE - 1);

/// Resolves a syndrome through the precomputed table.
///
/// Same contract as [`search`].
pub fn lookup(syndrome: Syndrome) -> Option<ErrorPattern> {
    if syndrome.is_zero() {
        return Some(ErrorPattern::NONE);
    }
    let pattern = SYNDROME_TABLE[syndrome.value() as usize];
    (pattern.weight != 0).then_some(pattern)
}

fn resolve(received: u32, syndrome: Syndrome, pattern: Option<ErrorPattern>) -> Correction {
    match pattern {
        _ if syndrome.is_zero() => Correction::Valid(received),
        Some(pattern) if pattern.weight != 0 => Correction::Corrected {
            codeword: received ^ pattern.mask(),
            pattern,
        },
        _ => Correction::Uncorrectable { received, syndrome },
    }
}

/// Corrects up to 3 bit errors in a received word using the lookup table.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidWidth`] if `received` is wider than 23
/// bits. An unresolvable syndrome is not an error here; it is reported as
/// [`Correction::Uncorrectable`].
pub fn correct(received: u32) -> Result<Correction> {
    correct_with(received, DecodeStrategy::default())
}

/// Corrects up to 3 bit errors with an explicit resolution strategy.
pub fn correct_with(received: u32, strategy: DecodeStrategy) -> Result<Correction> {
    check_codeword_width(received)?;
    Ok(correct_unchecked(received, strategy))
}

/// Corrects a word already known to fit in 23 bits.
pub(crate) fn correct_unchecked(received: u32, strategy: DecodeStrategy) -> Correction {
    let syndrome = syndrome_unchecked(received);
    if syndrome.is_zero() {
        return Correction::Valid(received);
    }
    let pattern = match strategy {
        DecodeStrategy::LookupTable => lookup(syndrome),
        DecodeStrategy::BruteForce => search(syndrome),
    };
    resolve(received, syndrome, pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encoder::encode;
    use crate::codec::syndrome::syndrome;

    #[test]
    fn test_lookup_matches_search() {
        for value in 0..TABLE_SIZE as u16 {
            let s = Syndrome::new(value).unwrap();
            assert_eq!(lookup(s), search(s), "syndrome {:#x}", value);
        }
    }

    #[test]
    fn test_every_syndrome_covered() {
        for value in 1..TABLE_SIZE as u16 {
            let pattern = lookup(Syndrome::new(value).unwrap()).unwrap();
            assert!((1..=3).contains(&pattern.weight()));
            assert_eq!(pattern.syndrome().value(), value);
        }
    }

    #[test]
    fn test_weight_distribution() {
        let mut counts = [0usize; 4];
        for value in 1..TABLE_SIZE as u16 {
            let pattern = lookup(Syndrome::new(value).unwrap()).unwrap();
            counts[pattern.weight() as usize] += 1;
        }
        assert_eq!(counts, [0, 23, 253, 1771]);
    }

    #[test]
    fn test_search_order_is_lexicographic() {
        // Parity rows are unit vectors, so e_0 is first found at position 12
        let s = Syndrome::new(1 << 10).unwrap();
        assert_eq!(search(s).unwrap().positions(), &[12]);

        let s = Syndrome::new(H[0] ^ H[1]).unwrap();
        assert_eq!(search(s).unwrap().positions(), &[0, 1]);

        let s = Syndrome::new(H[2] ^ H[7] ^ H[22]).unwrap();
        assert_eq!(search(s).unwrap().positions(), &[2, 7, 22]);
    }

    #[test]
    fn test_pattern_mask() {
        let pattern = ErrorPattern::triple(0, 11, 22);
        assert_eq!(pattern.mask(), (1 << 22) | (1 << 11) | 1);
        assert_eq!(ErrorPattern::NONE.mask(), 0);
        assert!(ErrorPattern::NONE.positions().is_empty());
    }

    #[test]
    fn test_correct_valid_codeword() {
        let codeword = encode(0x5A5).unwrap();
        let correction = correct(codeword).unwrap();
        assert_eq!(correction, Correction::Valid(codeword));
        assert_eq!(correction.bits_flipped(), 0);
        assert!(!correction.is_uncorrectable());
    }

    #[test]
    fn test_correct_three_errors() {
        let codeword = encode(0x3C3).unwrap();
        let received = codeword ^ (1 << 22) ^ (1 << 9) ^ (1 << 3);
        for strategy in [DecodeStrategy::LookupTable, DecodeStrategy::BruteForce] {
            let correction = correct_with(received, strategy).unwrap();
            assert_eq!(correction.codeword(), codeword);
            assert_eq!(correction.bits_flipped(), 3);
            match correction {
                Correction::Corrected { pattern, .. } => {
                    assert_eq!(pattern.positions(), &[0, 13, 19]);
                }
                other => panic!("unexpected outcome {:?}", other),
            }
        }
    }

    #[test]
    fn test_four_errors_miscorrect() {
        // Flipping positions 0..=3 of the zero codeword lands within distance
        // 3 of the codeword for data 0xF04.
        let received = 0x78_0000;
        assert_eq!(syndrome(received).unwrap().value(), 0x149);

        let correction = correct(received).unwrap();
        assert_eq!(correction.codeword(), 0x78_2402);
        assert_eq!(correction.bits_flipped(), 3);
        assert!(!correction.is_uncorrectable());
        assert_eq!(correction.codeword(), encode(0xF04).unwrap());
    }

    #[test]
    fn test_degenerate_rows_report_no_pattern() {
        // Only unit rows: weight-4 syndromes are out of reach
        let mut rows = [0u16; ROWS];
        for (i, row) in rows.iter_mut().enumerate().skip(12) {
            *row = 1 << (22 - i);
        }
        assert!(search_rows(&rows, 0b000_0000_0111).is_some());
        assert!(search_rows(&rows, 0b000_0000_1111).is_none());

        let table = build_syndrome_table(&rows);
        assert_eq!(covered_syndromes(&table), 11 + 55 + 165);
    }

    #[test]
    fn test_uncorrectable_keeps_received_word() {
        let received = 0x12_3456;
        let s = Syndrome::new(0x0F).unwrap();
        let correction = resolve(received, s, None);
        assert!(correction.is_uncorrectable());
        assert_eq!(correction.codeword(), received);
        assert_eq!(correction.bits_flipped(), 0);
    }

    #[test]
    fn test_correct_rejects_wide_input() {
        assert!(correct(1 << 23).is_err());
        assert!(correct_with(0xFF00_0000, DecodeStrategy::BruteForce).is_err());
    }
}
