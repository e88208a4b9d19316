//! Generator and parity-check matrices for the Golay(23,12) code.
//!
//! Matrices are stored as arrays of row bit vectors. Each row is an 11-bit
//! value whose most significant bit (bit 10) is column 0.
//!
//! The parity portion of the generator is the systematic form of the cyclic
//! Golay code with generator polynomial
//! `g(x) = x^11 + x^10 + x^6 + x^5 + x^4 + x^2 + 1` (0xC75): row `j` is
//! `x^(22 - j) mod g(x)`.

use crate::error::{Error, Result};

/// Number of data bits per codeword
pub const DATA_BITS: u32 = 12;

/// Number of parity bits per codeword
pub const PARITY_BITS: u32 = 11;

/// Total codeword length
pub const CODEWORD_BITS: u32 = DATA_BITS + PARITY_BITS;

/// Mask covering a data word
pub const DATA_MASK: u16 = (1 << DATA_BITS) - 1;

/// Mask covering a parity word or syndrome
pub const PARITY_MASK: u16 = (1 << PARITY_BITS) - 1;

/// Mask covering a codeword
pub const CODEWORD_MASK: u32 = (1 << CODEWORD_BITS) - 1;

/// Generator polynomial of the cyclic form of the code
pub const GENERATOR_POLY: u16 = 0xC75;

/// Parity portion of the generator matrix (12 x 11).
///
/// `G[row]` bit `10 - col` is set iff data bit `row` contributes to parity
/// bit `col`.
pub const G: [u16; DATA_BITS as usize] = [
    0b110_0011_1010,
    0b011_0001_1101,
    0b111_1011_0100,
    0b011_1101_1010,
    0b001_1110_1101,
    0b110_1100_1100,
    0b011_0110_0110,
    0b001_1011_0011,
    0b110_1110_0011,
    0b101_0100_1011,
    0b100_1001_1111,
    0b100_0111_0101,
];

/// Transposed parity-check matrix (23 x 11).
///
/// The first 12 rows equal [`G`]; the last 11 form the identity.
pub const H: [u16; CODEWORD_BITS as usize] = build_parity_check(&G);

const fn build_parity_check(g: &[u16; DATA_BITS as usize]) -> [u16; CODEWORD_BITS as usize] {
    let mut h = [0u16; CODEWORD_BITS as usize];
    let mut row = 0;
    while row < DATA_BITS as usize {
        h[row] = g[row];
        row += 1;
    }
    let mut i = 0;
    while i < PARITY_BITS as usize {
        h[DATA_BITS as usize + i] = 1 << (PARITY_BITS as usize - 1 - i);
        i += 1;
    }
    h
}

/// Reduces `x^degree` modulo [`GENERATOR_POLY`].
const fn power_mod_generator(degree: u32) -> u16 {
    let mut value: u32 = 1 << degree;
    let mut bit = degree;
    while bit >= PARITY_BITS {
        if value & (1 << bit) != 0 {
            value ^= (GENERATOR_POLY as u32) << (bit - PARITY_BITS);
        }
        bit -= 1;
    }
    value as u16
}

const fn identity_block_holds() -> bool {
    let mut i = 0;
    while i < PARITY_BITS as usize {
        if H[DATA_BITS as usize + i] != 1 << (PARITY_BITS as usize - 1 - i) {
            return false;
        }
        i += 1;
    }
    true
}

const fn generator_matches_polynomial() -> bool {
    let mut row = 0;
    while row < DATA_BITS as usize {
        if G[row] != power_mod_generator(CODEWORD_BITS - 1 - row as u32) {
            return false;
        }
        row += 1;
    }
    true
}

const _: () = assert!(identity_block_holds());
const _: () = assert!(generator_matches_polynomial());

/// Checks the structural invariants of the matrices at runtime.
///
/// The same checks run at compile time; this entry point lets callers
/// assert table integrity at startup.
pub fn verify() -> Result<()> {
    for (i, row) in H.iter().enumerate() {
        if row & !PARITY_MASK != 0 {
            return Err(Error::InvalidInput(format!(
                "parity-check row {} has bits above column 10",
                i
            )));
        }
    }

    if H[..DATA_BITS as usize] != G {
        return Err(Error::InvalidInput(
            "parity-check rows 0..12 differ from the generator".to_string(),
        ));
    }

    if !identity_block_holds() {
        return Err(Error::InvalidInput(
            "parity-check rows 12..23 are not the identity".to_string(),
        ));
    }

    Ok(())
}
