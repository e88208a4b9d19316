//! Syndrome computation.
//!
//! The syndrome of a received word is its GF(2) product with the transposed
//! parity-check matrix. It is zero iff the word is a codeword. A word that
//! differs from the transmitted codeword in 7 or more positions can land on
//! another codeword and yield a zero syndrome; the code cannot tell that
//! apart from an error-free transmission.

use std::fmt;

use crate::codec::matrix::{CODEWORD_BITS, CODEWORD_MASK, H, PARITY_MASK};
use crate::error::{Error, Result};

/// An 11-bit syndrome value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Syndrome(u16);

impl Syndrome {
    /// The all-zero syndrome of a valid codeword
    pub const ZERO: Syndrome = Syndrome(0);

    /// Wraps a raw 11-bit value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWidth`] if `value` has bits above bit 10.
    pub fn new(value: u16) -> Result<Self> {
        if value & !PARITY_MASK != 0 {
            return Err(Error::InvalidWidth {
                value: value as u32,
                bits: PARITY_MASK.count_ones(),
            });
        }
        Ok(Syndrome(value))
    }

    pub(crate) const fn from_raw(value: u16) -> Self {
        Syndrome(value & PARITY_MASK)
    }

    /// Raw 11-bit value
    pub const fn value(self) -> u16 {
        self.0
    }

    /// True for the syndrome of a valid codeword
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Syndrome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:011b}", self.0)
    }
}

impl From<Syndrome> for u16 {
    fn from(syndrome: Syndrome) -> u16 {
        syndrome.0
    }
}

#[inline]
pub(crate) fn syndrome_unchecked(received: u32) -> Syndrome {
    let mut s = 0u16;
    for (pos, h_row) in H.iter().enumerate() {
        let bit = ((received >> (CODEWORD_BITS as usize - 1 - pos)) & 1) as u16;
        s ^= bit.wrapping_neg() & h_row;
    }
    Syndrome(s)
}

/// Computes the syndrome of a 23-bit received word.
///
/// # Errors
///
/// Returns [`Error::InvalidWidth`] if `received` has bits above bit 22.
pub fn syndrome(received: u32) -> Result<Syndrome> {
    check_codeword_width(received)?;
    Ok(syndrome_unchecked(received))
}

pub(crate) fn check_codeword_width(received: u32) -> Result<()> {
    if received & !CODEWORD_MASK != 0 {
        return Err(Error::InvalidWidth {
            value: received,
            bits: CODEWORD_BITS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encoder::encode;
    use crate::codec::matrix::DATA_MASK;

    #[test]
    fn test_codewords_have_zero_syndrome() {
        for data in 0..=DATA_MASK {
            let codeword = encode(data).unwrap();
            assert!(syndrome(codeword).unwrap().is_zero(), "data {:#x}", data);
        }
    }

    #[test]
    fn test_single_bit_syndrome_is_h_row() {
        for pos in 0..CODEWORD_BITS as usize {
            let received = 1u32 << (22 - pos);
            assert_eq!(syndrome(received).unwrap().value(), H[pos]);
        }
    }

    #[test]
    fn test_parity_bits_map_to_identity() {
        // Flipping parity bit 10 - i yields unit syndrome e_i
        for i in 0..11 {
            let received = 1u32 << (10 - i);
            assert_eq!(syndrome(received).unwrap().value(), 1 << (10 - i));
        }
    }

    #[test]
    fn test_syndrome_depends_only_on_error() {
        let error = 0b1000_0000_0100_0000_0000_1u32;
        let base = syndrome(error).unwrap();
        for data in [0x000, 0x123, 0xABC, 0xFFF] {
            let received = encode(data).unwrap() ^ error;
            assert_eq!(syndrome(received).unwrap(), base);
        }
    }

    #[test]
    fn test_syndrome_rejects_wide_input() {
        assert!(syndrome(1 << 23).is_err());
        assert!(syndrome(u32::MAX).is_err());
        assert!(syndrome(0x7F_FFFF).is_ok());
    }

    #[test]
    fn test_syndrome_new() {
        assert_eq!(Syndrome::new(0x7FF).unwrap().value(), 0x7FF);
        assert!(Syndrome::new(0x800).is_err());
        assert_eq!(Syndrome::ZERO.to_string(), "00000000000");
        assert_eq!(u16::from(Syndrome::new(5).unwrap()), 5);
    }
}
