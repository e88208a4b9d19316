//! Golay(23,12) decoding.
//!
//! Decoding runs the syndrome computation and error pattern resolution, then
//! takes the 12 leading bits of the corrected codeword. Data is returned even
//! when correction fails; beyond 3 errors the result carries no guarantee.

use crate::codec::matrix::{DATA_MASK, PARITY_BITS};
use crate::codec::search::{correct_unchecked, correct_with, Correction};
use crate::codec::DecodeStrategy;
use crate::error::{Error, Result};

/// Result of decoding one received word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// The 12-bit data word
    pub data: u16,
    /// True if any bit was flipped
    pub corrected: bool,
    /// Number of bits flipped, 0 to 3
    pub bits_flipped: u8,
    /// True if no pattern of weight 3 or less matched
    pub uncorrectable: bool,
}

impl From<Correction> for Decoded {
    fn from(correction: Correction) -> Self {
        let data = (correction.codeword() >> PARITY_BITS) as u16 & DATA_MASK;
        Decoded {
            data,
            corrected: correction.bits_flipped() > 0,
            bits_flipped: correction.bits_flipped(),
            uncorrectable: correction.is_uncorrectable(),
        }
    }
}

/// Decodes a 23-bit received word, correcting up to 3 bit errors.
///
/// # Errors
///
/// Returns [`Error::InvalidWidth`] if `received` is wider than 23 bits.
///
/// # Examples
///
/// ```
/// use golay23::codec::{decode, encode};
///
/// let decoded = decode(encode(0x123).unwrap() ^ 0x10).unwrap();
/// assert_eq!(decoded.data, 0x123);
/// assert!(decoded.corrected);
/// assert_eq!(decoded.bits_flipped, 1);
/// ```
pub fn decode(received: u32) -> Result<Decoded> {
    decode_with(received, DecodeStrategy::default())
}

/// Decodes with an explicit syndrome resolution strategy.
pub fn decode_with(received: u32, strategy: DecodeStrategy) -> Result<Decoded> {
    correct_with(received, strategy).map(Decoded::from)
}

#[inline]
pub(crate) fn decode_unchecked(received: u32, strategy: DecodeStrategy) -> Decoded {
    Decoded::from(correct_unchecked(received, strategy))
}

/// Decodes, failing instead of returning best-effort data.
///
/// # Errors
///
/// Returns [`Error::Uncorrectable`] when no pattern of weight 3 or less
/// matches, in addition to the width errors of [`decode`].
pub fn decode_strict(received: u32) -> Result<u16> {
    match correct_with(received, DecodeStrategy::default())? {
        Correction::Uncorrectable { syndrome, .. } => Err(Error::Uncorrectable {
            syndrome: syndrome.value(),
        }),
        correction => Ok(Decoded::from(correction).data),
    }
}
