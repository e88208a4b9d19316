//! Golay(23,12) encoding.
//!
//! Parity is the GF(2) product of the data word with the generator matrix.
//! The product is computed with masks instead of branches so encoding time
//! does not depend on the data value.

use crate::codec::matrix::{DATA_BITS, DATA_MASK, G, PARITY_BITS};
use crate::error::{Error, Result};

/// Computes the 11 parity bits of a data word.
///
/// Only the low 12 bits of `data` are read; callers validate width.
#[inline]
pub(crate) fn parity_unchecked(data: u16) -> u16 {
    let mut parity = 0u16;
    for (row, g_row) in G.iter().enumerate() {
        let bit = (data >> (DATA_BITS as usize - 1 - row)) & 1;
        parity ^= bit.wrapping_neg() & g_row;
    }
    parity
}

/// Computes the 11 parity bits of a 12-bit data word.
///
/// # Errors
///
/// Returns [`Error::InvalidWidth`] if `data` has bits set above bit 11.
pub fn parity(data: u16) -> Result<u16> {
    check_data_width(data)?;
    Ok(parity_unchecked(data))
}

/// Encodes a 12-bit data word into a 23-bit codeword.
///
/// The codeword holds the data bits in bits 22..11 and the parity bits in
/// bits 10..0. Inputs wider than 12 bits are rejected, never truncated.
///
/// # Examples
///
/// ```
/// use golay23::codec::encode;
///
/// assert_eq!(encode(0).unwrap(), 0);
/// assert_eq!(encode(0xFFF).unwrap(), 0x7F_FFFF);
/// assert!(encode(0x1000).is_err());
/// ```
pub fn encode(data: u16) -> Result<u32> {
    check_data_width(data)?;
    Ok(encode_unchecked(data))
}

#[inline]
pub(crate) fn encode_unchecked(data: u16) -> u32 {
    ((data as u32) << PARITY_BITS) | parity_unchecked(data) as u32
}

fn check_data_width(data: u16) -> Result<()> {
    if data & !DATA_MASK != 0 {
        return Err(Error::InvalidWidth {
            value: data as u32,
            bits: DATA_BITS,
        });
    }
    Ok(())
}
