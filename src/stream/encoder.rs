//! Accumulating Golay encoder.
//!
//! Each `write_*` call frames its input independently: the input bits are
//! split into 12-bit words and the final word of that call is zero-padded.

use bitvec::prelude::*;
use log::debug;

use crate::codec::encoder::encode;
use crate::codec::matrix::CODEWORD_BITS;
use crate::error::Result;
use crate::stream::{encode_bitslice, pack, CODEWORD_WIDTH};

/// Encodes data into Golay(23,12) codewords and exposes them in several
/// packed forms.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    blocks: Vec<u32>,
}

impl Encoder {
    /// Creates an empty encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes the first `bits` bits of any integer container, MSB first.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] if `bits` exceeds the bits in
    /// `data`; nothing is encoded in that case.
    pub fn write_bits<T: BitStore>(&mut self, bits: usize, data: &[T]) -> Result<()> {
        let view = pack::prefix(data, bits)?;
        self.extend(encode_bitslice(view));
        Ok(())
    }

    /// Encodes the first `bits` bits of a byte slice.
    ///
    /// ```
    /// use golay23::stream::Encoder;
    ///
    /// let mut enc = Encoder::new();
    /// enc.write_bytes(48, &[0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC]).unwrap();
    /// assert_eq!(enc.codewords().len(), 4);
    /// ```
    pub fn write_bytes(&mut self, bits: usize, data: &[u8]) -> Result<()> {
        self.write_bits(bits, data)
    }

    /// Encodes the first `bits` bits of a `u64` slice.
    pub fn write_u64s(&mut self, bits: usize, data: &[u64]) -> Result<()> {
        self.write_bits(bits, data)
    }

    /// Encodes one bit per boolean.
    pub fn write_bools(&mut self, data: &[bool]) {
        let bits: BitVec<u8, Msb0> = data.iter().copied().collect();
        self.extend(encode_bitslice(bits.as_bitslice()));
    }

    /// Encodes 12-bit data words directly.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidWidth`] if any word exceeds 12 bits;
    /// nothing is encoded in that case.
    pub fn write_words(&mut self, words: &[u16]) -> Result<()> {
        let codewords = words
            .iter()
            .map(|&word| encode(word))
            .collect::<Result<Vec<_>>>()?;
        self.extend(codewords);
        Ok(())
    }

    fn extend(&mut self, codewords: Vec<u32>) {
        debug!(
            "encoder: +{} codewords ({} total)",
            codewords.len(),
            self.blocks.len() + codewords.len()
        );
        self.blocks.extend(codewords);
    }

    /// Encoded codewords, each in the low 23 bits
    pub fn codewords(&self) -> &[u32] {
        &self.blocks
    }

    /// Codewords packed MSB-first into any container type.
    pub fn packed<T: BitStore>(&self) -> Vec<T> {
        pack::pack_words(&self.blocks, CODEWORD_WIDTH)
    }

    /// Codewords packed MSB-first into bytes, zero-padded to a byte boundary.
    pub fn bytes(&self) -> Vec<u8> {
        self.packed()
    }

    /// Codewords packed MSB-first into `u64`s.
    pub fn u64s(&self) -> Vec<u64> {
        self.packed()
    }

    /// Codewords as one boolean per bit, without padding.
    pub fn bools(&self) -> Vec<bool> {
        let packed: Vec<u32> = self.packed();
        packed.view_bits::<Msb0>()[..self.bits()]
            .iter()
            .by_vals()
            .collect()
    }

    /// Total encoded bits
    pub fn bits(&self) -> usize {
        self.blocks.len() * CODEWORD_BITS as usize
    }

    /// Clears all encoded data.
    pub fn reset(&mut self) {
        self.blocks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_write_bytes_block_count() {
        let mut enc = Encoder::new();
        enc.write_bytes(48, &[0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC])
            .unwrap();
        assert_eq!(enc.codewords().len(), 4);
        assert_eq!(enc.codewords()[0], encode(0x123).unwrap());
        assert_eq!(enc.codewords()[3], encode(0xABC).unwrap());
        assert_eq!(enc.bits(), 92);
    }

    #[test]
    fn test_write_u64s_pads_last_block() {
        // 112 bits -> 10 blocks (120 bits with 8 bits of padding)
        let mut enc = Encoder::new();
        enc.write_u64s(112, &[0x1234_5678_9ABC_DEF0, 0xFEDC_BA98_7654_3210])
            .unwrap();
        assert_eq!(enc.codewords().len(), 10);
        // Last block holds bits 108..112 = 0x4 followed by zero padding
        assert_eq!(enc.codewords()[8], encode(0x765).unwrap());
        assert_eq!(enc.codewords()[9], encode(0x400).unwrap());
    }

    #[test]
    fn test_write_bits_rejects_overlong_count() {
        let mut enc = Encoder::new();
        assert!(matches!(
            enc.write_bytes(17, &[0xFF, 0xFF]),
            Err(Error::InvalidInput(_))
        ));
        assert!(enc.codewords().is_empty());
    }

    #[test]
    fn test_write_bools() {
        let mut enc = Encoder::new();
        let mut bits = vec![true; 12];
        bits.push(true);
        enc.write_bools(&bits);
        assert_eq!(
            enc.codewords(),
            &[encode(0xFFF).unwrap(), encode(0x800).unwrap()]
        );
    }

    #[test]
    fn test_write_words() {
        let mut enc = Encoder::new();
        enc.write_words(&[0x000, 0xFFF]).unwrap();
        assert_eq!(enc.codewords(), &[0, 0x7F_FFFF]);

        assert!(enc.write_words(&[0x001, 0x1000]).is_err());
        assert_eq!(enc.codewords().len(), 2);
    }

    #[test]
    fn test_packed_outputs() {
        let mut enc = Encoder::new();
        enc.write_words(&[0xFFF, 0x000]).unwrap();

        // 46 bits -> 6 bytes
        assert_eq!(enc.bytes(), vec![0xFF, 0xFF, 0xFE, 0x00, 0x00, 0x00]);
        assert_eq!(enc.u64s(), vec![0xFFFF_FE00_0000_0000]);
        assert_eq!(enc.packed::<u32>(), vec![0xFFFF_FE00, 0]);

        let bools = enc.bools();
        assert_eq!(bools.len(), 46);
        assert!(bools[..23].iter().all(|&b| b));
        assert!(bools[23..].iter().all(|&b| !b));
    }

    #[test]
    fn test_reset() {
        let mut enc = Encoder::new();
        enc.write_words(&[0x123]).unwrap();
        enc.reset();
        assert_eq!(enc.bits(), 0);
        assert!(enc.bytes().is_empty());
    }
}
