//! MSB-first bit packing between integer containers and fixed-width words.

use bitvec::prelude::*;

use crate::error::{Error, Result};

/// Width of one container element in bits
pub(crate) fn width<T>() -> usize {
    std::mem::size_of::<T>() * 8
}

/// Reads a slice of at most 32 bits as an MSB-first integer.
pub(crate) fn read_msb<T: BitStore>(bits: &BitSlice<T, Msb0>) -> u32 {
    bits.iter()
        .by_vals()
        .fold(0, |value, bit| (value << 1) | bit as u32)
}

/// Writes the low `bits.len()` bits of `value` MSB-first.
pub(crate) fn store_msb<T: BitStore>(bits: &mut BitSlice<T, Msb0>, value: u32) {
    let len = bits.len();
    for i in 0..len {
        bits.set(i, (value >> (len - 1 - i)) & 1 == 1);
    }
}

/// Splits a bit stream into `word_bits` words; the last word is zero-padded.
pub(crate) fn split_words<T: BitStore>(bits: &BitSlice<T, Msb0>, word_bits: usize) -> Vec<u32> {
    bits.chunks(word_bits)
        .map(|chunk| read_msb(chunk) << (word_bits - chunk.len()))
        .collect()
}

/// Splits a bit stream into whole words, dropping a trailing partial word.
pub(crate) fn split_exact<T: BitStore>(bits: &BitSlice<T, Msb0>, word_bits: usize) -> Vec<u32> {
    bits.chunks_exact(word_bits).map(read_msb).collect()
}

/// Packs fixed-width words MSB-first into containers, zero-padding the tail.
pub(crate) fn pack_words<T: BitStore>(words: &[u32], word_bits: usize) -> Vec<T> {
    let total = words.len() * word_bits;
    let mut packed = BitVec::<T, Msb0>::repeat(false, total.div_ceil(width::<T>()) * width::<T>());
    for (i, &word) in words.iter().enumerate() {
        store_msb(&mut packed[i * word_bits..(i + 1) * word_bits], word);
    }
    packed.into_vec()
}

/// Returns the first `bits` bits of `data`.
pub(crate) fn prefix<T: BitStore>(data: &[T], bits: usize) -> Result<&BitSlice<T, Msb0>> {
    let view = data.view_bits::<Msb0>();
    if bits > view.len() {
        return Err(Error::InvalidInput(format!(
            "bit count {} exceeds the {} bits supplied",
            bits,
            view.len()
        )));
    }
    Ok(&view[..bits])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_store_msb() {
        let mut bits = bitvec![u8, Msb0; 0; 16];
        store_msb(&mut bits[2..14], 0xABC);
        assert_eq!(bits.as_raw_slice(), &[0x2A, 0xF0]);
        assert_eq!(read_msb(&bits[2..14]), 0xABC);
    }

    #[test]
    fn test_split_words_pads_tail() {
        let data = [0xFFu8, 0xF0];
        let words = split_words(data.view_bits::<Msb0>(), 12);
        assert_eq!(words, vec![0xFFF, 0x000]);

        let data = [0x12u8, 0x34, 0x5F];
        let words = split_words(data.view_bits::<Msb0>(), 12);
        assert_eq!(words, vec![0x123, 0x45F]);

        let data = [0xABu8];
        assert_eq!(split_words(data.view_bits::<Msb0>(), 12), vec![0xAB0]);
    }

    #[test]
    fn test_split_exact_drops_partial() {
        let data = [0xFFFF_FE00u32, 0];
        let words = split_exact(data.view_bits::<Msb0>(), 23);
        assert_eq!(words, vec![0x7F_FFFF, 0]);
    }

    #[test]
    fn test_pack_words() {
        let packed: Vec<u32> = pack_words(&[0x7F_FFFF, 0], 23);
        assert_eq!(packed, vec![0xFFFF_FE00, 0]);

        let packed: Vec<u8> = pack_words(&[0xABC, 0xDEF], 12);
        assert_eq!(packed, vec![0xAB, 0xCD, 0xEF]);

        let packed: Vec<u64> = pack_words(&[], 23);
        assert!(packed.is_empty());
    }

    #[test]
    fn test_prefix() {
        let data = [0u8; 2];
        assert_eq!(prefix(&data, 12).unwrap().len(), 12);
        assert!(prefix(&data, 17).is_err());
    }
}
