//! Accumulating Golay decoder with a read cursor.
//!
//! Codewords are decoded as they are written. Decoded data is then read back
//! in arbitrary bit counts; reads advance a cursor over the decoded stream.

use bitvec::prelude::*;
use log::debug;

use crate::codec::matrix::DATA_BITS;
use crate::codec::syndrome::check_codeword_width;
use crate::codec::DecodeStrategy;
use crate::error::{Error, Result};
use crate::stream::{decode_codewords, pack, DecodeStats, CODEWORD_WIDTH, DATA_WIDTH};

/// Decodes Golay(23,12) codewords and serves the corrected data.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    decoded: Vec<u16>,
    pos: usize,
    strategy: DecodeStrategy,
    stats: DecodeStats,
}

impl Decoder {
    /// Creates an empty decoder using the lookup table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty decoder with an explicit resolution strategy.
    pub fn with_strategy(strategy: DecodeStrategy) -> Self {
        Decoder {
            strategy,
            ..Self::default()
        }
    }

    /// Decodes codewords held in the low 23 bits of each value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWidth`] if any value exceeds 23 bits; nothing
    /// is decoded in that case.
    pub fn write_codewords(&mut self, codewords: &[u32]) -> Result<()> {
        for &codeword in codewords {
            check_codeword_width(codeword)?;
        }
        self.push(codewords);
        Ok(())
    }

    /// Decodes the whole codewords within the first `bits` bits of any
    /// integer container, MSB first. A trailing partial codeword is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `bits` exceeds the bits in `data`.
    pub fn write_bits<T: BitStore>(&mut self, bits: usize, data: &[T]) -> Result<()> {
        let view = pack::prefix(data, bits)?;
        if bits % CODEWORD_WIDTH != 0 {
            debug!(
                "decoder: dropping {} trailing bits",
                bits % CODEWORD_WIDTH
            );
        }
        self.push(&pack::split_exact(view, CODEWORD_WIDTH));
        Ok(())
    }

    /// Decodes from a byte slice as produced by
    /// [`Encoder::bytes`](crate::stream::Encoder::bytes).
    pub fn write_bytes(&mut self, bits: usize, data: &[u8]) -> Result<()> {
        self.write_bits(bits, data)
    }

    /// Decodes from `u64`s as produced by
    /// [`Encoder::u64s`](crate::stream::Encoder::u64s).
    pub fn write_u64s(&mut self, bits: usize, data: &[u64]) -> Result<()> {
        self.write_bits(bits, data)
    }

    /// Decodes one bit per boolean; each 23 consecutive values form a codeword.
    pub fn write_bools(&mut self, data: &[bool]) {
        let bits: BitVec<u8, Msb0> = data.iter().copied().collect();
        self.push(&pack::split_exact(bits.as_bitslice(), CODEWORD_WIDTH));
    }

    fn push(&mut self, codewords: &[u32]) {
        let first = self.stats.blocks;
        let mut stats = DecodeStats::default();
        let words = decode_codewords(codewords, self.strategy, first, &mut stats);
        debug!(
            "decoder: +{} codewords ({} corrected, {} uncorrectable)",
            stats.blocks, stats.corrected_blocks, stats.uncorrectable_blocks
        );
        self.stats.merge(&stats);
        self.decoded.extend(words);
    }

    /// Reads the next `bits` decoded bits packed MSB-first into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientData`] if fewer than `bits` bits remain;
    /// the cursor does not move in that case.
    pub fn read_bits<T: BitStore>(&mut self, bits: usize) -> Result<Vec<T>> {
        self.check_remaining(bits)?;
        let width = pack::width::<T>();
        let mut out = BitVec::<T, Msb0>::repeat(false, bits.div_ceil(width) * width);
        for i in 0..bits {
            out.set(i, self.bit_at(self.pos + i));
        }
        self.pos += bits;
        Ok(out.into_vec())
    }

    /// Reads the next `bits` decoded bits as `u64`s.
    ///
    /// ```
    /// use golay23::stream::{Decoder, Encoder};
    ///
    /// let mut enc = Encoder::new();
    /// enc.write_u64s(64, &[0x0123_4567_89AB_CDEF]).unwrap();
    ///
    /// let mut dec = Decoder::new();
    /// dec.write_u64s(enc.bits(), &enc.u64s()).unwrap();
    /// assert_eq!(dec.read_u64s(64).unwrap(), vec![0x0123_4567_89AB_CDEF]);
    /// ```
    pub fn read_u64s(&mut self, bits: usize) -> Result<Vec<u64>> {
        self.read_bits(bits)
    }

    /// Reads the next `bits` decoded bits as bytes.
    pub fn read_bytes(&mut self, bits: usize) -> Result<Vec<u8>> {
        self.read_bits(bits)
    }

    /// Reads the next `bits` decoded bits as booleans.
    pub fn read_bools(&mut self, bits: usize) -> Result<Vec<bool>> {
        self.check_remaining(bits)?;
        let out = (self.pos..self.pos + bits).map(|i| self.bit_at(i)).collect();
        self.pos += bits;
        Ok(out)
    }

    fn check_remaining(&self, bits: usize) -> Result<()> {
        if bits > self.remaining() {
            return Err(Error::InsufficientData {
                requested: bits,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    fn bit_at(&self, index: usize) -> bool {
        let word = self.decoded[index / DATA_WIDTH];
        (word >> (DATA_WIDTH - 1 - index % DATA_WIDTH)) & 1 == 1
    }

    /// All decoded 12-bit words, regardless of the read cursor
    pub fn read_all(&self) -> &[u16] {
        &self.decoded
    }

    /// Total decoded bits
    pub fn bits(&self) -> usize {
        self.decoded.len() * DATA_BITS as usize
    }

    /// Decoded bits not yet read
    pub fn remaining(&self) -> usize {
        self.bits() - self.pos
    }

    /// Correction statistics since creation or the last reset
    pub fn stats(&self) -> DecodeStats {
        self.stats
    }

    /// Resolution strategy in use
    pub fn strategy(&self) -> DecodeStrategy {
        self.strategy
    }

    /// Clears decoded data, statistics and the read cursor.
    pub fn reset(&mut self) {
        self.decoded.clear();
        self.pos = 0;
        self.stats = DecodeStats::default();
    }
}
