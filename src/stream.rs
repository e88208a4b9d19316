//! Stream framing for the Golay(23,12) codec.
//!
//! Arbitrary bit streams are split MSB-first into 12-bit data words, each
//! word is encoded, and the 23-bit codewords are packed back MSB-first into
//! the caller's container type. Decoding reverses the process, discarding any
//! trailing partial codeword.
//!
//! Containers are any [`BitStore`] integer (`u8`, `u16`, `u32`, `u64`), and
//! the input and output container types may differ.
//!
//! # Examples
//!
//! ```
//! use golay23::stream::{decode_slice, encode_slice};
//!
//! let encoded: Vec<u32> = encode_slice(&[0xFFu8, 0xF0]);
//! assert_eq!(encoded, vec![0xFFFF_FE00, 0]);
//!
//! let decoded = decode_slice::<u32, u16>(&encoded);
//! assert_eq!(decoded.data, vec![0xFFF0, 0x0000]);
//! assert_eq!(decoded.stats.blocks, 2);
//! ```

use bitvec::prelude::*;
use log::{debug, trace, warn};

use crate::codec::decoder::{decode_unchecked, Decoded};
use crate::codec::encoder::encode_unchecked;
use crate::codec::matrix::{CODEWORD_BITS, DATA_BITS};
use crate::codec::DecodeStrategy;
use crate::error::Result;

/// Stateful encoder
pub mod encoder;

/// Stateful decoder
pub mod decoder;

pub(crate) mod pack;

pub use decoder::Decoder;
pub use encoder::Encoder;

const DATA_WIDTH: usize = DATA_BITS as usize;
const CODEWORD_WIDTH: usize = CODEWORD_BITS as usize;

/// Aggregated per-block decoding outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeStats {
    /// Codewords decoded
    pub blocks: usize,
    /// Codewords that needed at least one bit flipped
    pub corrected_blocks: usize,
    /// Total bits flipped across all codewords
    pub corrected_bits: usize,
    /// Codewords with no matching error pattern, kept best-effort
    pub uncorrectable_blocks: usize,
}

impl DecodeStats {
    /// Records the outcome of one block.
    pub fn record(&mut self, index: usize, decoded: &Decoded) {
        self.blocks += 1;
        if decoded.corrected {
            self.corrected_blocks += 1;
            self.corrected_bits += decoded.bits_flipped as usize;
            trace!(
                "block {}: corrected {} bit(s)",
                index,
                decoded.bits_flipped
            );
        }
        if decoded.uncorrectable {
            self.uncorrectable_blocks += 1;
            warn!("block {}: uncorrectable, keeping received data", index);
        }
    }

    /// Combines two sets of statistics.
    pub fn merge(&mut self, other: &DecodeStats) {
        self.blocks += other.blocks;
        self.corrected_blocks += other.corrected_blocks;
        self.corrected_bits += other.corrected_bits;
        self.uncorrectable_blocks += other.uncorrectable_blocks;
    }

    /// True if every block was decoded within the correction radius
    pub fn is_clean(&self) -> bool {
        self.uncorrectable_blocks == 0
    }
}

/// Decoded data together with its per-block statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamDecoded<T> {
    /// Decoded data, packed MSB-first
    pub data: Vec<T>,
    /// Number of meaningful bits in `data`
    pub bits: usize,
    /// Aggregated correction outcomes
    pub stats: DecodeStats,
}

pub(crate) fn encode_bitslice<T: BitStore>(bits: &BitSlice<T, Msb0>) -> Vec<u32> {
    pack::split_words(bits, DATA_WIDTH)
        .into_iter()
        .map(|word| encode_unchecked(word as u16))
        .collect()
}

pub(crate) fn decode_codewords(
    codewords: &[u32],
    strategy: DecodeStrategy,
    first_index: usize,
    stats: &mut DecodeStats,
) -> Vec<u16> {
    codewords
        .iter()
        .enumerate()
        .map(|(i, &codeword)| {
            let decoded = decode_unchecked(codeword, strategy);
            stats.record(first_index + i, &decoded);
            decoded.data
        })
        .collect()
}

/// Encodes every bit of `data`.
///
/// Output length is `ceil(23 * blocks / width(O))` with
/// `blocks = ceil(bits / 12)`; padding bits are zero.
pub fn encode_slice<I: BitStore, O: BitStore>(data: &[I]) -> Vec<O> {
    let codewords = encode_bitslice(data.view_bits::<Msb0>());
    debug!(
        "encoded {} bits into {} codewords",
        data.len() * pack::width::<I>(),
        codewords.len()
    );
    pack::pack_words(&codewords, CODEWORD_WIDTH)
}

/// Encodes the first `bits` bits of `data`.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidInput`] if `bits` exceeds the bits in `data`.
pub fn encode_bits<I: BitStore, O: BitStore>(data: &[I], bits: usize) -> Result<Vec<O>> {
    let codewords = encode_bitslice(pack::prefix(data, bits)?);
    debug!("encoded {} bits into {} codewords", bits, codewords.len());
    Ok(pack::pack_words(&codewords, CODEWORD_WIDTH))
}

/// Decodes every whole codeword in `data`.
pub fn decode_slice<I: BitStore, O: BitStore>(data: &[I]) -> StreamDecoded<O> {
    decode_bitslice(data.view_bits::<Msb0>(), DecodeStrategy::default())
}

/// Decodes the whole codewords within the first `bits` bits of `data`.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidInput`] if `bits` exceeds the bits in `data`.
pub fn decode_bits<I: BitStore, O: BitStore>(data: &[I], bits: usize) -> Result<StreamDecoded<O>> {
    Ok(decode_bitslice(
        pack::prefix(data, bits)?,
        DecodeStrategy::default(),
    ))
}

fn decode_bitslice<I: BitStore, O: BitStore>(
    bits: &BitSlice<I, Msb0>,
    strategy: DecodeStrategy,
) -> StreamDecoded<O> {
    let codewords = pack::split_exact(bits, CODEWORD_WIDTH);
    let mut stats = DecodeStats::default();
    let words: Vec<u32> = decode_codewords(&codewords, strategy, 0, &mut stats)
        .into_iter()
        .map(u32::from)
        .collect();
    debug!(
        "decoded {} codewords ({} corrected, {} uncorrectable)",
        stats.blocks, stats.corrected_blocks, stats.uncorrectable_blocks
    );
    StreamDecoded {
        data: pack::pack_words(&words, DATA_WIDTH),
        bits: words.len() * DATA_WIDTH,
        stats,
    }
}
