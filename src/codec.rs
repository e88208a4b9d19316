//! Binary Golay(23,12) codec.
//!
//! The Golay(23,12) code encodes 12 data bits into a 23-bit codeword by
//! appending 11 parity bits. It is a perfect code with minimum distance 7:
//! every received word lies within distance 3 of exactly one codeword, so
//! up to 3 bit errors per codeword are always corrected.
//!
//! This module provides:
//! - The fixed generator and parity-check matrices
//! - Single word encoding
//! - Syndrome computation
//! - Error pattern search, both brute force and via a compile-time table
//! - Single word decoding with correction reporting
//!
//! Codewords are laid out MSB first: data bits 22..11, parity bits 10..0.
//! Bit position `p` in the matrices refers to numeric bit `22 - p`.
//!
//! # Examples
//!
//! ```
//! use golay23::codec::{decode, encode};
//!
//! let codeword = encode(0xABC).unwrap();
//! let received = codeword ^ 0b101 ^ (1 << 20);
//!
//! let decoded = decode(received).unwrap();
//! assert_eq!(decoded.data, 0xABC);
//! assert_eq!(decoded.bits_flipped, 3);
//! assert!(!decoded.uncorrectable);
//! ```

/// Generator and parity-check matrices
pub mod matrix;

/// Codeword construction
pub mod encoder;

/// Syndrome computation
pub mod syndrome;

/// Error pattern search
pub mod search;

/// Word decoding
pub mod decoder;

pub use decoder::{decode, decode_strict, decode_with, Decoded};
pub use encoder::{encode, parity};
pub use matrix::{CODEWORD_BITS, DATA_BITS, PARITY_BITS};
pub use search::{correct, correct_with, lookup, search, Correction, ErrorPattern};
pub use syndrome::{syndrome, Syndrome};

/// Strategy used to map a non-zero syndrome to its error pattern.
///
/// Both strategies return identical results; they differ only in cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeStrategy {
    /// O(1) lookup in a table built at compile time
    #[default]
    LookupTable,
    /// Ordered search over all patterns of weight 1, 2 and 3
    BruteForce,
}
