//! Error types shared by the codec and the stream framing layer.

use thiserror::Error;

/// Errors produced by Golay encoding, decoding and framing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A value has set bits above the width the operation accepts.
    #[error("value {value:#x} does not fit in {bits} bits")]
    InvalidWidth {
        /// The rejected value
        value: u32,
        /// Number of bits the operation accepts
        bits: u32,
    },

    /// No error pattern of weight 3 or less matches the syndrome.
    #[error("uncorrectable word: syndrome {syndrome:#05x} matches no pattern of weight <= 3")]
    Uncorrectable {
        /// The non-zero syndrome that could not be resolved
        syndrome: u16,
    },

    /// Malformed arguments, such as a bit count larger than the container.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A read asked for more decoded bits than are available.
    #[error("requested {requested} bits but only {available} are available")]
    InsufficientData {
        /// Number of bits requested
        requested: usize,
        /// Number of unread bits
        available: usize,
    },
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidWidth {
            value: 0x1000,
            bits: 12,
        };
        assert_eq!(err.to_string(), "value 0x1000 does not fit in 12 bits");

        let err = Error::Uncorrectable { syndrome: 0x7 };
        assert!(err.to_string().contains("0x007"));

        let err = Error::InsufficientData {
            requested: 24,
            available: 12,
        };
        assert_eq!(
            err.to_string(),
            "requested 24 bits but only 12 are available"
        );
    }
}
