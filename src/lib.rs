pub mod codec;
pub mod error;
pub mod stream;

pub use codec::{decode, encode, DecodeStrategy, Decoded};
pub use error::{Error, Result};
