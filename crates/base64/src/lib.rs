//! Table-driven base64 encoding and decoding.
//!
//! This crate provides the codec engine behind the turbo-base64 bridge:
//! - Standard base64 with padding
//! - URL-safe base64 (`-` and `_` instead of `+` and `/`), also padded
//! - Line-break-tolerant decoding for producers that wrap output
//! - Slice-destination variants that avoid the output allocation
//!
//! Encoding and decoding are pure functions over immutable static lookup
//! tables, so calls are safe to run concurrently without synchronization.
//!
//! # Example
//!
//! ```
//! use turbo_base64::{decode, encode};
//!
//! let data = b"hello world";
//! let encoded = encode(data, false);
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
//! let decoded = decode(&encoded, false).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

use thiserror::Error;

mod constants;
mod decode;
mod encode;
mod lens;

pub use constants::{ALPHABET, ALPHABET_BYTES, ALPHABET_URL, ALPHABET_URL_BYTES, PAD};
pub use decode::{decode, decode_into};
pub use encode::{encode, encode_into, encoded_len};
pub use lens::{byte_length, get_lens, trim_padding};

/// Error type for base64 operations.
///
/// Encoding is total and never produces one of these; decoding and the
/// length helpers fail closed on malformed input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Base64Error {
    /// The base64 string length must be a multiple of 4 (decoding tolerates
    /// unpadded remainders of 2 or 3; the length helpers do not).
    #[error("base64 length must be a multiple of 4")]
    InvalidLength,
    /// A byte outside the active alphabets, or a padding character in a
    /// non-final position. `pos` is the offset in the preprocessed text
    /// (after line-break stripping, when enabled).
    #[error("invalid base64 symbol {byte:#04x} at position {pos}")]
    InvalidSymbol {
        /// The offending input byte.
        byte: u8,
        /// Offset of the byte in the preprocessed input.
        pos: usize,
    },
    /// The destination slice passed to an `_into` variant cannot hold the
    /// output.
    #[error("destination buffer is too small")]
    BufferTooSmall,
}
