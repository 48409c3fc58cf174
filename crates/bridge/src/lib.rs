//! Binding surface for the turbo-base64 codec engine.
//!
//! The upstream library injected its two entry points into the host
//! runtime's global scope and had callers probe `globalThis` before use.
//! Here the entry points travel in an explicit [`EntryPoints`] capability
//! struct instead: the host constructs a [`Codec`] once at startup and
//! passes it to every call site. No process-wide mutable globals.
//!
//! The engine itself is unaware of this layer; the pure helper surface
//! ([`byte_length`], [`trim_padding`]) is re-exported directly and needs no
//! entry points at all.
//!
//! # Example
//!
//! ```
//! use turbo_base64_bridge::Codec;
//!
//! let codec = Codec::native();
//! let text = codec.encode_buffer_to_text(b"hello", false);
//! assert_eq!(text, "aGVsbG8=");
//! let bytes = codec.decode_text_to_buffer(&text, false).unwrap();
//! assert_eq!(bytes, b"hello");
//! ```

use thiserror::Error;
use turbo_base64::Base64Error;

pub use turbo_base64::{byte_length, trim_padding};

/// Error type for the binding surface.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BridgeError {
    /// The transcoding entry points were not installed. Reported once at
    /// construction, not per call.
    #[error("base64 transcoding entry points are not installed")]
    Unavailable,
    /// An engine error passing through the bridge.
    #[error(transparent)]
    Codec(#[from] Base64Error),
}

/// Signature of the "encode buffer to text" entry point.
pub type EncodeFn = fn(&[u8], bool) -> String;

/// Signature of the "decode text to buffer" entry point.
pub type DecodeFn = fn(&str, bool) -> Result<Vec<u8>, Base64Error>;

/// The two transcoding entry points a [`Codec`] is constructed from.
#[derive(Clone, Copy)]
pub struct EntryPoints {
    pub encode: EncodeFn,
    pub decode: DecodeFn,
}

impl EntryPoints {
    /// Entry points wired to the in-process codec engine.
    pub fn native() -> Self {
        EntryPoints {
            encode: turbo_base64::encode,
            decode: turbo_base64::decode,
        }
    }
}

/// Handle exposing the codec's two operations to call sites.
///
/// Cheap to copy; hand one to every caller instead of looking the entry
/// points up in ambient scope.
#[derive(Clone, Copy)]
pub struct Codec {
    entries: EntryPoints,
}

impl Codec {
    /// A codec backed by the in-process engine. Always available.
    pub fn native() -> Self {
        Codec {
            entries: EntryPoints::native(),
        }
    }

    /// Availability probe: builds a codec from entry points the host may or
    /// may not have installed.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Unavailable`] when the entry points are absent.
    /// Absence is a recoverable state for the caller (fall back or surface
    /// the error), not a crash.
    pub fn from_entry_points(entries: Option<EntryPoints>) -> Result<Self, BridgeError> {
        match entries {
            Some(entries) => Ok(Codec { entries }),
            None => Err(BridgeError::Unavailable),
        }
    }

    /// Encodes a buffer to base64 text. Synchronous, total, never fails.
    pub fn encode_buffer_to_text(&self, buffer: &[u8], url_safe: bool) -> String {
        (self.entries.encode)(buffer, url_safe)
    }

    /// Decodes base64 text to a freshly allocated buffer.
    ///
    /// An empty string returns a zero-length buffer without invoking the
    /// underlying transform.
    ///
    /// # Errors
    ///
    /// Propagates the engine's [`Base64Error`] on malformed length or
    /// invalid symbols.
    pub fn decode_text_to_buffer(
        &self,
        text: &str,
        remove_linebreaks: bool,
    ) -> Result<Vec<u8>, BridgeError> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        Ok((self.entries.decode)(text, remove_linebreaks)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn generate_blob() -> Vec<u8> {
        let mut rng = rand::thread_rng();
        let length = rng.gen_range(0..=100);
        (0..length).map(|_| rng.gen::<u8>()).collect()
    }

    #[test]
    fn bridge_round_trips() {
        let codec = Codec::native();
        for _ in 0..100 {
            let blob = generate_blob();
            let text = codec.encode_buffer_to_text(&blob, false);
            let bytes = codec.decode_text_to_buffer(&text, false).unwrap();
            assert_eq!(bytes, blob);
        }
    }

    #[test]
    fn empty_string_skips_the_transform() {
        // A decode fn that would fail loudly if invoked.
        fn poisoned(_: &str, _: bool) -> Result<Vec<u8>, Base64Error> {
            Err(Base64Error::InvalidLength)
        }
        let codec = Codec::from_entry_points(Some(EntryPoints {
            encode: turbo_base64::encode,
            decode: poisoned,
        }))
        .unwrap();
        assert_eq!(codec.decode_text_to_buffer("", false).unwrap(), b"");
    }

    #[test]
    fn absent_entry_points_are_recoverable() {
        let result = Codec::from_entry_points(None);
        assert!(matches!(result, Err(BridgeError::Unavailable)));
    }

    #[test]
    fn engine_errors_pass_through() {
        let codec = Codec::native();
        let result = codec.decode_text_to_buffer("TWFuX", false);
        assert_eq!(
            result,
            Err(BridgeError::Codec(Base64Error::InvalidLength))
        );
    }

    #[test]
    fn helper_surface_needs_no_entry_points() {
        assert_eq!(byte_length("TWE=").unwrap(), 2);
        assert_eq!(trim_padding("TWE="), "TWE");
    }
}
