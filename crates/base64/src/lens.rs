//! Length and padding helpers.
//!
//! Pure text-level calculations with no dependency on the codec tables.
//! Callers use [`byte_length`] to pre-size output buffers without running a
//! full decode. Unlike [`crate::decode`], these helpers are strict about the
//! overall length being a multiple of 4.

use crate::constants::PAD;
use crate::Base64Error;

/// Alternate placeholder some producers use instead of `=` in URL contexts.
const PAD_ALT: u8 = b'.';

/// Splits a base64 string into its valid length and placeholder length.
///
/// `valid_len` is the index of the first padding character, or the full text
/// length if none is present; `placeholder_len` is `0` in that case, else
/// `4 - valid_len % 4`.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidLength`] if the text length is not a
/// multiple of 4, or if the first `=` sits where no valid tail group can
/// place it (a placeholder length is only ever 1 or 2).
///
/// # Example
///
/// ```
/// use turbo_base64::get_lens;
///
/// assert_eq!(get_lens("TWE=").unwrap(), (3, 1));
/// assert_eq!(get_lens("TWFu").unwrap(), (4, 0));
/// ```
pub fn get_lens(text: &str) -> Result<(usize, usize), Base64Error> {
    let len = text.len();
    if len % 4 != 0 {
        return Err(Base64Error::InvalidLength);
    }

    let valid_len = text.bytes().position(|b| b == PAD).unwrap_or(len);
    let placeholder_len = if valid_len == len {
        0
    } else {
        4 - valid_len % 4
    };
    // A tail group holds at most two placeholders; '=' at a quartet boundary
    // (or right after one symbol) would claim 4 or 3 and break the
    // byte-length formula.
    if placeholder_len > 2 {
        return Err(Base64Error::InvalidLength);
    }

    Ok((valid_len, placeholder_len))
}

/// Calculates the decoded byte length of a base64 string.
///
/// Equals the number of bytes [`crate::decode`] produces for well-formed
/// padded text.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidLength`] if the text length is not a
/// multiple of 4.
///
/// # Example
///
/// ```
/// use turbo_base64::byte_length;
///
/// assert_eq!(byte_length("TWE=").unwrap(), 2);
/// ```
pub fn byte_length(text: &str) -> Result<usize, Base64Error> {
    let (valid_len, placeholder_len) = get_lens(text)?;
    Ok((valid_len + placeholder_len) * 3 / 4 - placeholder_len)
}

/// Strips a trailing run of 1–2 placeholder characters (`=` or `.`).
///
/// A pure string transformation; the remainder is not validated.
///
/// # Example
///
/// ```
/// use turbo_base64::trim_padding;
///
/// assert_eq!(trim_padding("TWE="), "TWE");
/// assert_eq!(trim_padding("Zg=="), "Zg");
/// assert_eq!(trim_padding("TWFu"), "TWFu");
/// ```
pub fn trim_padding(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = bytes.len();
    let stop = end.saturating_sub(2);
    while end > stop && (bytes[end - 1] == PAD || bytes[end - 1] == PAD_ALT) {
        end -= 1;
    }
    &text[..end]
}
