//! Base64 encoding (bytes → text).
//!
//! The hot path looks up two output symbols at a time in a precomputed
//! 4096-entry pair table and consumes four 3-byte groups per outer step.

use crate::constants::{ALPHABET_BYTES, ALPHABET_URL_BYTES, PAD};
use crate::Base64Error;

/// Pre-computed two-character lookup tables for base64 encoding, one per
/// alphabet. Each entry is two bytes representing two base64 symbols.
static TABLE2_STANDARD: [[u8; 2]; 4096] = build_table2(ALPHABET_BYTES);
static TABLE2_URL: [[u8; 2]; 4096] = build_table2(ALPHABET_URL_BYTES);

const fn build_table2(alphabet: &[u8; 64]) -> [[u8; 2]; 4096] {
    let mut table = [[0u8; 2]; 4096];
    let mut i = 0;
    while i < 64 {
        let mut j = 0;
        while j < 64 {
            let idx = i * 64 + j;
            table[idx][0] = alphabet[i];
            table[idx][1] = alphabet[j];
            j += 1;
        }
        i += 1;
    }
    table
}

/// Exact padded output length for `n` input bytes.
pub const fn encoded_len(n: usize) -> usize {
    (n + 2) / 3 * 4
}

#[inline(always)]
fn push_group(out: &mut String, table2: &[[u8; 2]; 4096], o1: u8, o2: u8, o3: u8) {
    let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
    let v2 = (((o2 & 0b1111) as usize) << 8) | (o3 as usize);
    let [c1, c2] = table2[v1];
    let [c3, c4] = table2[v2];
    out.push(c1 as char);
    out.push(c2 as char);
    out.push(c3 as char);
    out.push(c4 as char);
}

/// Encodes a byte slice to a padded base64 string.
///
/// The slice may be any view into a larger allocation; only the given window
/// is read. Every input is representable, so this never fails, and the output
/// string is the single allocation made by the call, sized exactly to
/// [`encoded_len`].
///
/// # Arguments
///
/// * `data` - The bytes to encode.
/// * `url_safe` - Use the URL-safe alphabet (`-`/`_`) instead of `+`/`/`.
///
/// # Example
///
/// ```
/// use turbo_base64::encode;
///
/// assert_eq!(encode(b"Man", false), "TWFu");
/// assert_eq!(encode(&[0xFF], true), "_w==");
/// ```
pub fn encode(data: &[u8], url_safe: bool) -> String {
    let table2 = if url_safe { &TABLE2_URL } else { &TABLE2_STANDARD };
    let alphabet = if url_safe { ALPHABET_URL_BYTES } else { ALPHABET_BYTES };

    let length = data.len();
    let mut out = String::with_capacity(encoded_len(length));

    let extra_length = length % 3;
    let base_length = length - extra_length;

    let mut i = 0;
    // Four 3-byte groups (12 bytes -> 16 symbols) per step.
    while i + 12 <= base_length {
        push_group(&mut out, table2, data[i], data[i + 1], data[i + 2]);
        push_group(&mut out, table2, data[i + 3], data[i + 4], data[i + 5]);
        push_group(&mut out, table2, data[i + 6], data[i + 7], data[i + 8]);
        push_group(&mut out, table2, data[i + 9], data[i + 10], data[i + 11]);
        i += 12;
    }

    while i < base_length {
        push_group(&mut out, table2, data[i], data[i + 1], data[i + 2]);
        i += 3;
    }

    if extra_length == 1 {
        let o1 = data[base_length];
        let v1 = (o1 as usize) << 4;
        let [c1, c2] = table2[v1];
        out.push(c1 as char);
        out.push(c2 as char);
        out.push(PAD as char);
        out.push(PAD as char);
    } else if extra_length == 2 {
        let o1 = data[base_length];
        let o2 = data[base_length + 1];
        let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
        let v2 = ((o2 & 0b1111) as usize) << 2;
        let [c1, c2] = table2[v1];
        out.push(c1 as char);
        out.push(c2 as char);
        out.push(alphabet[v2] as char);
        out.push(PAD as char);
    }

    out
}

/// Encodes a byte slice into a caller-provided destination buffer.
///
/// Writes the same padded output as [`encode`] and returns the number of
/// bytes written ([`encoded_len`] of the input length).
///
/// # Errors
///
/// Returns [`Base64Error::BufferTooSmall`] if `dest` cannot hold the output.
///
/// # Example
///
/// ```
/// use turbo_base64::encode_into;
///
/// let mut dest = [0u8; 8];
/// let len = encode_into(b"hello", false, &mut dest).unwrap();
/// assert_eq!(&dest[..len], b"aGVsbG8=");
/// ```
pub fn encode_into(data: &[u8], url_safe: bool, dest: &mut [u8]) -> Result<usize, Base64Error> {
    let table2 = if url_safe { &TABLE2_URL } else { &TABLE2_STANDARD };
    let alphabet = if url_safe { ALPHABET_URL_BYTES } else { ALPHABET_BYTES };

    let length = data.len();
    let out_len = encoded_len(length);
    if dest.len() < out_len {
        return Err(Base64Error::BufferTooSmall);
    }

    let extra_length = length % 3;
    let base_length = length - extra_length;

    let mut i = 0;
    let mut offset = 0;
    while i < base_length {
        let o1 = data[i];
        let o2 = data[i + 1];
        let o3 = data[i + 2];
        let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
        let v2 = (((o2 & 0b1111) as usize) << 8) | (o3 as usize);
        dest[offset..offset + 2].copy_from_slice(&table2[v1]);
        dest[offset + 2..offset + 4].copy_from_slice(&table2[v2]);
        offset += 4;
        i += 3;
    }

    if extra_length == 1 {
        let o1 = data[base_length];
        dest[offset..offset + 2].copy_from_slice(&table2[(o1 as usize) << 4]);
        dest[offset + 2] = PAD;
        dest[offset + 3] = PAD;
        offset += 4;
    } else if extra_length == 2 {
        let o1 = data[base_length];
        let o2 = data[base_length + 1];
        let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
        let v2 = ((o2 & 0b1111) as usize) << 2;
        dest[offset..offset + 2].copy_from_slice(&table2[v1]);
        dest[offset + 2] = alphabet[v2];
        dest[offset + 3] = PAD;
        offset += 4;
    }

    Ok(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(encode(b"", false), "");
        assert_eq!(encode(b"", true), "");
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(encode(b"f", false), "Zg==");
        assert_eq!(encode(b"fo", false), "Zm8=");
        assert_eq!(encode(b"foo", false), "Zm9v");
        assert_eq!(encode(b"foob", false), "Zm9vYg==");
        assert_eq!(encode(b"fooba", false), "Zm9vYmE=");
        assert_eq!(encode(b"foobar", false), "Zm9vYmFy");
    }

    #[test]
    fn test_url_safe_is_padded() {
        assert_eq!(encode(&[0xFF], true), "_w==");
        assert_eq!(encode(&[0xFF], false), "/w==");
        assert_eq!(encode(&[0xFB, 0xEF], true), "--8=");
    }

    #[test]
    fn test_encoded_len() {
        assert_eq!(encoded_len(0), 0);
        assert_eq!(encoded_len(1), 4);
        assert_eq!(encoded_len(2), 4);
        assert_eq!(encoded_len(3), 4);
        assert_eq!(encoded_len(4), 8);
    }

    #[test]
    fn test_encode_into_matches_encode() {
        let data: Vec<u8> = (0..=255).collect();
        let mut dest = vec![0u8; encoded_len(data.len())];
        let len = encode_into(&data, false, &mut dest).unwrap();
        assert_eq!(len, dest.len());
        assert_eq!(dest, encode(&data, false).into_bytes());
    }

    #[test]
    fn test_encode_into_short_buffer() {
        let mut dest = [0u8; 3];
        assert_eq!(
            encode_into(b"abc", false, &mut dest),
            Err(Base64Error::BufferTooSmall)
        );
    }
}
