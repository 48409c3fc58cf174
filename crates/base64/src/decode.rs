//! Base64 decoding (text → bytes).
//!
//! A single 256-entry inverse table serves both alphabets: `+` and `-` map
//! to 62, `/` and `_` to 63, everything else to a sentinel whose high bit is
//! accumulated across each quartet and tested once. Decoding is strict:
//! padding is only valid in the final one or two positions, and nothing may
//! follow it. Unpadded input with a last-group length of 2 or 3 symbols is
//! accepted; a remainder of 1 never is.

use crate::constants::{ALPHABET_BYTES, PAD};
use crate::Base64Error;

/// Sentinel for bytes outside both alphabets.
const INVALID: u8 = 0xFF;

/// Inverse lookup table accepting both the standard and URL-safe alphabets.
/// `=` is deliberately absent; padding is handled structurally before lookup.
static DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table[b'-' as usize] = 62;
    table[b'_' as usize] = 63;
    table
};

/// Structural breakdown of a base64 input, computed before any symbol lookup.
struct Layout {
    /// Number of symbols before the trailing padding run.
    valid_len: usize,
    /// Symbols in the final partial quartet: 0, 2, or 3.
    tail: usize,
    /// Exact decoded size in bytes.
    out_len: usize,
}

fn layout(input: &[u8]) -> Result<Layout, Base64Error> {
    let len = input.len();

    let mut pad = 0;
    while pad < 2 && pad < len && input[len - 1 - pad] == PAD {
        pad += 1;
    }
    let valid_len = len - pad;

    let tail = valid_len % 4;
    let need = match tail {
        0 => 0,
        2 => 2,
        3 => 1,
        // A single leftover symbol can never encode a valid tail group.
        _ => return Err(Base64Error::InvalidLength),
    };
    // Explicit padding must complete the last quartet exactly; partial or
    // surplus padding is a malformed length.
    if pad != 0 && pad != need {
        return Err(Base64Error::InvalidLength);
    }

    let out_len = (valid_len + need) / 4 * 3 - need;
    Ok(Layout {
        valid_len,
        tail,
        out_len,
    })
}

/// Locates the offending byte after the fast path's accumulated sentinel
/// test fired for `input[window]`.
#[cold]
fn first_invalid(input: &[u8], start: usize, end: usize) -> Base64Error {
    let mut i = start;
    while i < end {
        if DECODE_TABLE[input[i] as usize] == INVALID {
            return Base64Error::InvalidSymbol {
                byte: input[i],
                pos: i,
            };
        }
        i += 1;
    }
    // Unreachable: callers only get here after a sentinel hit in the window.
    Base64Error::InvalidSymbol {
        byte: input[start],
        pos: start,
    }
}

#[inline(always)]
fn read_quartet(input: &[u8], i: usize) -> (u32, u8) {
    let a = DECODE_TABLE[input[i] as usize];
    let b = DECODE_TABLE[input[i + 1] as usize];
    let c = DECODE_TABLE[input[i + 2] as usize];
    let d = DECODE_TABLE[input[i + 3] as usize];
    let triple = ((a as u32) << 18) | ((b as u32) << 12) | ((c as u32) << 6) | (d as u32);
    (triple, a | b | c | d)
}

#[inline(always)]
fn write_triple(dest: &mut [u8], j: usize, triple: u32) {
    dest[j] = (triple >> 16) as u8;
    dest[j + 1] = (triple >> 8) as u8;
    dest[j + 2] = triple as u8;
}

fn decode_layout(input: &[u8], lay: &Layout, dest: &mut [u8]) -> Result<(), Base64Error> {
    let main_length = lay.valid_len - lay.tail;
    let mut i = 0;
    let mut j = 0;

    // Four quartets (16 symbols -> 12 bytes) per step.
    while i + 16 <= main_length {
        let (t0, a0) = read_quartet(input, i);
        let (t1, a1) = read_quartet(input, i + 4);
        let (t2, a2) = read_quartet(input, i + 8);
        let (t3, a3) = read_quartet(input, i + 12);
        if (a0 | a1 | a2 | a3) & 0x80 != 0 {
            return Err(first_invalid(input, i, i + 16));
        }
        write_triple(dest, j, t0);
        write_triple(dest, j + 3, t1);
        write_triple(dest, j + 6, t2);
        write_triple(dest, j + 9, t3);
        i += 16;
        j += 12;
    }

    while i < main_length {
        let (t, acc) = read_quartet(input, i);
        if acc & 0x80 != 0 {
            return Err(first_invalid(input, i, i + 4));
        }
        write_triple(dest, j, t);
        i += 4;
        j += 3;
    }

    // Final partial quartet; any explicit padding was stripped by layout().
    if lay.tail >= 2 {
        let a = DECODE_TABLE[input[i] as usize];
        let b = DECODE_TABLE[input[i + 1] as usize];
        if (a | b) & 0x80 != 0 {
            return Err(first_invalid(input, i, i + 2));
        }
        dest[j] = (a << 2) | (b >> 4);
        if lay.tail == 3 {
            let c = DECODE_TABLE[input[i + 2] as usize];
            if c & 0x80 != 0 {
                return Err(first_invalid(input, i + 2, i + 3));
            }
            dest[j + 1] = (b << 4) | (c >> 2);
        }
    }

    Ok(())
}

/// Decodes a base64 string to a byte vector.
///
/// Both alphabets decode through the same inverse table, so standard and
/// URL-safe input (and mixes of the two) are handled uniformly. Decoding is
/// fail-fast: it stops at the first invalid symbol and reports its position,
/// and never returns partially decoded data.
///
/// # Arguments
///
/// * `text` - The base64 text to decode. May omit padding (last-group length
///   of 2 or 3 symbols).
/// * `remove_linebreaks` - Strip `\r` and `\n` before interpreting groups;
///   when `false`, such characters are invalid symbols.
///
/// # Errors
///
/// [`Base64Error::InvalidLength`] when the post-preprocessing length has a
/// remainder of 1, or when explicit padding does not complete the last
/// quartet; [`Base64Error::InvalidSymbol`] for bytes outside both alphabets,
/// including `=` in a non-final position.
///
/// # Example
///
/// ```
/// use turbo_base64::decode;
///
/// assert_eq!(decode("TWFu", false).unwrap(), b"Man");
/// assert_eq!(decode("TWE=", false).unwrap(), b"Ma");
/// assert_eq!(decode("TWE", false).unwrap(), b"Ma");
/// ```
pub fn decode(text: &str, remove_linebreaks: bool) -> Result<Vec<u8>, Base64Error> {
    if remove_linebreaks {
        let stripped: Vec<u8> = text
            .bytes()
            .filter(|&b| b != b'\n' && b != b'\r')
            .collect();
        decode_slice(&stripped)
    } else {
        decode_slice(text.as_bytes())
    }
}

fn decode_slice(input: &[u8]) -> Result<Vec<u8>, Base64Error> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    let lay = layout(input)?;
    let mut buf = vec![0u8; lay.out_len];
    decode_layout(input, &lay, &mut buf)?;
    Ok(buf)
}

/// Decodes a base64 string into a caller-provided destination buffer.
///
/// Same validation rules as [`decode`]; returns the number of bytes written.
///
/// # Errors
///
/// Everything [`decode`] reports, plus [`Base64Error::BufferTooSmall`] when
/// `dest` cannot hold the decoded output.
pub fn decode_into(
    text: &str,
    remove_linebreaks: bool,
    dest: &mut [u8],
) -> Result<usize, Base64Error> {
    if remove_linebreaks {
        let stripped: Vec<u8> = text
            .bytes()
            .filter(|&b| b != b'\n' && b != b'\r')
            .collect();
        decode_slice_into(&stripped, dest)
    } else {
        decode_slice_into(text.as_bytes(), dest)
    }
}

fn decode_slice_into(input: &[u8], dest: &mut [u8]) -> Result<usize, Base64Error> {
    if input.is_empty() {
        return Ok(0);
    }
    let lay = layout(input)?;
    if dest.len() < lay.out_len {
        return Err(Base64Error::BufferTooSmall);
    }
    decode_layout(input, &lay, dest)?;
    Ok(lay.out_len)
}
