//! Decoder for the base64 variant Beaver uses to embed parsing tables.
//!
//! Alphabet, in value order: `0-9`, `A-Z`, `a-z`, `#`, `$`. The character `=`
//! is padding and decodes to zero like any other symbol; it does not stop
//! decoding.

use super::error::TableError;

/// Map one input character to its 6-bit value.
fn symbol_value(ch: char) -> Option<u8> {
    let value = match ch {
        '0'..='9' => ch as u8 - b'0',
        'A'..='Z' => 10 + (ch as u8 - b'A'),
        'a'..='z' => 36 + (ch as u8 - b'a'),
        '#' => 62,
        '$' => 63,
        '=' => 0,
        _ => return None,
    };
    Some(value)
}

/// Number of output bytes for `len` input characters: `ceil(3 * len / 4)`.
pub fn decoded_len(len: usize) -> usize {
    (3 * len).div_ceil(4)
}

/// Decode `input` into bytes, four symbols to three bytes.
///
/// A trailing group shorter than four symbols still yields its partially
/// filled final byte, zero-filled in the missing low bits.
pub fn decode_base64(input: &str) -> Result<Vec<u8>, TableError> {
    let len = input.chars().count();
    let mut out = vec![0u8; decoded_len(len)];
    let mut pos = 0;
    // Number of 6-bit symbols already folded into the current 3-byte group.
    let mut step = 0u8;

    for (position, ch) in input.chars().enumerate() {
        let value = symbol_value(ch).ok_or(TableError::InvalidEncoding { ch, position })?;
        match step {
            0 => {
                out[pos] = value << 2;
                step = 1;
            }
            1 => {
                out[pos] |= value >> 4;
                pos += 1;
                out[pos] = value << 4;
                step = 2;
            }
            2 => {
                out[pos] |= value >> 2;
                pos += 1;
                out[pos] = value << 6;
                step = 3;
            }
            _ => {
                out[pos] |= value;
                pos += 1;
                step = 0;
            }
        }
    }

    Ok(out)
}
