//! The two codecs that don't fit the single-byte table shape: plain UTF-8,
//! and `utf-8-variants`, which decodes CESU-8 and Java's "modified UTF-8"
//! in addition to standard UTF-8.
//!
//! Decode byte-walking for the variants codec follows `residua-cesu8`'s
//! state machine: astral codepoints encoded as a surrogate pair, each half
//! emitted as its own 3-byte UTF-8-shaped sequence, are recombined into one
//! scalar value instead of being rejected as invalid.

use super::Codec;
use crate::error::{CodecError, Result};

pub(crate) struct Utf8;

impl Codec for Utf8 {
    fn encode(&self, s: &str) -> Result<Vec<u8>> {
        Ok(s.as_bytes().to_vec())
    }

    fn decode(&self, bytes: &[u8]) -> Result<String> {
        String::from_utf8(bytes.to_vec())
            .map_err(|e| CodecError::invalid_sequence("utf-8", e.as_bytes()[e.utf8_error().valid_up_to()]))
    }
}

pub(crate) struct Utf8Variants;

impl Codec for Utf8Variants {
    fn encode(&self, s: &str) -> Result<Vec<u8>> {
        // Producing CESU-8 on purpose is never useful to the repair search;
        // the variant only matters when decoding leniently.
        Ok(s.as_bytes().to_vec())
    }

    fn decode(&self, bytes: &[u8]) -> Result<String> {
        let mut out = String::with_capacity(bytes.len());
        let mut i = 0;
        while i < bytes.len() {
            let b0 = bytes[i];
            if b0 < 0x80 {
                out.push(b0 as char);
                i += 1;
            } else if b0 & 0xE0 == 0xC0 {
                let (cp, used) = decode_two_byte(bytes, i)?;
                out.push(cp);
                i += used;
            } else if b0 & 0xF0 == 0xE0 {
                let (high, used) = decode_three_byte(bytes, i)?;
                if is_high_surrogate(high) && i + used + 2 < bytes.len() {
                    if let Ok((low, used2)) = decode_three_byte(bytes, i + used) {
                        if is_low_surrogate(low) {
                            let cp = combine_surrogate_pair(high, low);
                            out.push(cp);
                            i += used + used2;
                            continue;
                        }
                    }
                }
                match char::from_u32(high) {
                    Some(c) if !is_high_surrogate(high) && !is_low_surrogate(high) => {
                        out.push(c);
                        i += used;
                    }
                    _ => return Err(CodecError::invalid_sequence("utf-8-variants", b0)),
                }
            } else if b0 & 0xF8 == 0xF0 {
                let (cp, used) = decode_four_byte(bytes, i)?;
                out.push(cp);
                i += used;
            } else {
                return Err(CodecError::invalid_sequence("utf-8-variants", b0));
            }
        }
        Ok(out)
    }
}

fn continuation(bytes: &[u8], i: usize) -> Result<u8> {
    match bytes.get(i) {
        Some(&b) if b & 0xC0 == 0x80 => Ok(b & 0x3F),
        _ => Err(CodecError::invalid_sequence("utf-8-variants", bytes.get(i).copied().unwrap_or(0))),
    }
}

fn decode_two_byte(bytes: &[u8], i: usize) -> Result<(char, usize)> {
    let b0 = bytes[i] as u32 & 0x1F;
    let b1 = continuation(bytes, i + 1)? as u32;
    let cp = (b0 << 6) | b1;
    char::from_u32(cp)
        .map(|c| (c, 2))
        .ok_or_else(|| CodecError::invalid_sequence("utf-8-variants", bytes[i]))
}

fn decode_three_byte(bytes: &[u8], i: usize) -> Result<(u32, usize)> {
    let b0 = bytes[i] as u32 & 0x0F;
    let b1 = continuation(bytes, i + 1)? as u32;
    let b2 = continuation(bytes, i + 2)? as u32;
    Ok(((b0 << 12) | (b1 << 6) | b2, 3))
}

fn decode_four_byte(bytes: &[u8], i: usize) -> Result<(char, usize)> {
    let b0 = bytes[i] as u32 & 0x07;
    let b1 = continuation(bytes, i + 1)? as u32;
    let b2 = continuation(bytes, i + 2)? as u32;
    let b3 = continuation(bytes, i + 3)? as u32;
    let cp = (b0 << 18) | (b1 << 12) | (b2 << 6) | b3;
    char::from_u32(cp)
        .map(|c| (c, 4))
        .ok_or_else(|| CodecError::invalid_sequence("utf-8-variants", bytes[i]))
}

fn is_high_surrogate(cp: u32) -> bool {
    (0xD800..=0xDBFF).contains(&cp)
}

fn is_low_surrogate(cp: u32) -> bool {
    (0xDC00..=0xDFFF).contains(&cp)
}

fn combine_surrogate_pair(high: u32, low: u32) -> char {
    let cp = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
    char::from_u32(cp).unwrap_or('\u{FFFD}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_ascii_round_trips() {
        assert_eq!(Utf8Variants.decode(b"hello").unwrap(), "hello");
    }

    #[test]
    fn standard_utf8_decodes_normally() {
        assert_eq!(Utf8Variants.decode("日本語".as_bytes()).unwrap(), "日本語");
    }

    #[test]
    fn cesu8_surrogate_pair_recombines_into_one_astral_codepoint() {
        // U+1F600 encoded as a CESU-8 surrogate pair: 0xD83D 0xDE00, each
        // emitted as its own 3-byte UTF-8-shaped sequence.
        let cesu8 = [0xED, 0xA0, 0xBD, 0xED, 0xB8, 0x80];
        let decoded = Utf8Variants.decode(&cesu8).unwrap();
        assert_eq!(decoded, "\u{1F600}");
    }
}
