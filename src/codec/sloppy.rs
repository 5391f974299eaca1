//! Single-byte codecs: every table here is a 128-entry upper half (bytes
//! 0x80..=0xFF) generated by `build.rs`, paired with the trivial identity
//! mapping for bytes below 0x80 that every one of these encodings shares
//! with ASCII.
//!
//! The "sloppy" Windows-125x tables have already had their undefined byte
//! slots patched to the Latin-1 codepoint of the same value at codegen time
//! (`build.rs::patch_sloppy`) — by the time this module sees them, they are
//! complete 128-entry tables like `CP437` and `MACROMAN`, so decode here
//! never actually hits the `None` arm for those three encodings' siblings.
//! `Option` is kept in the table type anyway so one `SingleByteCodec`
//! implementation serves both complete and (hypothetically) incomplete
//! tables without duplicating the lookup logic.

include!(concat!(env!("OUT_DIR"), "/codec_tables.rs"));

use super::Codec;
use crate::error::{CodecError, Result};

pub(crate) struct SingleByteCodec {
    name: &'static str,
    decode_table: &'static [Option<char>; 128],
    encode_table: &'static phf::Map<char, u8>,
}

impl Codec for SingleByteCodec {
    fn encode(&self, s: &str) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(s.len());
        for c in s.chars() {
            if (c as u32) < 0x80 {
                out.push(c as u8);
            } else if let Some(&byte) = self.encode_table.get(&c) {
                out.push(byte);
            } else {
                return Err(CodecError::unrepresentable(self.name, c));
            }
        }
        Ok(out)
    }

    fn decode(&self, bytes: &[u8]) -> Result<String> {
        let mut out = String::with_capacity(bytes.len());
        for &byte in bytes {
            if byte < 0x80 {
                out.push(byte as char);
            } else {
                match self.decode_table[(byte - 0x80) as usize] {
                    Some(c) => out.push(c),
                    None => return Err(CodecError::invalid_sequence(self.name, byte)),
                }
            }
        }
        Ok(out)
    }
}

pub(crate) static LATIN1: SingleByteCodec = SingleByteCodec {
    name: "latin-1",
    decode_table: &DECODE_TABLE_LATIN1,
    encode_table: &ENCODE_TABLE_LATIN1,
};
pub(crate) static CP437: SingleByteCodec = SingleByteCodec {
    name: "cp437",
    decode_table: &DECODE_TABLE_CP437,
    encode_table: &ENCODE_TABLE_CP437,
};
pub(crate) static MACROMAN: SingleByteCodec = SingleByteCodec {
    name: "macroman",
    decode_table: &DECODE_TABLE_MACROMAN,
    encode_table: &ENCODE_TABLE_MACROMAN,
};
pub(crate) static SLOPPY_WINDOWS_1250: SingleByteCodec = SingleByteCodec {
    name: "sloppy-windows-1250",
    decode_table: &DECODE_TABLE_SLOPPY_WINDOWS_1250,
    encode_table: &ENCODE_TABLE_SLOPPY_WINDOWS_1250,
};
pub(crate) static SLOPPY_WINDOWS_1251: SingleByteCodec = SingleByteCodec {
    name: "sloppy-windows-1251",
    decode_table: &DECODE_TABLE_SLOPPY_WINDOWS_1251,
    encode_table: &ENCODE_TABLE_SLOPPY_WINDOWS_1251,
};
pub(crate) static SLOPPY_WINDOWS_1252: SingleByteCodec = SingleByteCodec {
    name: "sloppy-windows-1252",
    decode_table: &DECODE_TABLE_SLOPPY_WINDOWS_1252,
    encode_table: &ENCODE_TABLE_SLOPPY_WINDOWS_1252,
};
pub(crate) static SLOPPY_WINDOWS_1253: SingleByteCodec = SingleByteCodec {
    name: "sloppy-windows-1253",
    decode_table: &DECODE_TABLE_SLOPPY_WINDOWS_1253,
    encode_table: &ENCODE_TABLE_SLOPPY_WINDOWS_1253,
};
pub(crate) static SLOPPY_WINDOWS_1254: SingleByteCodec = SingleByteCodec {
    name: "sloppy-windows-1254",
    decode_table: &DECODE_TABLE_SLOPPY_WINDOWS_1254,
    encode_table: &ENCODE_TABLE_SLOPPY_WINDOWS_1254,
};
pub(crate) static SLOPPY_WINDOWS_1257: SingleByteCodec = SingleByteCodec {
    name: "sloppy-windows-1257",
    decode_table: &DECODE_TABLE_SLOPPY_WINDOWS_1257,
    encode_table: &ENCODE_TABLE_SLOPPY_WINDOWS_1257,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cp437_decodes_box_drawing_and_math() {
        let decoded = CP437.decode(&[0xFB, 0xAC, 0x3D, 0xAB]).unwrap();
        assert_eq!(decoded, "√¼=½");
    }

    #[test]
    fn sloppy_windows_1252_round_trips_curly_quotes() {
        let decoded = SLOPPY_WINDOWS_1252.decode(&[0x93, b'h', b'i', 0x94]).unwrap();
        assert_eq!(decoded, "\u{201C}hi\u{201D}");
        let encoded = SLOPPY_WINDOWS_1252.encode(&decoded).unwrap();
        assert_eq!(encoded, vec![0x93, b'h', b'i', 0x94]);
    }

    #[test]
    fn sloppy_windows_1252_tolerates_undefined_bytes() {
        // 0x81 is undefined in strict windows-1252; the sloppy variant
        // round-trips it as U+0081 instead of failing.
        let decoded = SLOPPY_WINDOWS_1252.decode(&[0x81]).unwrap();
        assert_eq!(decoded, "\u{0081}");
        let encoded = SLOPPY_WINDOWS_1252.encode(&decoded).unwrap();
        assert_eq!(encoded, vec![0x81]);
    }

    #[test]
    fn latin1_is_the_identity_mapping_above_0x80() {
        assert_eq!(LATIN1.decode(&[0xE9]).unwrap(), "\u{00E9}");
        assert_eq!(LATIN1.encode("\u{00E9}").unwrap(), vec![0xE9]);
    }

    #[test]
    fn ascii_range_is_shared_identity_for_every_table() {
        assert_eq!(SLOPPY_WINDOWS_1252.decode(b"abc").unwrap(), "abc");
        assert_eq!(MACROMAN.decode(b"xyz").unwrap(), "xyz");
    }
}
