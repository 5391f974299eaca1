//! One `Codec` implementation per entry in `Encoding`. `sloppy` covers every
//! single-byte table (straight out of `build.rs`'s generated statics);
//! `variants` covers UTF-8 and its CESU-8-tolerant sibling, which don't fit
//! the fixed-width single-byte shape.

pub(crate) mod sloppy;
pub(crate) mod variants;

use crate::error::Result;
use crate::plan::Encoding;

/// Turns Unicode text into bytes under an assumed encoding, and back.
///
/// Both directions are exercised only inside the repair search (`search.rs`)
/// — never exposed as a public byte-level API, matching this crate's
/// contract of accepting and returning `&str`/`String` only.
pub(crate) trait Codec {
    fn encode(&self, s: &str) -> Result<Vec<u8>>;
    fn decode(&self, bytes: &[u8]) -> Result<String>;
}

pub(crate) fn codec_for(encoding: Encoding) -> &'static dyn Codec {
    match encoding {
        Encoding::Utf8 => &variants::Utf8,
        Encoding::Utf8Variants => &variants::Utf8Variants,
        Encoding::Latin1 => &sloppy::LATIN1,
        Encoding::Cp437 => &sloppy::CP437,
        Encoding::MacRoman => &sloppy::MACROMAN,
        Encoding::SloppyWindows1250 => &sloppy::SLOPPY_WINDOWS_1250,
        Encoding::SloppyWindows1251 => &sloppy::SLOPPY_WINDOWS_1251,
        Encoding::SloppyWindows1252 => &sloppy::SLOPPY_WINDOWS_1252,
        Encoding::SloppyWindows1253 => &sloppy::SLOPPY_WINDOWS_1253,
        Encoding::SloppyWindows1254 => &sloppy::SLOPPY_WINDOWS_1254,
        Encoding::SloppyWindows1257 => &sloppy::SLOPPY_WINDOWS_1257,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_encoding_resolves_to_a_codec() {
        for &e in Encoding::search_priority() {
            let _ = codec_for(e);
        }
        let _ = codec_for(Encoding::Utf8);
        let _ = codec_for(Encoding::Utf8Variants);
    }
}
