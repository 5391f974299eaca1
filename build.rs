use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// One single-byte codepage's upper half (bytes 0x80..=0xFF), as a 128-entry
/// table. `None` marks a byte the codepage's strict form leaves undefined;
/// the sloppy variants patch those slots to the Latin-1 codepoint of the
/// same byte value before this table is built (see `patch_sloppy`).
type UpperHalf = [Option<char>; 128];

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    write_codec_tables(&out_dir)?;
    write_mojibake_set(&out_dir)?;

    Ok(())
}

/// Generates `$OUT_DIR/codec_tables.rs`: one decode array plus one
/// `phf_codegen`-built encode map per encoding identifier in the closed set
/// (spec §3). Mirrors the teacher's `write_decoding`/`write_encoding` pair,
/// generalized from "one table per OEM codepage read out of a JSON asset" to
/// "one table per encoding identifier, with the data as Rust literals right
/// here" since this crate ships no `assets/` file.
fn write_codec_tables(out_dir: &PathBuf) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(out_dir.join("codec_tables.rs"))?);

    writeln!(out, "// Generated by build.rs. Do not edit by hand.")?;
    writeln!(out)?;

    write_sbcs(&mut out, "LATIN1", &latin1_table())?;
    write_sbcs(&mut out, "CP437", &cp437_table())?;
    write_sbcs(&mut out, "MACROMAN", &macroman_table())?;
    write_sbcs(&mut out, "SLOPPY_WINDOWS_1250", &patch_sloppy(cp1250_table()))?;
    write_sbcs(&mut out, "SLOPPY_WINDOWS_1251", &patch_sloppy(cp1251_table()))?;
    write_sbcs(&mut out, "SLOPPY_WINDOWS_1252", &patch_sloppy(cp1252_table()))?;
    write_sbcs(&mut out, "SLOPPY_WINDOWS_1253", &patch_sloppy(cp1253_table()))?;
    write_sbcs(&mut out, "SLOPPY_WINDOWS_1254", &patch_sloppy(cp1254_table()))?;
    write_sbcs(&mut out, "SLOPPY_WINDOWS_1257", &patch_sloppy(cp1257_table()))?;

    Ok(())
}

/// Generates `$OUT_DIR/mojibake_set.rs`: a `phf::Set<u32>` of the codepoints
/// that any mojibake byte sequence can produce once misread as Latin-1 (the
/// C1-controls-and-Latin-1-supplement range, U+0080..=U+00FF) plus the
/// Windows-1252 high-half characters (§4.1) a partially or fully repaired
/// mojibake run leaves behind — the curly quotes, en/em dashes, ellipsis,
/// euro and trademark signs that `fix_c1_controls` and
/// `decode_inconsistent_utf8` decode C1 bytes into. `badness` (§4.2)
/// short-circuits to 0 when a string contains none of these.
fn write_mojibake_set(out_dir: &PathBuf) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(out_dir.join("mojibake_set.rs"))?);
    let mut set = phf_codegen::Set::new();
    for cp in 0x80u32..=0xFF {
        set.entry(cp);
    }
    for cp in windows_1252_high_half() {
        set.entry(cp);
    }
    writeln!(out, "// Generated by build.rs. Do not edit by hand.")?;
    writeln!(
        out,
        "pub static MOJIBAKE_CODEPOINTS: phf::Set<u32> = {};",
        set.build()
    )?;
    Ok(())
}

/// The codepoints Windows-1252 maps its defined 0x80..=0x9F bytes to: the
/// punctuation `fix_c1_controls` and `decode_inconsistent_utf8` produce when
/// they re-decode a C1 control as its intended Windows-1252 character
/// (€, ‚, ƒ, „, …, †, ‡, ˆ, ‰, Š, ‹, Œ, Ž, smart quotes, •, –, —, ˜, ™, š, ›,
/// œ, ž, Ÿ). These fall outside U+0080..=U+00FF, so without them a string
/// that is nothing but a repaired (or partially repaired) mojibake run of
/// this shape can read as having no possible-mojibake codepoint at all.
fn windows_1252_high_half() -> Vec<u32> {
    vec![
        0x20AC, 0x201A, 0x0192, 0x201E, 0x2026, 0x2020, 0x2021, 0x02C6, 0x2030, 0x0160, 0x2039,
        0x0152, 0x017D, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014, 0x02DC, 0x2122,
        0x0161, 0x203A, 0x0153, 0x017E, 0x0178,
    ]
}

/// Replaces every undefined slot with the Latin-1 codepoint of that byte
/// value, turning a strict codepage table into its "sloppy" variant
/// (§4.3: real-world corpora contain these bytes; refusing to decode them
/// kills the repair search on a single byte).
fn patch_sloppy(mut table: UpperHalf) -> UpperHalf {
    for (i, slot) in table.iter_mut().enumerate() {
        if slot.is_none() {
            *slot = char::from_u32(0x80 + i as u32);
        }
    }
    table
}

/// Emits `DECODE_TABLE_{name}: [Option<char>; 128]` and a matching
/// `ENCODE_TABLE_{name}: phf::Map<char, u8>` built from every defined slot.
fn write_sbcs(mut dst: impl Write, name: &str, table: &UpperHalf) -> std::io::Result<()> {
    write!(dst, "pub static DECODE_TABLE_{name}: [Option<char>; 128] = [")?;
    for (i, c) in table.iter().enumerate() {
        if i > 0 {
            write!(dst, ", ")?;
        }
        match c {
            Some(c) => write!(dst, "Some('\\u{{{:x}}}')", *c as u32)?,
            None => write!(dst, "None")?,
        }
    }
    writeln!(dst, "];")?;

    let mut map = phf_codegen::Map::new();
    let entries: Vec<(char, u8)> = table
        .iter()
        .enumerate()
        .filter_map(|(i, c)| c.map(|c| (c, 0x80u8 + i as u8)))
        .collect();
    for (c, byte) in &entries {
        map.entry(*c, &byte.to_string());
    }
    writeln!(
        dst,
        "pub static ENCODE_TABLE_{name}: phf::Map<char, u8> = {};",
        map.build()
    )?;
    Ok(())
}

fn latin1_table() -> UpperHalf {
    let mut t = [None; 128];
    for (i, slot) in t.iter_mut().enumerate() {
        *slot = char::from_u32(0x80 + i as u32);
    }
    t
}

fn from_pairs(pairs: &[(u8, char)]) -> UpperHalf {
    let mut t = [None; 128];
    for &(byte, c) in pairs {
        t[(byte - 0x80) as usize] = Some(c);
    }
    t
}

fn cp437_table() -> UpperHalf {
    from_pairs(&[
        (0x80, 'Ç'), (0x81, 'ü'), (0x82, 'é'), (0x83, 'â'), (0x84, 'ä'), (0x85, 'à'),
        (0x86, 'å'), (0x87, 'ç'), (0x88, 'ê'), (0x89, 'ë'), (0x8A, 'è'), (0x8B, 'ï'),
        (0x8C, 'î'), (0x8D, 'ì'), (0x8E, 'Ä'), (0x8F, 'Å'), (0x90, 'É'), (0x91, 'æ'),
        (0x92, 'Æ'), (0x93, 'ô'), (0x94, 'ö'), (0x95, 'ò'), (0x96, 'û'), (0x97, 'ù'),
        (0x98, 'ÿ'), (0x99, 'Ö'), (0x9A, 'Ü'), (0x9B, '¢'), (0x9C, '£'), (0x9D, '¥'),
        (0x9E, '₧'), (0x9F, 'ƒ'), (0xA0, 'á'), (0xA1, 'í'), (0xA2, 'ó'), (0xA3, 'ú'),
        (0xA4, 'ñ'), (0xA5, 'Ñ'), (0xA6, 'ª'), (0xA7, 'º'), (0xA8, '¿'), (0xA9, '⌐'),
        (0xAA, '¬'), (0xAB, '½'), (0xAC, '¼'), (0xAD, '¡'), (0xAE, '«'), (0xAF, '»'),
        (0xB0, '░'), (0xB1, '▒'), (0xB2, '▓'), (0xB3, '│'), (0xB4, '┤'), (0xB5, '╡'),
        (0xB6, '╢'), (0xB7, '╖'), (0xB8, '╕'), (0xB9, '╣'), (0xBA, '║'), (0xBB, '╗'),
        (0xBC, '╝'), (0xBD, '╜'), (0xBE, '╛'), (0xBF, '┐'), (0xC0, '└'), (0xC1, '┴'),
        (0xC2, '┬'), (0xC3, '├'), (0xC4, '─'), (0xC5, '┼'), (0xC6, '╞'), (0xC7, '╟'),
        (0xC8, '╚'), (0xC9, '╔'), (0xCA, '╩'), (0xCB, '╦'), (0xCC, '╠'), (0xCD, '═'),
        (0xCE, '╬'), (0xCF, '╧'), (0xD0, '╨'), (0xD1, '╤'), (0xD2, '╥'), (0xD3, '╙'),
        (0xD4, '╘'), (0xD5, '╒'), (0xD6, '╓'), (0xD7, '╫'), (0xD8, '╪'), (0xD9, '┘'),
        (0xDA, '┌'), (0xDB, '█'), (0xDC, '▄'), (0xDD, '▌'), (0xDE, '▐'), (0xDF, '▀'),
        (0xE0, 'α'), (0xE1, 'ß'), (0xE2, 'Γ'), (0xE3, 'π'), (0xE4, 'Σ'), (0xE5, 'σ'),
        (0xE6, 'µ'), (0xE7, 'τ'), (0xE8, 'Φ'), (0xE9, 'Θ'), (0xEA, 'Ω'), (0xEB, 'δ'),
        (0xEC, '∞'), (0xED, 'φ'), (0xEE, 'ε'), (0xEF, '∩'), (0xF0, '≡'), (0xF1, '±'),
        (0xF2, '≥'), (0xF3, '≤'), (0xF4, '⌠'), (0xF5, '⌡'), (0xF6, '÷'), (0xF7, '≈'),
        (0xF8, '°'), (0xF9, '∙'), (0xFA, '·'), (0xFB, '√'), (0xFC, 'ⁿ'), (0xFD, '²'),
        (0xFE, '■'), (0xFF, '\u{00A0}'),
    ])
}

fn macroman_table() -> UpperHalf {
    from_pairs(&[
        (0x80, 'Ä'), (0x81, 'Å'), (0x82, 'Ç'), (0x83, 'É'), (0x84, 'Ñ'), (0x85, 'Ö'),
        (0x86, 'Ü'), (0x87, 'á'), (0x88, 'à'), (0x89, 'â'), (0x8A, 'ä'), (0x8B, 'ã'),
        (0x8C, 'å'), (0x8D, 'ç'), (0x8E, 'é'), (0x8F, 'è'), (0x90, 'ê'), (0x91, 'ë'),
        (0x92, 'í'), (0x93, 'ì'), (0x94, 'î'), (0x95, 'ï'), (0x96, 'ñ'), (0x97, 'ó'),
        (0x98, 'ò'), (0x99, 'ô'), (0x9A, 'ö'), (0x9B, 'õ'), (0x9C, 'ú'), (0x9D, 'ù'),
        (0x9E, 'û'), (0x9F, 'ü'), (0xA0, '†'), (0xA1, '°'), (0xA2, '¢'), (0xA3, '£'),
        (0xA4, '§'), (0xA5, '•'), (0xA6, '¶'), (0xA7, 'ß'), (0xA8, '®'), (0xA9, '©'),
        (0xAA, '™'), (0xAB, '´'), (0xAC, '¨'), (0xAD, '≠'), (0xAE, 'Æ'), (0xAF, 'Ø'),
        (0xB0, '∞'), (0xB1, '±'), (0xB2, '≤'), (0xB3, '≥'), (0xB4, '¥'), (0xB5, 'µ'),
        (0xB6, '∂'), (0xB7, '∑'), (0xB8, '∏'), (0xB9, 'π'), (0xBA, '∫'), (0xBB, 'ª'),
        (0xBC, 'º'), (0xBD, 'Ω'), (0xBE, 'æ'), (0xBF, 'ø'), (0xC0, '¿'), (0xC1, '¡'),
        (0xC2, '¬'), (0xC3, '√'), (0xC4, 'ƒ'), (0xC5, '≈'), (0xC6, '∆'), (0xC7, '«'),
        (0xC8, '»'), (0xC9, '…'), (0xCA, '\u{00A0}'), (0xCB, 'À'), (0xCC, 'Ã'), (0xCD, 'Õ'),
        (0xCE, 'Œ'), (0xCF, 'œ'), (0xD0, '–'), (0xD1, '—'), (0xD2, '“'), (0xD3, '”'),
        (0xD4, '‘'), (0xD5, '’'), (0xD6, '÷'), (0xD7, '◊'), (0xD8, 'ÿ'), (0xD9, 'Ÿ'),
        (0xDA, '⁄'), (0xDB, '€'), (0xDC, '‹'), (0xDD, '›'), (0xDE, '\u{FB01}'), (0xDF, '\u{FB02}'),
        (0xE0, '‡'), (0xE1, '·'), (0xE2, '‚'), (0xE3, '„'), (0xE4, '‰'), (0xE5, 'Â'),
        (0xE6, 'Ê'), (0xE7, 'Á'), (0xE8, 'Ë'), (0xE9, 'È'), (0xEA, 'Í'), (0xEB, 'Î'),
        (0xEC, 'Ï'), (0xED, 'Ì'), (0xEE, 'Ó'), (0xEF, 'Ô'), (0xF0, '\u{F8FF}'), (0xF1, 'Ò'),
        (0xF2, 'Ú'), (0xF3, 'Û'), (0xF4, 'Ù'), (0xF5, 'ı'), (0xF6, 'ˆ'), (0xF7, '˜'),
        (0xF8, '¯'), (0xF9, '˘'), (0xFA, '˙'), (0xFB, '˚'), (0xFC, '¸'), (0xFD, '˝'),
        (0xFE, '˛'), (0xFF, 'ˇ'),
    ])
}

fn cp1250_table() -> UpperHalf {
    from_pairs(&[
        (0x80, '€'), (0x82, '‚'), (0x84, '„'), (0x85, '…'), (0x86, '†'), (0x87, '‡'),
        (0x89, '‰'), (0x8A, 'Š'), (0x8B, '‹'), (0x8C, 'Ś'), (0x8D, 'Ť'), (0x8E, 'Ž'),
        (0x8F, 'Ź'), (0x91, '\u{2018}'), (0x92, '\u{2019}'), (0x93, '\u{201C}'), (0x94, '\u{201D}'),
        (0x95, '•'), (0x96, '–'), (0x97, '—'), (0x99, '™'), (0x9A, 'š'), (0x9B, '›'),
        (0x9C, 'ś'), (0x9D, 'ť'), (0x9E, 'ž'), (0x9F, 'ź'), (0xA0, '\u{00A0}'), (0xA1, 'ˇ'),
        (0xA2, '˘'), (0xA3, 'Ł'), (0xA4, '¤'), (0xA5, 'Ą'), (0xA6, '¦'), (0xA7, '§'),
        (0xA8, '¨'), (0xA9, '©'), (0xAA, 'Ş'), (0xAB, '«'), (0xAC, '¬'), (0xAD, '\u{00AD}'),
        (0xAE, '®'), (0xAF, 'Ż'), (0xB0, '°'), (0xB1, '±'), (0xB2, '˛'), (0xB3, 'ł'),
        (0xB4, '´'), (0xB5, 'µ'), (0xB6, '¶'), (0xB7, '·'), (0xB8, '¸'), (0xB9, 'ą'),
        (0xBA, 'ş'), (0xBB, '»'), (0xBC, 'Ľ'), (0xBD, '˝'), (0xBE, 'ľ'), (0xBF, 'ż'),
        (0xC0, 'Ŕ'), (0xC1, 'Á'), (0xC2, 'Â'), (0xC3, 'Ă'), (0xC4, 'Ä'), (0xC5, 'Ĺ'),
        (0xC6, 'Ć'), (0xC7, 'Ç'), (0xC8, 'Č'), (0xC9, 'É'), (0xCA, 'Ę'), (0xCB, 'Ë'),
        (0xCC, 'Ě'), (0xCD, 'Í'), (0xCE, 'Î'), (0xCF, 'Ď'), (0xD0, 'Đ'), (0xD1, 'Ń'),
        (0xD2, 'Ň'), (0xD3, 'Ó'), (0xD4, 'Ô'), (0xD5, 'Ő'), (0xD6, 'Ö'), (0xD7, '×'),
        (0xD8, 'Ř'), (0xD9, 'Ů'), (0xDA, 'Ú'), (0xDB, 'Ű'), (0xDC, 'Ü'), (0xDD, 'Ý'),
        (0xDE, 'Ţ'), (0xDF, 'ß'), (0xE0, 'ŕ'), (0xE1, 'á'), (0xE2, 'â'), (0xE3, 'ă'),
        (0xE4, 'ä'), (0xE5, 'ĺ'), (0xE6, 'ć'), (0xE7, 'ç'), (0xE8, 'č'), (0xE9, 'é'),
        (0xEA, 'ę'), (0xEB, 'ë'), (0xEC, 'ě'), (0xED, 'í'), (0xEE, 'î'), (0xEF, 'ď'),
        (0xF0, 'đ'), (0xF1, 'ń'), (0xF2, 'ň'), (0xF3, 'ó'), (0xF4, 'ô'), (0xF5, 'ő'),
        (0xF6, 'ö'), (0xF7, '÷'), (0xF8, 'ř'), (0xF9, 'ů'), (0xFA, 'ú'), (0xFB, 'ű'),
        (0xFC, 'ü'), (0xFD, 'ý'), (0xFE, 'ţ'), (0xFF, '˙'),
    ])
}

fn cp1251_table() -> UpperHalf {
    from_pairs(&[
        (0x80, 'Ђ'), (0x81, 'Ѓ'), (0x82, '‚'), (0x83, 'ѓ'), (0x84, '„'), (0x85, '…'),
        (0x86, '†'), (0x87, '‡'), (0x88, '€'), (0x89, '‰'), (0x8A, 'Љ'), (0x8B, '‹'),
        (0x8C, 'Њ'), (0x8D, 'Ќ'), (0x8E, 'Ћ'), (0x8F, 'Џ'), (0x90, 'ђ'), (0x91, '\u{2018}'),
        (0x92, '\u{2019}'), (0x93, '\u{201C}'), (0x94, '\u{201D}'), (0x95, '•'), (0x96, '–'),
        (0x97, '—'), (0x99, '™'), (0x9A, 'љ'), (0x9B, '›'), (0x9C, 'њ'), (0x9D, 'ќ'),
        (0x9E, 'ћ'), (0x9F, 'џ'), (0xA0, '\u{00A0}'), (0xA1, 'Ў'), (0xA2, 'ў'), (0xA3, 'Ј'),
        (0xA4, '¤'), (0xA5, 'Ґ'), (0xA6, '¦'), (0xA7, '§'), (0xA8, 'Ё'), (0xA9, '©'),
        (0xAA, 'Є'), (0xAB, '«'), (0xAC, '¬'), (0xAD, '\u{00AD}'), (0xAE, '®'), (0xAF, 'Ї'),
        (0xB0, '°'), (0xB1, '±'), (0xB2, 'І'), (0xB3, 'і'), (0xB4, 'ґ'), (0xB5, 'µ'),
        (0xB6, '¶'), (0xB7, '·'), (0xB8, 'ё'), (0xB9, '№'), (0xBA, 'є'), (0xBB, '»'),
        (0xBC, 'ј'), (0xBD, 'Ѕ'), (0xBE, 'ѕ'), (0xBF, 'ї'), (0xC0, 'А'), (0xC1, 'Б'),
        (0xC2, 'В'), (0xC3, 'Г'), (0xC4, 'Д'), (0xC5, 'Е'), (0xC6, 'Ж'), (0xC7, 'З'),
        (0xC8, 'И'), (0xC9, 'Й'), (0xCA, 'К'), (0xCB, 'Л'), (0xCC, 'М'), (0xCD, 'Н'),
        (0xCE, 'О'), (0xCF, 'П'), (0xD0, 'Р'), (0xD1, 'С'), (0xD2, 'Т'), (0xD3, 'У'),
        (0xD4, 'Ф'), (0xD5, 'Х'), (0xD6, 'Ц'), (0xD7, 'Ч'), (0xD8, 'Ш'), (0xD9, 'Щ'),
        (0xDA, 'Ъ'), (0xDB, 'Ы'), (0xDC, 'Ь'), (0xDD, 'Э'), (0xDE, 'Ю'), (0xDF, 'Я'),
        (0xE0, 'а'), (0xE1, 'б'), (0xE2, 'в'), (0xE3, 'г'), (0xE4, 'д'), (0xE5, 'е'),
        (0xE6, 'ж'), (0xE7, 'з'), (0xE8, 'и'), (0xE9, 'й'), (0xEA, 'к'), (0xEB, 'л'),
        (0xEC, 'м'), (0xED, 'н'), (0xEE, 'о'), (0xEF, 'п'), (0xF0, 'р'), (0xF1, 'с'),
        (0xF2, 'т'), (0xF3, 'у'), (0xF4, 'ф'), (0xF5, 'х'), (0xF6, 'ц'), (0xF7, 'ч'),
        (0xF8, 'ш'), (0xF9, 'щ'), (0xFA, 'ъ'), (0xFB, 'ы'), (0xFC, 'ь'), (0xFD, 'э'),
        (0xFE, 'ю'), (0xFF, 'я'),
    ])
}

fn cp1252_table() -> UpperHalf {
    from_pairs(&[
        (0x80, '€'), (0x82, '‚'), (0x83, 'ƒ'), (0x84, '„'), (0x85, '…'), (0x86, '†'),
        (0x87, '‡'), (0x88, 'ˆ'), (0x89, '‰'), (0x8A, 'Š'), (0x8B, '‹'), (0x8C, 'Œ'),
        (0x8E, 'Ž'), (0x91, '\u{2018}'), (0x92, '\u{2019}'), (0x93, '\u{201C}'), (0x94, '\u{201D}'),
        (0x95, '•'), (0x96, '–'), (0x97, '—'), (0x98, '˜'), (0x99, '™'), (0x9A, 'š'),
        (0x9B, '›'), (0x9C, 'œ'), (0x9E, 'ž'), (0x9F, 'Ÿ'), (0xA0, '\u{00A0}'), (0xA1, '¡'),
        (0xA2, '¢'), (0xA3, '£'), (0xA4, '¤'), (0xA5, '¥'), (0xA6, '¦'), (0xA7, '§'),
        (0xA8, '¨'), (0xA9, '©'), (0xAA, 'ª'), (0xAB, '«'), (0xAC, '¬'), (0xAD, '\u{00AD}'),
        (0xAE, '®'), (0xAF, '¯'), (0xB0, '°'), (0xB1, '±'), (0xB2, '²'), (0xB3, '³'),
        (0xB4, '´'), (0xB5, 'µ'), (0xB6, '¶'), (0xB7, '·'), (0xB8, '¸'), (0xB9, '¹'),
        (0xBA, 'º'), (0xBB, '»'), (0xBC, '¼'), (0xBD, '½'), (0xBE, '¾'), (0xBF, '¿'),
        (0xC0, 'À'), (0xC1, 'Á'), (0xC2, 'Â'), (0xC3, 'Ã'), (0xC4, 'Ä'), (0xC5, 'Å'),
        (0xC6, 'Æ'), (0xC7, 'Ç'), (0xC8, 'È'), (0xC9, 'É'), (0xCA, 'Ê'), (0xCB, 'Ë'),
        (0xCC, 'Ì'), (0xCD, 'Í'), (0xCE, 'Î'), (0xCF, 'Ï'), (0xD0, 'Ð'), (0xD1, 'Ñ'),
        (0xD2, 'Ò'), (0xD3, 'Ó'), (0xD4, 'Ô'), (0xD5, 'Õ'), (0xD6, 'Ö'), (0xD7, '×'),
        (0xD8, 'Ø'), (0xD9, 'Ù'), (0xDA, 'Ú'), (0xDB, 'Û'), (0xDC, 'Ü'), (0xDD, 'Ý'),
        (0xDE, 'Þ'), (0xDF, 'ß'), (0xE0, 'à'), (0xE1, 'á'), (0xE2, 'â'), (0xE3, 'ã'),
        (0xE4, 'ä'), (0xE5, 'å'), (0xE6, 'æ'), (0xE7, 'ç'), (0xE8, 'è'), (0xE9, 'é'),
        (0xEA, 'ê'), (0xEB, 'ë'), (0xEC, 'ì'), (0xED, 'í'), (0xEE, 'î'), (0xEF, 'ï'),
        (0xF0, 'ð'), (0xF1, 'ñ'), (0xF2, 'ò'), (0xF3, 'ó'), (0xF4, 'ô'), (0xF5, 'õ'),
        (0xF6, 'ö'), (0xF7, '÷'), (0xF8, 'ø'), (0xF9, 'ù'), (0xFA, 'ú'), (0xFB, 'û'),
        (0xFC, 'ü'), (0xFD, 'ý'), (0xFE, 'þ'), (0xFF, 'ÿ'),
    ])
}

fn cp1253_table() -> UpperHalf {
    from_pairs(&[
        (0x80, '€'), (0x82, '‚'), (0x83, 'ƒ'), (0x84, '„'), (0x85, '…'), (0x86, '†'),
        (0x87, '‡'), (0x89, '‰'), (0x8B, '‹'), (0x91, '\u{2018}'), (0x92, '\u{2019}'),
        (0x93, '\u{201C}'), (0x94, '\u{201D}'), (0x95, '•'), (0x96, '–'), (0x97, '—'),
        (0x99, '™'), (0x9B, '›'), (0xA0, '\u{00A0}'), (0xA1, '΅'), (0xA2, 'Ά'), (0xA3, '£'),
        (0xA4, '¤'), (0xA5, '¥'), (0xA6, '¦'), (0xA7, '§'), (0xA8, '¨'), (0xA9, '©'),
        (0xAB, '«'), (0xAC, '¬'), (0xAD, '\u{00AD}'), (0xAE, '®'), (0xAF, '―'),
        (0xB0, '°'), (0xB1, '±'), (0xB2, '²'), (0xB3, '³'), (0xB4, '΄'), (0xB5, 'µ'),
        (0xB6, '¶'), (0xB7, '·'), (0xB8, 'Έ'), (0xB9, 'Ή'), (0xBA, 'Ί'), (0xBB, '»'),
        (0xBC, 'Ό'), (0xBD, '½'), (0xBE, 'Ύ'), (0xBF, 'Ώ'), (0xC0, 'ΐ'), (0xC1, 'Α'),
        (0xC2, 'Β'), (0xC3, 'Γ'), (0xC4, 'Δ'), (0xC5, 'Ε'), (0xC6, 'Ζ'), (0xC7, 'Η'),
        (0xC8, 'Θ'), (0xC9, 'Ι'), (0xCA, 'Κ'), (0xCB, 'Λ'), (0xCC, 'Μ'), (0xCD, 'Ν'),
        (0xCE, 'Ξ'), (0xCF, 'Ο'), (0xD0, 'Π'), (0xD1, 'Ρ'), (0xD3, 'Σ'), (0xD4, 'Τ'),
        (0xD5, 'Υ'), (0xD6, 'Φ'), (0xD7, 'Χ'), (0xD8, 'Ψ'), (0xD9, 'Ω'), (0xDA, 'Ϊ'),
        (0xDB, 'Ϋ'), (0xDC, 'ά'), (0xDD, 'έ'), (0xDE, 'ή'), (0xDF, 'ί'), (0xE0, 'ΰ'),
        (0xE1, 'α'), (0xE2, 'β'), (0xE3, 'γ'), (0xE4, 'δ'), (0xE5, 'ε'), (0xE6, 'ζ'),
        (0xE7, 'η'), (0xE8, 'θ'), (0xE9, 'ι'), (0xEA, 'κ'), (0xEB, 'λ'), (0xEC, 'μ'),
        (0xED, 'ν'), (0xEE, 'ξ'), (0xEF, 'ο'), (0xF0, 'π'), (0xF1, 'ρ'), (0xF2, 'ς'),
        (0xF3, 'σ'), (0xF4, 'τ'), (0xF5, 'υ'), (0xF6, 'φ'), (0xF7, 'χ'), (0xF8, 'ψ'),
        (0xF9, 'ω'), (0xFA, 'ϊ'), (0xFB, 'ϋ'), (0xFC, 'ό'), (0xFD, 'ύ'), (0xFE, 'ώ'),
    ])
}

fn cp1254_table() -> UpperHalf {
    from_pairs(&[
        (0x80, '€'), (0x82, '‚'), (0x83, 'ƒ'), (0x84, '„'), (0x85, '…'), (0x86, '†'),
        (0x87, '‡'), (0x88, 'ˆ'), (0x89, '‰'), (0x8A, 'Š'), (0x8B, '‹'), (0x8C, 'Œ'),
        (0x91, '\u{2018}'), (0x92, '\u{2019}'), (0x93, '\u{201C}'), (0x94, '\u{201D}'),
        (0x95, '•'), (0x96, '–'), (0x97, '—'), (0x98, '˜'), (0x99, '™'), (0x9A, 'š'),
        (0x9B, '›'), (0x9C, 'œ'), (0x9F, 'Ÿ'), (0xA0, '\u{00A0}'), (0xA1, '¡'),
        (0xA2, '¢'), (0xA3, '£'), (0xA4, '¤'), (0xA5, '¥'), (0xA6, '¦'), (0xA7, '§'),
        (0xA8, '¨'), (0xA9, '©'), (0xAA, 'ª'), (0xAB, '«'), (0xAC, '¬'), (0xAD, '\u{00AD}'),
        (0xAE, '®'), (0xAF, '¯'), (0xB0, '°'), (0xB1, '±'), (0xB2, '²'), (0xB3, '³'),
        (0xB4, '´'), (0xB5, 'µ'), (0xB6, '¶'), (0xB7, '·'), (0xB8, '¸'), (0xB9, '¹'),
        (0xBA, 'º'), (0xBB, '»'), (0xBC, '¼'), (0xBD, '½'), (0xBE, '¾'), (0xBF, '¿'),
        (0xC0, 'À'), (0xC1, 'Á'), (0xC2, 'Â'), (0xC3, 'Ã'), (0xC4, 'Ä'), (0xC5, 'Å'),
        (0xC6, 'Æ'), (0xC7, 'Ç'), (0xC8, 'È'), (0xC9, 'É'), (0xCA, 'Ê'), (0xCB, 'Ë'),
        (0xCC, 'Ì'), (0xCD, 'Í'), (0xCE, 'Î'), (0xCF, 'Ï'), (0xD0, 'Ğ'), (0xD1, 'Ñ'),
        (0xD2, 'Ò'), (0xD3, 'Ó'), (0xD4, 'Ô'), (0xD5, 'Õ'), (0xD6, 'Ö'), (0xD7, '×'),
        (0xD8, 'Ø'), (0xD9, 'Ù'), (0xDA, 'Ú'), (0xDB, 'Û'), (0xDC, 'Ü'), (0xDD, 'İ'),
        (0xDE, 'Ş'), (0xDF, 'ß'), (0xE0, 'à'), (0xE1, 'á'), (0xE2, 'â'), (0xE3, 'ã'),
        (0xE4, 'ä'), (0xE5, 'å'), (0xE6, 'æ'), (0xE7, 'ç'), (0xE8, 'è'), (0xE9, 'é'),
        (0xEA, 'ê'), (0xEB, 'ë'), (0xEC, 'ì'), (0xED, 'í'), (0xEE, 'î'), (0xEF, 'ï'),
        (0xF0, 'ğ'), (0xF1, 'ñ'), (0xF2, 'ò'), (0xF3, 'ó'), (0xF4, 'ô'), (0xF5, 'õ'),
        (0xF6, 'ö'), (0xF7, '÷'), (0xF8, 'ø'), (0xF9, 'ù'), (0xFA, 'ú'), (0xFB, 'û'),
        (0xFC, 'ü'), (0xFD, 'ı'), (0xFE, 'ş'), (0xFF, 'ÿ'),
    ])
}

fn cp1257_table() -> UpperHalf {
    from_pairs(&[
        (0x80, '€'), (0x82, '‚'), (0x84, '„'), (0x85, '…'), (0x86, '†'), (0x87, '‡'),
        (0x89, '‰'), (0x8B, '‹'), (0x8D, '¨'), (0x8E, 'ˇ'), (0x8F, '¸'),
        (0x91, '\u{2018}'), (0x92, '\u{2019}'), (0x93, '\u{201C}'), (0x94, '\u{201D}'),
        (0x95, '•'), (0x96, '–'), (0x97, '—'), (0x99, '™'), (0x9B, '›'), (0x9D, '¯'),
        (0x9E, '˛'), (0xA0, '\u{00A0}'), (0xA2, '¢'), (0xA3, '£'), (0xA4, '¤'),
        (0xA6, '¦'), (0xA7, '§'), (0xA8, 'Ø'), (0xA9, '©'), (0xAA, 'Ŗ'), (0xAB, '«'),
        (0xAC, '¬'), (0xAD, '\u{00AD}'), (0xAE, '®'), (0xAF, 'Æ'), (0xB0, '°'),
        (0xB1, '±'), (0xB2, '²'), (0xB3, '³'), (0xB4, '´'), (0xB5, 'µ'), (0xB6, '¶'),
        (0xB7, '·'), (0xB8, 'ø'), (0xB9, '¹'), (0xBA, 'ŗ'), (0xBB, '»'), (0xBC, '¼'),
        (0xBD, '½'), (0xBE, '¾'), (0xBF, 'æ'), (0xC0, 'Ą'), (0xC1, 'Į'), (0xC2, 'Ā'),
        (0xC3, 'Ć'), (0xC4, 'Ä'), (0xC5, 'Å'), (0xC6, 'Ę'), (0xC7, 'Ē'), (0xC8, 'Č'),
        (0xC9, 'É'), (0xCA, 'Ž'), (0xCB, 'Ė'), (0xCC, 'Ģ'), (0xCD, 'Ķ'), (0xCE, 'Ī'),
        (0xCF, 'Ļ'), (0xD0, 'Š'), (0xD1, 'Ń'), (0xD2, 'Ņ'), (0xD3, 'Ó'), (0xD4, 'Ō'),
        (0xD5, 'Õ'), (0xD6, 'Ö'), (0xD7, '×'), (0xD8, 'Ų'), (0xD9, 'Ł'), (0xDA, 'Ś'),
        (0xDB, 'Ū'), (0xDC, 'Ü'), (0xDD, 'Ż'), (0xDE, 'Ž'), (0xDF, 'ß'), (0xE0, 'ą'),
        (0xE1, 'į'), (0xE2, 'ā'), (0xE3, 'ć'), (0xE4, 'ä'), (0xE5, 'å'), (0xE6, 'ę'),
        (0xE7, 'ē'), (0xE8, 'č'), (0xE9, 'é'), (0xEA, 'ž'), (0xEB, 'ė'), (0xEC, 'ģ'),
        (0xED, 'ķ'), (0xEE, 'ī'), (0xEF, 'ļ'), (0xF0, 'š'), (0xF1, 'ń'), (0xF2, 'ņ'),
        (0xF3, 'ó'), (0xF4, 'ō'), (0xF5, 'õ'), (0xF6, 'ö'), (0xF7, '÷'), (0xF8, 'ų'),
        (0xF9, 'ł'), (0xFA, 'ś'), (0xFB, 'ū'), (0xFC, 'ü'), (0xFD, 'ż'), (0xFE, 'ž'),
        (0xFF, '˙'),
    ])
}
