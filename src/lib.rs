//! Detects and repairs mojibake: text that was decoded through the wrong
//! character encoding at some point in its history and now displays as
//! garbage instead of the characters it was supposed to contain.
//!
//! The entry points are [`fix_encoding`] (the encoding-repair search alone)
//! and [`fix_text`] (the full fixed-point driver, for completeness — see
//! [`fix_and_explain`]). Both only ever improve or leave text unchanged —
//! there is no failure mode a caller can observe; a string this crate can't
//! help with comes back exactly as it went in.
//!
//! ```
//! use mojibake_core::{fix_encoding, TextFixerConfig};
//!
//! let config = TextFixerConfig::default();
//! assert_eq!(fix_encoding("schÃ¶n", &config), "schön");
//! ```

mod badness;
mod class;
mod codec;
mod error;
mod fixer;
mod mojibake_set;
mod plan;
mod repairs;
mod search;

pub use badness::{badness, is_bad};
pub use fixer::{fix_and_explain, fix_text};
pub use plan::{AuxiliaryRepair, Encoding, ExplainedText, Plan, Step, TextFixerConfig};
pub use search::{apply_plan, fix_encoding, fix_encoding_and_explain};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end_curly_quote_mojibake() {
        let config = TextFixerConfig::default();
        assert_eq!(
            fix_encoding("â€œcurly quotesâ€", &config),
            "\u{201C}curly quotes\u{201D}"
        );
    }

    #[test]
    fn end_to_end_restore_byte_a0_example() {
        let config = TextFixerConfig::default();
        assert_eq!(fix_text("20 °C", &config), "20\u{00A0}°C");
    }

    #[test]
    fn false_positive_guard_does_not_touch_box_drawing_literal_text() {
        // Box-drawing glyphs set deliberately (as in a terminal diagram)
        // should not be treated as mojibake just because they're unusual.
        let config = TextFixerConfig::default();
        let text = "├┤a┼┐a┼┐a┼┐a┼┐a";
        assert_eq!(fix_encoding(text, &config), text);
    }

    #[test]
    fn false_positive_guard_accented_capital_plus_ellipsis() {
        let config = TextFixerConfig::default();
        let text = "IL Y MARQUÉ…";
        assert_eq!(fix_encoding(text, &config), text);
    }

    #[test]
    fn lossy_sequence_is_quarantined_to_a_single_marker() {
        let config = TextFixerConfig::default();
        let result = fix_text("â€œlossy decodingâ€\u{FFFD}", &config);
        assert_eq!(result, "\u{201C}lossy decoding\u{FFFD}");
    }

    #[test]
    fn isolated_a_circumflex_t_is_repaired() {
        let config = TextFixerConfig::default();
        assert_eq!(fix_text("aoÃ»t", &config), "août");
    }
}
