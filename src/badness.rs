//! The `badness` heuristic: a cheap score estimating how likely a string is
//! to be mojibake, used by the repair search to decide whether a candidate
//! step made things better or worse.
//!
//! The score is a sum of small integer weights over every adjacent pair of
//! codepoint classes (`class::Class`) in the string. Mojibake produces
//! bigrams — accented letter next to a symbol, a C1 control next to
//! anything — that well-formed text in any script essentially never does.
//! Most class pairs are unremarkable and score 0; only the pack of
//! structurally intimidated pairs below carry weight.

use crate::class::{category, Class};
use crate::mojibake_set::contains_possible_mojibake;

/// Bonus subtracted from the running total for codepoints that show up in
/// mojibake but are also extremely common in legitimate text (plain NBSP,
/// the degree sign, a byte-order mark) — without it the heuristic would
/// over-penalize strings that are mostly fine but happen to contain one of
/// these. Exposed as a named constant so a regression test can pin its
/// value rather than re-deriving it from a handful of example strings.
pub(crate) const COMMON_CODEPOINT_BONUS: i32 = -1;

const COMMON_CODEPOINTS: &[char] = &['\u{00A0}', '\u{00B0}', '\u{FEFF}'];

/// Per-bigram weight. Only pairs that are actually suspicious are listed;
/// every other combination scores 0. Ordered pairs — `(a, b)` need not carry
/// the same weight as `(b, a)`, though most of the interesting ones here do.
const WEIGHTS: &[(Class, Class, i32)] = {
    use Class::*;
    &[
        // C1 controls and stray noncharacters: essentially never legitimate.
        (C1Control, C1Control, 5),
        (C1Control, AccentedLetter, 4),
        (AccentedLetter, C1Control, 4),
        (C1Control, Currency, 4),
        (Currency, C1Control, 4),
        (C1Control, Symbol, 3),
        (Symbol, C1Control, 3),
        (C1Control, Quote, 3),
        (Quote, C1Control, 3),
        (C1Control, Math, 3),
        (Math, C1Control, 3),
        (C1Control, Digit, 3),
        (Digit, C1Control, 3),
        (C1Control, Letter, 2),
        (Letter, C1Control, 2),
        (Unassigned, Unassigned, 6),
        (Unassigned, AccentedLetter, 5),
        (AccentedLetter, Unassigned, 5),
        (OtherControl, OtherControl, 4),
        (OtherControl, AccentedLetter, 3),
        (AccentedLetter, OtherControl, 3),
        // The classic two- and three-codepoint chains produced by decoding
        // UTF-8 as Windows-1252 or Latin-1: an accented letter immediately
        // followed by a currency sign, a symbol, or a quote mark (â€™, Ã¢â‚¬).
        (AccentedLetter, Currency, 3),
        (Currency, AccentedLetter, 3),
        (Currency, Symbol, 3),
        (Symbol, Currency, 2),
        (AccentedLetter, Quote, 2),
        (Quote, AccentedLetter, 2),
        (AccentedLetter, Math, 2),
        (Math, AccentedLetter, 2),
        (AccentedLetter, Symbol, 2),
        (Symbol, AccentedLetter, 1),
        (AccentedLetter, AccentedLetter, 1),
        // Box-drawing glyphs mixed into running text is the fingerprint of
        // CP437 (or another OEM codepage) misread as Latin text.
        (Box, Letter, 2),
        (Letter, Box, 2),
        (Box, AccentedLetter, 3),
        (AccentedLetter, Box, 3),
        (Box, Digit, 2),
        (Digit, Box, 2),
        (Box, Quote, 2),
        (Quote, Box, 2),
        (Box, Punctuation, 1),
        (Punctuation, Box, 1),
        // A currency sign or math operator sitting directly against a plain
        // ASCII letter (no space) is mildly suspicious but common enough in
        // genuine text (prices, formulas) to carry only a small weight.
        (Currency, Letter, 1),
        (Letter, Currency, 1),
        (Math, Digit, 0),
        (Symbol, Digit, 1),
        (Digit, Symbol, 1),
        (Cjk, C1Control, 3),
        (C1Control, Cjk, 3),
        (Cjk, Box, 2),
        (Box, Cjk, 2),
        // An accented letter directly against a non-space whitespace
        // codepoint (NBSP chief among them) is the bigram a dropped-then-
        // restored U+00A0 leaves behind mid-repair (§4.4 restore_byte_a0):
        // "Ã" followed by NBSP is the textbook two-codepoint prefix of a
        // mis-decoded "à". Weighted above the common-codepoint bonus so the
        // pair still reads as suspicious even though NBSP alone is forgiven.
        (AccentedLetter, Whitespace, 2),
        (Whitespace, AccentedLetter, 2),
    ]
};

fn pair_weight(a: Class, b: Class) -> i32 {
    WEIGHTS
        .iter()
        .find(|&&(x, y, _)| x == a && y == b)
        .map(|&(_, _, w)| w)
        .unwrap_or(0)
}

/// Scores how mojibake-like `s` looks. Higher is worse; `0` means the string
/// contains nothing the repair search's candidate steps could plausibly have
/// produced, or contains it but in an unremarkable arrangement.
///
/// Short-circuits to `0` when `s` has no codepoint in U+0080..=U+00FF: no
/// repair step in this crate can turn well-formed text into that range, so a
/// string without it cannot be an artifact of one.
pub fn badness(s: &str) -> i32 {
    if !contains_possible_mojibake(s) {
        return 0;
    }

    let mut total = 0;
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if COMMON_CODEPOINTS.contains(&c) {
            total += COMMON_CODEPOINT_BONUS;
        }
        if let Some(p) = prev {
            total += pair_weight(category(p), category(c));
        }
        prev = Some(c);
    }
    total.max(0)
}

/// Convenience wrapper: `true` iff `badness` scores above zero.
pub fn is_bad(s: &str) -> bool {
    badness(s) > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_ascii_is_never_bad() {
        assert_eq!(badness("Hello, world!"), 0);
        assert!(!is_bad("Hello, world!"));
    }

    #[test]
    fn clean_non_latin_text_is_never_bad() {
        assert_eq!(badness("日本語のテキスト"), 0);
    }

    #[test]
    fn classic_mojibake_scores_positive() {
        assert!(badness("schÃ¶n") > 0);
        assert!(badness("\u{00E2}\u{20AC}\u{2122}") > 0); // â€™
    }

    #[test]
    fn repaired_text_scores_lower_than_mojibake() {
        let mojibake = "Ã¢â‚¬â„¢";
        let repaired = "'";
        assert!(badness(mojibake) > badness(repaired));
    }

    #[test]
    fn lone_nbsp_is_not_penalized_into_positive_badness() {
        assert_eq!(badness("caf\u{00A0}e"), 0);
    }

    #[test]
    fn accented_letter_next_to_nbsp_scores_positive() {
        // "Ã" immediately followed by NBSP is the two-codepoint prefix left
        // behind mid-repair when a dropped U+00A0 gets restored next to a
        // still-undecoded lead byte; it must outscore the bare NBSP bonus.
        assert!(badness("voilÃ\u{00A0}le travail") > 0);
    }
}
