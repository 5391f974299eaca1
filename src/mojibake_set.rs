//! Membership test backing the cheap early-out in `badness`.
//!
//! A string made entirely of codepoints outside U+0080..=U+00FF cannot be
//! mojibake: every step this crate knows how to undo produces that range as
//! its wrong-encoding artifact (Windows-125x control pictures, curly quotes,
//! and the C1 block all land there, or get re-encoded through it on the way
//! back to Latin-1). Checking membership first lets `badness` skip the
//! bigram scan entirely for the common case of already-clean ASCII or
//! already-clean non-Latin text.

include!(concat!(env!("OUT_DIR"), "/mojibake_set.rs"));

/// True if `c` is a codepoint that some mojibake byte sequence could produce.
pub fn is_possible_mojibake_codepoint(c: char) -> bool {
    MOJIBAKE_CODEPOINTS.contains(&(c as u32))
}

/// True if `s` contains at least one codepoint `is_possible_mojibake_codepoint`
/// would accept — the fast path `badness` takes before running its bigram scan.
pub fn contains_possible_mojibake(s: &str) -> bool {
    s.chars().any(is_possible_mojibake_codepoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_ascii_has_no_mojibake_candidates() {
        assert!(!contains_possible_mojibake("hello world"));
    }

    #[test]
    fn latin1_supplement_is_a_candidate() {
        assert!(contains_possible_mojibake("schÃ¶n"));
        assert!(is_possible_mojibake_codepoint('Ã'));
    }

    #[test]
    fn plain_non_latin_text_has_no_mojibake_candidates() {
        assert!(!contains_possible_mojibake("日本語"));
    }
}
