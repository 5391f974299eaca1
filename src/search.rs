//! The encoding-repair search: tries `encode → decode` candidate steps and
//! the config-gated auxiliary repairs in a fixed priority order, keeps
//! whichever one best lowers `badness`, and recurses until nothing in the
//! candidate list helps or `config.max_iterations` is hit. Records what it
//! did so the result can be explained and replayed.

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::badness::badness;
use crate::class::{category, Class};
use crate::codec::{codec_for, Codec};
use crate::fixer::apply_auxiliary_repair;
use crate::mojibake_set::contains_possible_mojibake;
use crate::plan::{AuxiliaryRepair, Encoding, ExplainedText, Plan, Step, TextFixerConfig};

/// An auxiliary repair considered a "narrow" fix by §4.5 step 4: accepted
/// whenever it doesn't *increase* badness, rather than requiring a strict
/// decrease. Everything else — codec steps, `fix_surrogates`,
/// `fix_c1_controls` — must strictly improve the score to be accepted.
fn is_narrow(repair: AuxiliaryRepair) -> bool {
    matches!(
        repair,
        AuxiliaryRepair::DecodeInconsistentUtf8
            | AuxiliaryRepair::FixPartialUtf8PunctIn1252
            | AuxiliaryRepair::RestoreByteA0
            | AuxiliaryRepair::ReplaceLossySequences
    )
}

/// What produced a candidate's text: either one `encode → decode` pair (the
/// encodings need not match — the whole point of the search is that text
/// encoded as one legacy codepage gets *decoded* as UTF-8), or one auxiliary
/// repair.
enum CandidateKind {
    Codec(Encoding, Encoding),
    Repair(AuxiliaryRepair),
}

/// One accepted-or-rejected attempt, kept just long enough to compare it
/// against the other candidates tried in the same round.
struct Candidate {
    kind: CandidateKind,
    text: String,
    score: i32,
}

static ACCENTED_CAPITAL_ENDING_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\u{00C0}-\u{00D6}\u{00D8}-\u{00DD}][.!?\u{2026}]").unwrap());

/// Guards against the single most common false-positive shape: an
/// all-caps or title-case word ending in an accented capital immediately
/// before a full stop, question mark, exclamation mark, or ellipsis (`IL Y
/// MARQUÉ…`). Real mojibake essentially never leaves this exact pattern
/// behind, but legitimate emphatic French/Spanish/Portuguese text often
/// does — so a whole-string codec candidate is vetoed outright whenever the
/// *current* text already has this shape, regardless of what the candidate
/// would otherwise do to its score.
fn has_false_positive_capital_ending_punctuation(s: &str) -> bool {
    ACCENTED_CAPITAL_ENDING_PUNCTUATION.is_match(s)
}

fn count_class(s: &str, class: Class) -> usize {
    s.chars().filter(|&c| category(c) == class).count()
}

/// Rejects a codec candidate that turns a single Latin letter into a lone
/// CJK ideograph sitting directly against Latin text (or vice versa) — real
/// CJK-via-mojibake repairs produce several CJK characters together, not
/// one stray ideograph wedged into a Latin word.
fn violates_cjk_latin_gate(before: &str, after: &str) -> bool {
    let gained = count_class(after, Class::Cjk).saturating_sub(count_class(before, Class::Cjk));
    if gained == 0 || gained >= 2 {
        return false;
    }
    let chars: Vec<char> = after.chars().collect();
    chars.iter().enumerate().any(|(i, &c)| {
        if category(c) != Class::Cjk {
            return false;
        }
        let left_latin = i > 0 && matches!(category(chars[i - 1]), Class::Letter | Class::AccentedLetter);
        let right_latin = i + 1 < chars.len()
            && matches!(category(chars[i + 1]), Class::Letter | Class::AccentedLetter);
        left_latin || right_latin
    })
}

fn is_cyrillic(c: char) -> bool {
    (0x0400..=0x04FF).contains(&(c as u32))
}

/// Repairs that introduce Cyrillic out of Latin-looking text must commit to
/// it: at least two Cyrillic letters, and no Latin letters left over in the
/// result. A single stray Cyrillic letter surrounded by otherwise-Latin text
/// is far more likely to be an overzealous candidate than a genuine
/// Latin/Cyrillic mojibake mixup.
fn violates_cyrillic_gate(before: &str, after: &str) -> bool {
    let before_cyrillic = before.chars().filter(|&c| is_cyrillic(c)).count();
    let after_cyrillic = after.chars().filter(|&c| is_cyrillic(c)).count();
    if after_cyrillic <= before_cyrillic {
        return false;
    }
    let gained = after_cyrillic - before_cyrillic;
    let latin_remains = after
        .chars()
        .any(|c| matches!(category(c), Class::Letter | Class::AccentedLetter));
    gained < 2 || latin_remains
}

fn codec_candidate(s: &str, current_score: i32) -> Option<Candidate> {
    if has_false_positive_capital_ending_punctuation(s) {
        trace!("codec search: vetoed by accented-capital/ending-punctuation guard");
        return None;
    }

    let mut best: Option<Candidate> = None;
    for &encode_as in Encoding::search_priority() {
        let encoder = codec_for(encode_as);
        let bytes = match encoder.encode(s) {
            Ok(bytes) => bytes,
            Err(e) => {
                trace!("encode({encode_as}): rejected as a candidate step ({e})");
                continue;
            }
        };

        // §4.5 step 3: every encode candidate is first paired with a
        // `utf-8` decode; `sloppy-windows-1252` additionally gets a second
        // attempt decoding as `utf-8-variants` (the CESU-8-tolerant
        // sibling), since that is the one pairing the spec calls out by
        // name as its own priority slot.
        let mut decode_targets = vec![Encoding::Utf8];
        if encode_as == Encoding::SloppyWindows1252 {
            decode_targets.push(Encoding::Utf8Variants);
        }

        for decode_as in decode_targets {
            let candidate_text = match codec_for(decode_as).decode(&bytes) {
                Ok(text) if text != s => text,
                Ok(_) => continue,
                Err(e) => {
                    trace!("encode({encode_as}) -> decode({decode_as}): rejected as a candidate step ({e})");
                    continue;
                }
            };

            if violates_cjk_latin_gate(s, &candidate_text) {
                trace!("encode({encode_as}) -> decode({decode_as}): vetoed by the CJK/Latin gate");
                continue;
            }
            if violates_cyrillic_gate(s, &candidate_text) {
                trace!("encode({encode_as}) -> decode({decode_as}): vetoed by the Cyrillic gate");
                continue;
            }

            let candidate_score = badness(&candidate_text);
            trace!(
                "encode({encode_as}) -> decode({decode_as}): candidate badness {candidate_score} (current {current_score})"
            );
            if candidate_score >= current_score {
                continue;
            }

            let is_better = match &best {
                Some(b) => candidate_score < b.score,
                None => true,
            };
            if is_better {
                best = Some(Candidate {
                    kind: CandidateKind::Codec(encode_as, decode_as),
                    text: candidate_text,
                    score: candidate_score,
                });
            }
        }
    }
    best
}

fn repair_candidate(
    repair: AuxiliaryRepair,
    enabled: bool,
    s: &str,
    current_score: i32,
) -> Option<Candidate> {
    if !enabled {
        return None;
    }
    let candidate_text = apply_auxiliary_repair(repair, s);
    if candidate_text == s {
        return None;
    }
    let candidate_score = badness(&candidate_text);
    let accepted = if is_narrow(repair) {
        candidate_score <= current_score
    } else {
        candidate_score < current_score
    };
    if !accepted {
        trace!("{repair:?}: rejected (badness {candidate_score}, current {current_score})");
        return None;
    }
    Some(Candidate {
        kind: CandidateKind::Repair(repair),
        text: candidate_text,
        score: candidate_score,
    })
}

/// Tries every candidate first step (§4.5 step 3) against `s` and returns
/// the best one that the acceptance rule (step 4) allows, preferring the
/// earliest in priority order on a tie. The codec candidates occupy the
/// front of the priority list; auxiliary repairs follow in the order
/// `fix_surrogates`, `decode_inconsistent_utf8`,
/// `fix_partial_utf8_punct_in_1252`, `fix_c1_controls`, `restore_byte_a0`,
/// `replace_lossy_sequences`.
fn best_candidate(s: &str, config: &TextFixerConfig, current_score: i32) -> Option<Candidate> {
    let mut candidates = Vec::with_capacity(2);

    if let Some(c) = codec_candidate(s, current_score) {
        candidates.push(c);
    }
    for (repair, enabled) in [
        (AuxiliaryRepair::FixSurrogates, true),
        (
            AuxiliaryRepair::DecodeInconsistentUtf8,
            config.decode_inconsistent_utf8,
        ),
        (AuxiliaryRepair::FixPartialUtf8PunctIn1252, true),
        (AuxiliaryRepair::FixC1Controls, config.fix_c1_controls),
        (AuxiliaryRepair::RestoreByteA0, config.restore_byte_a0),
        (
            AuxiliaryRepair::ReplaceLossySequences,
            config.replace_lossy_sequences,
        ),
    ] {
        if let Some(c) = repair_candidate(repair, enabled, s, current_score) {
            candidates.push(c);
        }
    }

    candidates.into_iter().min_by_key(|c| c.score)
}

/// Runs the full candidate search to a fixed point: repeatedly finds and
/// applies the best candidate step until none improves the text or
/// `config.max_iterations` passes have run (§4.5 steps 2–6).
pub fn fix_encoding_and_explain(s: &str, config: &TextFixerConfig) -> ExplainedText {
    if !contains_possible_mojibake(s) {
        return ExplainedText {
            text: s.to_string(),
            plan: Plan::default(),
        };
    }

    let mut text = s.to_string();
    let mut plan = Plan::default();
    let mut score = badness(&text);

    for _ in 0..config.max_iterations.max(1) {
        match best_candidate(&text, config, score) {
            Some(candidate) => {
                match candidate.kind {
                    CandidateKind::Codec(encode_as, decode_as) => {
                        plan.push(Step::Encode(encode_as));
                        plan.push(Step::Decode(decode_as));
                    }
                    CandidateKind::Repair(repair) => plan.push(Step::Repair(repair)),
                }
                text = candidate.text;
                score = candidate.score;
            }
            None => break,
        }
    }

    ExplainedText { text, plan }
}

/// The text-only convenience wrapper over `fix_encoding_and_explain`.
pub fn fix_encoding(s: &str, config: &TextFixerConfig) -> String {
    fix_encoding_and_explain(s, config).text
}

/// Replays a previously recorded `Plan` against `s`. Used to reapply a
/// repair that was computed once and logged, without re-running the search.
/// Encode steps must be followed by a matching decode step — this crate
/// never emits any other shape of plan, but a hand-built one that violates
/// that pairing simply leaves the in-progress bytes buffer unconsumed,
/// which is surfaced as the original text being returned unchanged from
/// that point on.
pub fn apply_plan(s: &str, plan: &Plan) -> String {
    let mut text = s.to_string();
    let mut pending_bytes: Option<Vec<u8>> = None;

    for step in &plan.steps {
        match step {
            Step::Encode(encoding) => match codec_for(*encoding).encode(&text) {
                Ok(bytes) => pending_bytes = Some(bytes),
                Err(e) => {
                    trace!("apply_plan: encode({encoding}) failed ({e}), stopping replay");
                    break;
                }
            },
            Step::Decode(encoding) => {
                let Some(bytes) = pending_bytes.take() else {
                    trace!("apply_plan: decode({encoding}) with no pending bytes, stopping replay");
                    break;
                };
                match codec_for(*encoding).decode(&bytes) {
                    Ok(decoded) => text = decoded,
                    Err(e) => {
                        trace!("apply_plan: decode({encoding}) failed ({e}), stopping replay");
                        break;
                    }
                }
            }
            Step::Repair(repair) => {
                text = apply_auxiliary_repair(*repair, &text);
            }
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_is_returned_with_an_empty_plan() {
        let config = TextFixerConfig::default();
        let result = fix_encoding_and_explain("Hello, world!", &config);
        assert_eq!(result.text, "Hello, world!");
        assert!(result.plan.is_empty());
    }

    #[test]
    fn classic_windows_1252_mojibake_is_repaired() {
        let config = TextFixerConfig::default();
        let result = fix_encoding_and_explain("schÃ¶n", &config);
        assert_eq!(result.text, "schön");
        assert_eq!(result.plan.steps.len(), 2);
    }

    #[test]
    fn plan_replay_reproduces_the_same_output() {
        let config = TextFixerConfig::default();
        let result = fix_encoding_and_explain("schÃ¶n", &config);
        let replayed = apply_plan("schÃ¶n", &result.plan);
        assert_eq!(replayed, result.text);
    }

    #[test]
    fn thai_mojibake_example_is_repaired() {
        let config = TextFixerConfig::default();
        let result = fix_encoding_and_explain("(à¸‡'âŒ£')à¸‡", &config);
        assert_eq!(result.text, "(ง'⌣')ง");
    }

    #[test]
    fn isolated_a_grave_with_a_dropped_nbsp_is_repaired() {
        let config = TextFixerConfig::default();
        let result = fix_encoding_and_explain("voilÃ  le travail", &config);
        assert_eq!(result.text, "voilà le travail");
    }

    #[test]
    fn accented_capital_before_ellipsis_is_left_untouched() {
        let config = TextFixerConfig::default();
        let text = "IL Y MARQUÉ…";
        let result = fix_encoding_and_explain(text, &config);
        assert_eq!(result.text, text);
        assert!(result.plan.is_empty());
    }

    #[test]
    fn box_drawing_literal_text_is_left_untouched() {
        let config = TextFixerConfig::default();
        let text = "├┤a┼┐a┼┐a┼┐a┼┐a";
        let result = fix_encoding_and_explain(text, &config);
        assert_eq!(result.text, text);
        assert!(result.plan.is_empty());
    }

    #[test]
    fn max_iterations_of_zero_is_treated_as_one_pass() {
        let config = TextFixerConfig {
            max_iterations: 0,
            ..TextFixerConfig::default()
        };
        let result = fix_encoding_and_explain("schÃ¶n", &config);
        assert_eq!(result.text, "schön");
    }
}
