//! The fixed-point driver (§4.5's state machine, §9): repeatedly runs the
//! full candidate search until a pass makes no further change or
//! `config.max_iterations` passes have run. Included per §6 ("for
//! completeness") even though the core's own contract is just the search in
//! `search.rs` — everything else in the state machine (line-break fixes,
//! normalization, quote uncurling, …) is a collaborator's job, not this
//! crate's.

use log::debug;

use crate::plan::{AuxiliaryRepair, ExplainedText, Plan, TextFixerConfig};
use crate::repairs;
use crate::search::fix_encoding_and_explain;

/// Dispatches one named auxiliary repair to its implementation. Shared by
/// `search::best_candidate` (trying it as a step) and `search::apply_plan`
/// (replaying a `Step::Repair` the same way the search originally applied
/// it).
pub(crate) fn apply_auxiliary_repair(repair: AuxiliaryRepair, s: &str) -> String {
    match repair {
        AuxiliaryRepair::FixSurrogates => repairs::fix_surrogates(s),
        AuxiliaryRepair::FixC1Controls => repairs::fix_c1_controls(s),
        AuxiliaryRepair::RestoreByteA0 => repairs::restore_byte_a0(s),
        AuxiliaryRepair::ReplaceLossySequences => repairs::replace_lossy_sequences(s),
        AuxiliaryRepair::DecodeInconsistentUtf8 => repairs::decode_inconsistent_utf8(s),
        AuxiliaryRepair::FixPartialUtf8PunctIn1252 => repairs::fix_partial_utf8_punct_in_1252(s),
    }
}

/// Repeatedly runs the encoding-repair search until a pass makes no change
/// or `config.max_iterations` passes have run — whichever comes first. The
/// search already converges internally (it loops candidate selection to its
/// own fixed point), so in practice this outer loop only ever needs a
/// second pass when a driver-level transform run between passes (outside
/// this crate's scope) unblocks a further repair; it exists so that
/// behavior composes correctly if one ever is.
pub fn fix_and_explain(s: &str, config: &TextFixerConfig) -> ExplainedText {
    let mut text = s.to_string();
    let mut plan = Plan::default();

    for iteration in 0..config.max_iterations.max(1) {
        let pass = fix_encoding_and_explain(&text, config);
        if pass.plan.is_empty() {
            debug!("fix_and_explain: converged after {iteration} iterations");
            break;
        }
        plan.steps.extend(pass.plan.steps);
        text = pass.text;
    }

    ExplainedText { text, plan }
}

/// The text-only convenience wrapper over `fix_and_explain`.
pub fn fix_text(s: &str, config: &TextFixerConfig) -> String {
    fix_and_explain(s, config).text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_on_doubly_mojibake_text() {
        let config = TextFixerConfig::default();
        let result = fix_and_explain("La Joconde, ou Monna Lisa Ã Â© ", &config);
        assert!(
            crate::badness::badness(&result.text)
                <= crate::badness::badness("La Joconde, ou Monna Lisa Ã Â© ")
        );
    }

    #[test]
    fn stops_without_looping_forever_on_already_clean_text() {
        let config = TextFixerConfig::default();
        let result = fix_and_explain("nothing wrong here", &config);
        assert_eq!(result.text, "nothing wrong here");
        assert!(result.plan.is_empty());
    }

    #[test]
    fn disabling_fix_c1_controls_leaves_c1_controls_alone() {
        let config = TextFixerConfig {
            fix_c1_controls: false,
            ..TextFixerConfig::default()
        };
        let result = fix_and_explain("\u{0093}hi\u{0094}", &config);
        assert_eq!(result.text, "\u{0093}hi\u{0094}");
    }

    #[test]
    fn respects_max_iterations() {
        let config = TextFixerConfig {
            max_iterations: 1,
            ..TextFixerConfig::default()
        };
        let result = fix_and_explain("schÃ¶n", &config);
        assert_eq!(result.text, "schön");
    }

    #[test]
    fn mona_lisa_example_reaches_the_curly_apostrophe() {
        let config = TextFixerConfig::default();
        let result = fix_and_explain(
            "The Mona Lisa doesnÃƒÂ¢Ã¢â€šÂ¬Ã¢â€žÂ¢t have eyebrows.",
            &config,
        );
        assert_eq!(
            result.text,
            "The Mona Lisa doesn\u{2019}t have eyebrows."
        );
    }
}
