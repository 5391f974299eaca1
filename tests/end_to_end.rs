//! End-to-end scenarios and universal properties from the repair core's
//! behavioral contract: the ten concrete before/after examples plus
//! idempotence, plan faithfulness, and the no-mojibake fixed point, each
//! checked against a handful of representative strings rather than a
//! property-test generator.

use mojibake_core::{apply_plan, fix_encoding, fix_encoding_and_explain, fix_text, TextFixerConfig};

fn config() -> TextFixerConfig {
    TextFixerConfig::default()
}

#[test]
fn scenario_01_classic_windows_1252_mojibake() {
    assert_eq!(fix_encoding("schÃ¶n", &config()), "schön");
}

#[test]
fn scenario_02_curly_quote_mojibake_with_ellipsis() {
    // The opening curly quote (â€œ) and the ellipsis (â€¦) are each their own
    // three-byte UTF-8-as-Windows-1252 artifact; the input has no closing
    // curly quote's worth of mojibake to repair.
    assert_eq!(
        fix_encoding("â€œmismatched quotesâ€¦", &config()),
        "\u{201C}mismatched quotes\u{2026}"
    );
}

#[test]
fn scenario_03_thai_mojibake() {
    assert_eq!(fix_encoding("(à¸‡'âŒ£')à¸‡", &config()), "(ง'⌣')ง");
}

#[test]
fn scenario_04_mona_lisa_double_mojibake_reaches_fixed_point() {
    let result = fix_text(
        "The Mona Lisa doesnÃƒÂ¢Ã¢â€šÂ¬Ã¢â€žÂ¢t have eyebrows.",
        &config(),
    );
    assert_eq!(result, "The Mona Lisa doesn\u{2019}t have eyebrows.");
}

#[test]
fn scenario_05_restore_byte_a0_before_an_already_present_nbsp() {
    assert_eq!(
        fix_encoding("Ã\u{00A0} perturber la rÃ©flexion", &config()),
        "à perturber la réflexion"
    );
}

#[test]
fn scenario_06_cp437_box_drawing_is_not_mistaken_for_mojibake() {
    let text = "├┤a┼┐a┼┐a┼┐a┼┐a";
    assert_eq!(fix_encoding(text, &config()), text);
}

#[test]
fn scenario_07_accented_capital_before_ellipsis_is_a_false_positive_guard() {
    let text = "IL Y MARQUÉ…";
    assert_eq!(fix_encoding(text, &config()), text);
}

#[test]
fn scenario_08_lossy_decoding_is_quarantined_to_one_marker() {
    assert_eq!(
        fix_text("â€œlossy decodingâ€\u{FFFD}", &config()),
        "\u{201C}lossy decoding\u{FFFD}"
    );
}

#[test]
fn scenario_09_isolated_a_grave_with_a_dropped_nbsp() {
    assert_eq!(
        fix_encoding("voilÃ  le travail", &config()),
        "voilà le travail"
    );
}

#[test]
fn scenario_10_short_isolated_utf8_windows_1252_sequence() {
    assert_eq!(fix_text("aoÃ»t", &config()), "août");
}

#[test]
fn idempotence_holds_across_a_mixed_sample() {
    let samples = [
        "schÃ¶n",
        "â€œmismatched quotesâ€¦",
        "(à¸‡'âŒ£')à¸‡",
        "plain ASCII text",
        "日本語のテキスト",
    ];
    for s in samples {
        let once = fix_encoding(s, &config());
        let twice = fix_encoding(&once, &config());
        assert_eq!(once, twice, "fix_encoding was not idempotent for {s:?}");
    }
}

#[test]
fn no_mojibake_fixed_point_leaves_clean_text_untouched_with_an_empty_plan() {
    let samples = ["Hello, world!", "日本語のテキスト", "plain café menu"];
    for s in samples {
        let result = fix_encoding_and_explain(s, &config());
        assert_eq!(result.text, s);
        assert!(result.plan.is_empty(), "expected an empty plan for {s:?}");
    }
}

#[test]
fn plan_replay_reproduces_the_search_output_for_every_scenario() {
    let samples = [
        "schÃ¶n",
        "â€œmismatched quotesâ€¦",
        "(à¸‡'âŒ£')à¸‡",
        "voilÃ  le travail",
        "aoÃ»t",
    ];
    for s in samples {
        let result = fix_encoding_and_explain(s, &config());
        let replayed = apply_plan(s, &result.plan);
        assert_eq!(replayed, result.text, "plan replay diverged for {s:?}");
    }
}
