//! Shared data model: the closed set of encoding identifiers, the single
//! steps a repair can be built from, the replayable `Plan` those steps form,
//! and the configuration type a caller uses to steer the whole thing.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the encodings this crate can encode to or decode from while
/// searching for a repair. Closed set: every value here has a working
/// `Codec` implementation, and the search never invents encodings outside
/// this list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Encoding {
    Utf8,
    Utf8Variants,
    Latin1,
    Cp437,
    MacRoman,
    SloppyWindows1250,
    SloppyWindows1251,
    SloppyWindows1252,
    SloppyWindows1253,
    SloppyWindows1254,
    SloppyWindows1257,
}

impl Encoding {
    /// The ten (eleven, counting `utf-8-variants` separately from `utf-8`)
    /// canonical names a `Plan` is serialized and logged under.
    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Utf8Variants => "utf-8-variants",
            Encoding::Latin1 => "latin-1",
            Encoding::Cp437 => "cp437",
            Encoding::MacRoman => "macroman",
            Encoding::SloppyWindows1250 => "sloppy-windows-1250",
            Encoding::SloppyWindows1251 => "sloppy-windows-1251",
            Encoding::SloppyWindows1252 => "sloppy-windows-1252",
            Encoding::SloppyWindows1253 => "sloppy-windows-1253",
            Encoding::SloppyWindows1254 => "sloppy-windows-1254",
            Encoding::SloppyWindows1257 => "sloppy-windows-1257",
        }
    }

    /// Every encoding the search tries on the *encode* side of an `encode →
    /// decode` pass, in fixed priority order: sloppy-windows-1252 is tried
    /// before latin-1, since mis-decoded Windows-1252 is by far the most
    /// common mojibake this crate sees in the wild. `utf-8` and
    /// `utf-8-variants` never appear here — per §3 they are only ever the
    /// *decode* half of a pair (text is never plausibly mojibake because it
    /// was first read as UTF-8; it is mojibake because something else was
    /// misread and UTF-8-decoded afterwards).
    pub fn search_priority() -> &'static [Encoding] {
        &[
            Encoding::SloppyWindows1252,
            Encoding::Latin1,
            Encoding::MacRoman,
            Encoding::Cp437,
            Encoding::SloppyWindows1251,
            Encoding::SloppyWindows1250,
            Encoding::SloppyWindows1254,
            Encoding::SloppyWindows1253,
            Encoding::SloppyWindows1257,
        ]
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One auxiliary, non-codec repair the search can apply alongside an
/// encode/decode pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AuxiliaryRepair {
    FixSurrogates,
    FixC1Controls,
    RestoreByteA0,
    ReplaceLossySequences,
    DecodeInconsistentUtf8,
    FixPartialUtf8PunctIn1252,
}

impl AuxiliaryRepair {
    pub fn as_str(self) -> &'static str {
        match self {
            AuxiliaryRepair::FixSurrogates => "fix-surrogates",
            AuxiliaryRepair::FixC1Controls => "fix-c1-controls",
            AuxiliaryRepair::RestoreByteA0 => "restore-byte-a0",
            AuxiliaryRepair::ReplaceLossySequences => "replace-lossy-sequences",
            AuxiliaryRepair::DecodeInconsistentUtf8 => "decode-inconsistent-utf8",
            AuxiliaryRepair::FixPartialUtf8PunctIn1252 => "fix-partial-utf8-punct-in-1252",
        }
    }
}

/// One transformation the search applied, in the order it was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// Text was encoded to bytes under the given assumed source encoding.
    Encode(Encoding),
    /// Those bytes were decoded back as the given (usually different)
    /// encoding.
    Decode(Encoding),
    /// A non-codec, pattern-driven repair was applied.
    Repair(AuxiliaryRepair),
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Encode(e) => write!(f, "encode({e})"),
            Step::Decode(e) => write!(f, "decode({e})"),
            Step::Repair(r) => write!(f, "repair({})", r.as_str()),
        }
    }
}

/// The ordered sequence of steps that turned the input into the output.
/// Replayable: applying the same steps, in order, to the same input
/// reproduces the same output (§4.5's explainer contract).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plan {
    pub steps: Vec<Step>,
}

impl Plan {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }
}

/// The repaired text paired with the plan that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplainedText {
    pub text: String,
    pub plan: Plan,
}

/// Knobs controlling how aggressively the repair search and the auxiliary
/// repairs run. Also carries two fields (`unescape_html`, `uncurl_quotes`)
/// that this crate's core never reads — they exist so a driver embedding
/// this core can populate one config value and pass it straight through,
/// instead of keeping two parallel config types in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextFixerConfig {
    /// Run `decode_inconsistent_utf8` (a string containing both correctly
    /// decoded and mis-decoded UTF-8 fragments).
    pub decode_inconsistent_utf8: bool,
    /// Replace isolated C1 control bytes that are almost always a
    /// mis-decoded Windows-1252 punctuation mark.
    pub fix_c1_controls: bool,
    /// Restore a dropped or mangled U+00A0 (NBSP) where context strongly
    /// implies one was there.
    pub restore_byte_a0: bool,
    /// Replace the `�` sequences a lossy decode leaves behind with a
    /// best-effort guess at the original character, where unambiguous.
    pub replace_lossy_sequences: bool,
    /// Upper bound on how many times the fixed-point driver re-applies the
    /// whole repair pass before giving up and returning the best text found
    /// so far.
    pub max_iterations: u32,
    /// Not read by this crate; carried through for a driver that also
    /// unescapes HTML entities.
    pub unescape_html: bool,
    /// Not read by this crate; carried through for a driver that also
    /// normalizes curly quotes to straight ones (or vice versa).
    pub uncurl_quotes: bool,
}

impl Default for TextFixerConfig {
    fn default() -> Self {
        TextFixerConfig {
            decode_inconsistent_utf8: true,
            fix_c1_controls: true,
            restore_byte_a0: true,
            replace_lossy_sequences: true,
            max_iterations: 16,
            unescape_html: false,
            uncurl_quotes: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_round_trips_through_as_str() {
        for &e in Encoding::search_priority() {
            assert!(!e.as_str().is_empty());
        }
    }

    #[test]
    fn sloppy_windows_1252_precedes_latin1_in_search_priority() {
        let order = Encoding::search_priority();
        let pos_1252 = order.iter().position(|&e| e == Encoding::SloppyWindows1252);
        let pos_latin1 = order.iter().position(|&e| e == Encoding::Latin1);
        assert!(pos_1252 < pos_latin1);
    }

    #[test]
    fn default_config_matches_documented_defaults() {
        let cfg = TextFixerConfig::default();
        assert!(cfg.decode_inconsistent_utf8);
        assert!(cfg.fix_c1_controls);
        assert!(cfg.restore_byte_a0);
        assert!(cfg.replace_lossy_sequences);
        assert_eq!(cfg.max_iterations, 16);
    }
}
