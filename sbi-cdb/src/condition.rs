use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel condition code for bridges with no rating.
pub const UNKNOWN_CONDITION_CODE: i32 = -1;

/// Canonical technical-condition label of a bridge.
///
/// Variants are declared best to worst with `Unknown` last, which is the
/// order legends and breakdowns are listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConditionLabel {
    Flawless,
    VeryGood,
    Good,
    Satisfactory,
    Bad,
    VeryBad,
    Critical,
    Unknown,
}

impl ConditionLabel {
    pub const ALL: [ConditionLabel; 8] = [
        ConditionLabel::Flawless,
        ConditionLabel::VeryGood,
        ConditionLabel::Good,
        ConditionLabel::Satisfactory,
        ConditionLabel::Bad,
        ConditionLabel::VeryBad,
        ConditionLabel::Critical,
        ConditionLabel::Unknown,
    ];

    /// Map a raw export label onto its canonical form.
    ///
    /// Accepts the Slovak labels of the CDB export and the canonical English
    /// names. Blank cells are not handled here; the loader coerces them to
    /// [`ConditionLabel::Unknown`] before calling this.
    pub fn from_raw(raw: &str) -> Option<ConditionLabel> {
        let raw = raw.trim();
        let label = match raw {
            "Bezchybný" => ConditionLabel::Flawless,
            "Veľmi dobrý" => ConditionLabel::VeryGood,
            "Dobrý" => ConditionLabel::Good,
            "Uspokojivý" => ConditionLabel::Satisfactory,
            "Zlý" => ConditionLabel::Bad,
            "Veľmi zlý" => ConditionLabel::VeryBad,
            "Havarijný" => ConditionLabel::Critical,
            "Neznámy" => ConditionLabel::Unknown,
            other => return ConditionLabel::from_name(other),
        };
        Some(label)
    }

    /// Parse a canonical name (case-insensitive).
    pub fn from_name(name: &str) -> Option<ConditionLabel> {
        let name = name.trim();
        ConditionLabel::ALL
            .into_iter()
            .find(|label| label.name().eq_ignore_ascii_case(name))
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConditionLabel::Flawless => "Flawless",
            ConditionLabel::VeryGood => "VeryGood",
            ConditionLabel::Good => "Good",
            ConditionLabel::Satisfactory => "Satisfactory",
            ConditionLabel::Bad => "Bad",
            ConditionLabel::VeryBad => "VeryBad",
            ConditionLabel::Critical => "Critical",
            ConditionLabel::Unknown => "Unknown",
        }
    }

    /// Slovak label as printed in the CDB export, used for map hover text.
    pub fn display_name(&self) -> &'static str {
        match self {
            ConditionLabel::Flawless => "Bezchybný",
            ConditionLabel::VeryGood => "Veľmi dobrý",
            ConditionLabel::Good => "Dobrý",
            ConditionLabel::Satisfactory => "Uspokojivý",
            ConditionLabel::Bad => "Zlý",
            ConditionLabel::VeryBad => "Veľmi zlý",
            ConditionLabel::Critical => "Havarijný",
            ConditionLabel::Unknown => "Neznámy",
        }
    }
}

impl fmt::Display for ConditionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
