use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical category of the road a bridge carries.
///
/// The CDB export uses several spellings for the same category (including
/// the municipal "MZ"/"MO" classes, which are folded into class II/III).
/// [`RoadClass::from_raw`] is the only way raw values enter the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoadClass {
    Highway,
    ClassIRoad,
    ClassIIRoad,
    ClassIIIRoad,
    LocalRoad,
}

/// Raw export value -> canonical class.
const SYNONYMS: [(&str, RoadClass); 8] = [
    ("diaľnica", RoadClass::Highway),
    ("privádzač diaľničný", RoadClass::Highway),
    ("cesta I. triedy", RoadClass::ClassIRoad),
    ("cesta II. triedy", RoadClass::ClassIIRoad),
    ("II. trieda - miestna zberná (MZ)", RoadClass::ClassIIRoad),
    ("cesta III. triedy", RoadClass::ClassIIIRoad),
    ("III. trieda - miestna obslužná (MO)", RoadClass::ClassIIIRoad),
    ("miestna neurčená", RoadClass::LocalRoad),
];

impl RoadClass {
    /// Every class, in canonical order.
    pub const ALL: [RoadClass; 5] = [
        RoadClass::Highway,
        RoadClass::ClassIRoad,
        RoadClass::ClassIIRoad,
        RoadClass::ClassIIIRoad,
        RoadClass::LocalRoad,
    ];

    /// Map a raw export value onto its canonical class.
    ///
    /// Returns `None` for anything outside the synonym table; the loader
    /// turns that into a load failure.
    pub fn from_raw(raw: &str) -> Option<RoadClass> {
        let raw = raw.trim();
        SYNONYMS
            .iter()
            .find(|(synonym, _)| *synonym == raw)
            .map(|(_, class)| *class)
    }

    /// Canonical name, as used on the request/response contract.
    pub fn name(&self) -> &'static str {
        match self {
            RoadClass::Highway => "Highway",
            RoadClass::ClassIRoad => "ClassIRoad",
            RoadClass::ClassIIRoad => "ClassIIRoad",
            RoadClass::ClassIIIRoad => "ClassIIIRoad",
            RoadClass::LocalRoad => "LocalRoad",
        }
    }

    /// Slovak name for map hover text.
    pub fn display_name(&self) -> &'static str {
        match self {
            RoadClass::Highway => "Diaľnica",
            RoadClass::ClassIRoad => "Cesta I. triedy",
            RoadClass::ClassIIRoad => "Cesta II. triedy",
            RoadClass::ClassIIIRoad => "Cesta III. triedy",
            RoadClass::LocalRoad => "Miestna cesta",
        }
    }

    /// Parse a canonical name (case-insensitive).
    pub fn from_name(name: &str) -> Option<RoadClass> {
        let name = name.trim();
        RoadClass::ALL
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for RoadClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
