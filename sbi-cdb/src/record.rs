use crate::condition::ConditionLabel;
use crate::road_class::RoadClass;
use serde::{Deserialize, Serialize};

/// One physical bridge as observed in one inventory year.
///
/// Records are never mutated after load. `bridge_id` is stable across years;
/// `(bridge_id, observation_year)` is not guaranteed unique because the
/// export itself contains duplicates.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeRecord {
    pub road_class: RoadClass,
    /// Road number, e.g. "D1" or "I/61". Informational only.
    pub road_number: String,
    /// Administrator's own bridge number
    pub administrative_id: String,
    /// National bridge identifier
    pub bridge_id: String,
    pub year_built: Option<i32>,
    /// Ordinal condition code, or -1 when the bridge has no rating
    pub condition_code: i32,
    pub condition_label: ConditionLabel,
    pub observation_year: i32,
    /// Latitude in decimal degrees, as published
    pub lat: f64,
    /// Longitude in decimal degrees, as published
    pub lon: f64,
}

impl BridgeRecord {
    /// Key of the canonical dataset order.
    pub fn canonical_key(&self) -> (i32, i32) {
        (self.observation_year, self.condition_code)
    }
}
