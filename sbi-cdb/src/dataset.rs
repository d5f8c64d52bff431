use crate::condition::ConditionLabel;
use crate::record::BridgeRecord;
use crate::road_class::RoadClass;
use std::sync::Arc;

/// Immutable, canonically ordered bridge collection.
///
/// Cloning is cheap (shared `Arc`) and the collection has no writer after
/// construction, so one instance can be handed to any number of sessions
/// and read from any thread.
#[derive(Debug, Clone)]
pub struct BridgeDataset {
    records: Arc<[BridgeRecord]>,
}

impl BridgeDataset {
    /// Build a dataset from already-normalized records.
    ///
    /// Records are stably sorted by `(observation_year, condition_code)`
    /// ascending, so unrated bridges (code -1) lead each year.
    pub fn from_records(mut records: Vec<BridgeRecord>) -> Self {
        records.sort_by_key(BridgeRecord::canonical_key);
        Self {
            records: records.into(),
        }
    }

    /// All records in canonical order.
    pub fn records(&self) -> &[BridgeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct road classes in order of first appearance.
    pub fn road_classes(&self) -> Vec<RoadClass> {
        let mut seen = Vec::new();
        for record in self.records.iter() {
            if !seen.contains(&record.road_class) {
                seen.push(record.road_class);
            }
        }
        seen
    }

    /// Distinct condition labels in order of first appearance.
    pub fn condition_labels(&self) -> Vec<ConditionLabel> {
        let mut seen = Vec::new();
        for record in self.records.iter() {
            if !seen.contains(&record.condition_label) {
                seen.push(record.condition_label);
            }
        }
        seen
    }

    /// Distinct observation years, ascending.
    pub fn observation_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.records.iter().map(|r| r.observation_year).collect();
        years.dedup();
        years
    }
}
