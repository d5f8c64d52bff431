//! Facet filtering and tallies over the bridge inventory.
//!
//! This crate answers "which bridges does the user currently see": given a
//! [`selection::FilterSelection`] it returns the matching records in the
//! dataset's canonical order, plus derived counts.

/// The user's chosen facets
pub mod selection {
    use sbi_cdb::condition::ConditionLabel;
    use sbi_cdb::dataset::BridgeDataset;
    use sbi_cdb::record::BridgeRecord;
    use sbi_cdb::road_class::RoadClass;
    use serde::{Deserialize, Serialize};
    use std::collections::BTreeSet;

    /// Road classes, condition labels and an optional observation year.
    ///
    /// An empty set matches nothing. Callers that want "everything" must
    /// start from [`FilterSelection::full_domain`].
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct FilterSelection {
        pub road_classes: BTreeSet<RoadClass>,
        pub condition_labels: BTreeSet<ConditionLabel>,
        /// `None` matches every observation year
        #[serde(default)]
        pub year: Option<i32>,
    }

    impl FilterSelection {
        pub fn new(
            road_classes: impl IntoIterator<Item = RoadClass>,
            condition_labels: impl IntoIterator<Item = ConditionLabel>,
            year: Option<i32>,
        ) -> Self {
            Self {
                road_classes: road_classes.into_iter().collect(),
                condition_labels: condition_labels.into_iter().collect(),
                year,
            }
        }

        /// Selection matching every record of `dataset`.
        pub fn full_domain(dataset: &BridgeDataset) -> Self {
            Self::new(dataset.road_classes(), dataset.condition_labels(), None)
        }

        /// Same facets, restricted to one observation year.
        pub fn for_year(self, year: i32) -> Self {
            Self {
                year: Some(year),
                ..self
            }
        }

        /// The three-way predicate: label AND class AND (no year OR same year).
        pub fn matches(&self, record: &BridgeRecord) -> bool {
            self.condition_labels.contains(&record.condition_label)
                && self.road_classes.contains(&record.road_class)
                && self.year.map_or(true, |y| record.observation_year == y)
        }

        /// True when no record can possibly match.
        pub fn is_empty(&self) -> bool {
            self.road_classes.is_empty() || self.condition_labels.is_empty()
        }
    }
}

/// Linear-scan filtering in canonical order
///
/// A scan over the full collection is fast enough for the national
/// inventory (tens of thousands of records). A deployment serving much
/// larger collections would index by `(road_class, condition_label,
/// observation_year)` and merge the posting lists back in canonical order.
pub mod filter {
    use crate::selection::FilterSelection;
    use sbi_cdb::record::BridgeRecord;

    /// Records matching `selection`, in the order they appear in `records`.
    pub fn filter<'a>(
        records: &'a [BridgeRecord],
        selection: &FilterSelection,
    ) -> Vec<&'a BridgeRecord> {
        if selection.is_empty() {
            log::debug!("[SBI Debug] filter: empty facet set, nothing matches");
            return Vec::new();
        }
        let subset: Vec<&BridgeRecord> = records.iter().filter(|r| selection.matches(r)).collect();
        log::debug!(
            "[SBI Debug] filter: {} of {} records match",
            subset.len(),
            records.len()
        );
        subset
    }

    /// Number of records matching `selection`.
    ///
    /// Always equal to `filter(records, selection).len()`, computed without
    /// collecting the subset.
    pub fn count(records: &[BridgeRecord], selection: &FilterSelection) -> usize {
        records.iter().filter(|r| selection.matches(r)).count()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::fixtures::{record, scenario_dataset};
        use sbi_cdb::condition::ConditionLabel;
        use sbi_cdb::dataset::BridgeDataset;
        use sbi_cdb::road_class::RoadClass;

        #[test]
        fn test_scenario_selection() {
            let dataset = scenario_dataset();
            let selection = FilterSelection::new(
                [RoadClass::Highway],
                [ConditionLabel::Good],
                Some(2024),
            );
            let subset = filter(dataset.records(), &selection);
            assert_eq!(subset.len(), 1);
            assert_eq!(subset[0].road_class, RoadClass::Highway);
            assert_eq!(subset[0].condition_label, ConditionLabel::Good);
            assert_eq!(subset[0].observation_year, 2024);
            assert_eq!(count(dataset.records(), &selection), 1);
        }

        #[test]
        fn test_empty_label_set_matches_nothing() {
            let dataset = scenario_dataset();
            let selection = FilterSelection::new(RoadClass::ALL, Vec::<ConditionLabel>::new(), None);
            assert!(filter(dataset.records(), &selection).is_empty());
            assert_eq!(count(dataset.records(), &selection), 0);
        }

        #[test]
        fn test_empty_road_class_set_matches_nothing() {
            let dataset = scenario_dataset();
            let selection = FilterSelection::new(Vec::<RoadClass>::new(), ConditionLabel::ALL, Some(2024));
            assert!(filter(dataset.records(), &selection).is_empty());
        }

        #[test]
        fn test_full_domain_returns_everything_in_order() {
            let dataset = scenario_dataset();
            let selection = FilterSelection::full_domain(&dataset);
            let subset = filter(dataset.records(), &selection);
            let expected: Vec<&_> = dataset.records().iter().collect();
            assert_eq!(subset, expected);
        }

        #[test]
        fn test_year_absent_matches_all_years() {
            let dataset = scenario_dataset();
            let selection =
                FilterSelection::new([RoadClass::Highway], [ConditionLabel::Good], None);
            let years: Vec<i32> = filter(dataset.records(), &selection)
                .iter()
                .map(|r| r.observation_year)
                .collect();
            assert_eq!(years, vec![2012, 2024]);
        }

        #[test]
        fn test_year_without_records_matches_nothing() {
            let dataset = scenario_dataset();
            let selection = FilterSelection::full_domain(&dataset).for_year(1999);
            assert!(filter(dataset.records(), &selection).is_empty());
        }

        #[test]
        fn test_filter_agrees_with_predicate() {
            let dataset = BridgeDataset::from_records(vec![
                record("M1", RoadClass::Highway, ConditionLabel::Good, 2024),
                record("M2", RoadClass::ClassIIRoad, ConditionLabel::Bad, 2024),
                record("M3", RoadClass::ClassIIRoad, ConditionLabel::Critical, 2012),
                record("M4", RoadClass::LocalRoad, ConditionLabel::Unknown, 2012),
                record("M5", RoadClass::ClassIIIRoad, ConditionLabel::Satisfactory, 2024),
            ]);
            let selections = [
                FilterSelection::new(
                    [RoadClass::ClassIIRoad, RoadClass::LocalRoad],
                    ConditionLabel::ALL,
                    None,
                ),
                FilterSelection::new(
                    RoadClass::ALL,
                    [ConditionLabel::Bad, ConditionLabel::Critical],
                    Some(2012),
                ),
                FilterSelection::new([RoadClass::Highway], [ConditionLabel::Unknown], None),
            ];
            for selection in &selections {
                let subset = filter(dataset.records(), selection);
                let expected: Vec<&_> = dataset
                    .records()
                    .iter()
                    .filter(|r| {
                        selection.condition_labels.contains(&r.condition_label)
                            && selection.road_classes.contains(&r.road_class)
                            && selection.year.map_or(true, |y| y == r.observation_year)
                    })
                    .collect();
                assert_eq!(subset, expected);
                assert_eq!(count(dataset.records(), selection), subset.len());
            }
        }
    }
}

/// Per-label tallies of a filtered subset
pub mod breakdown {
    use sbi_cdb::condition::ConditionLabel;
    use sbi_cdb::record::BridgeRecord;
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Debug, Clone, Serialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct ConditionTally {
        pub condition_label: ConditionLabel,
        pub count: usize,
        /// Fraction of the subset, 0.0 to 1.0
        pub share: f64,
    }

    /// Count `subset` per condition label, best label first. Labels with no
    /// records are omitted.
    pub fn breakdown(subset: &[&BridgeRecord]) -> Vec<ConditionTally> {
        let mut counts: BTreeMap<ConditionLabel, usize> = BTreeMap::new();
        for record in subset {
            *counts.entry(record.condition_label).or_insert(0) += 1;
        }
        let total = subset.len() as f64;
        counts
            .into_iter()
            .map(|(condition_label, count)| ConditionTally {
                condition_label,
                count,
                share: count as f64 / total,
            })
            .collect()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::fixtures::scenario_dataset;

        #[test]
        fn test_breakdown() {
            let dataset = scenario_dataset();
            let subset: Vec<&BridgeRecord> = dataset.records().iter().collect();
            let tallies = breakdown(&subset);
            assert_eq!(tallies.len(), 2);
            assert_eq!(tallies[0].condition_label, ConditionLabel::Good);
            assert_eq!(tallies[0].count, 2);
            assert_eq!(tallies[1].condition_label, ConditionLabel::Unknown);
            assert_eq!(tallies[1].count, 1);
            assert!((tallies[1].share - 1.0 / 3.0).abs() < 1e-12);
        }

        #[test]
        fn test_breakdown_of_empty_subset() {
            assert!(breakdown(&[]).is_empty());
        }
    }
}
