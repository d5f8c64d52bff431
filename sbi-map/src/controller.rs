//! The selection reducer.
//!
//! [`ReactiveController`] holds nothing but the shared, immutable dataset.
//! Session state (current selection, last viewport) belongs to the caller and
//! is passed in on every event, so identical inputs always produce an
//! identical payload and one controller can serve any number of sessions.

use crate::render::{compose, RenderPayload};
use crate::view_state::{self, Viewport};
use sbi_cdb::dataset::BridgeDataset;
use sbi_data::filter::{count, filter};
use sbi_data::selection::FilterSelection;
use serde::{Deserialize, Serialize};

/// Request from the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRequest {
    #[serde(flatten)]
    pub selection: FilterSelection,
    /// Absent on the first render of a session
    #[serde(default)]
    pub previous_viewport: Option<Viewport>,
}

/// Response to the rendering surface.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapResponse {
    #[serde(flatten)]
    pub payload: RenderPayload,
    pub match_count: usize,
}

#[derive(Debug, Clone)]
pub struct ReactiveController {
    dataset: BridgeDataset,
}

impl ReactiveController {
    pub fn new(dataset: BridgeDataset) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &BridgeDataset {
        &self.dataset
    }

    /// Selection that shows every bridge; what a new session starts with.
    pub fn initial_selection(&self) -> FilterSelection {
        FilterSelection::full_domain(&self.dataset)
    }

    /// Recompute the map for a new selection, keeping the prior viewport.
    pub fn on_selection_change(
        &self,
        selection: &FilterSelection,
        prior_viewport: Option<Viewport>,
    ) -> RenderPayload {
        let subset = filter(self.dataset.records(), selection);
        compose(&subset, view_state::resolve(prior_viewport))
    }

    /// Number of bridges the selection matches, without building a payload.
    pub fn match_count(&self, selection: &FilterSelection) -> usize {
        count(self.dataset.records(), selection)
    }

    /// Answer a full request: payload plus match count.
    pub fn respond(&self, request: &MapRequest) -> MapResponse {
        let payload = self.on_selection_change(&request.selection, request.previous_viewport);
        let match_count = self.match_count(&request.selection);
        log::debug!(
            "[SBI Debug] controller: {} matches, viewport carried over: {}",
            match_count,
            request.previous_viewport.is_some()
        );
        MapResponse {
            payload,
            match_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::LatLon;
    use sbi_cdb::condition::ConditionLabel;
    use sbi_cdb::record::BridgeRecord;
    use sbi_cdb::road_class::RoadClass;

    fn record(
        bridge_id: &str,
        road_class: RoadClass,
        condition_code: i32,
        condition_label: ConditionLabel,
        observation_year: i32,
    ) -> BridgeRecord {
        BridgeRecord {
            road_class,
            road_number: "I/18".to_string(),
            administrative_id: format!("18-{}", bridge_id),
            bridge_id: bridge_id.to_string(),
            year_built: Some(1988),
            condition_code,
            condition_label,
            observation_year,
            lat: 49.07,
            lon: 19.6,
        }
    }

    fn controller() -> ReactiveController {
        ReactiveController::new(BridgeDataset::from_records(vec![
            record("M1", RoadClass::Highway, 3, ConditionLabel::Good, 2024),
            record("M2", RoadClass::ClassIRoad, -1, ConditionLabel::Unknown, 2024),
            record("M1", RoadClass::Highway, 3, ConditionLabel::Good, 2012),
        ]))
    }

    fn panned() -> Viewport {
        Viewport {
            zoom: 12.5,
            center: LatLon { lat: 49.2, lon: 18.74 },
        }
    }

    #[test]
    fn test_scenario_request() {
        let request = MapRequest {
            selection: FilterSelection::new([RoadClass::Highway], [ConditionLabel::Good], Some(2024)),
            previous_viewport: None,
        };
        let response = controller().respond(&request);
        assert_eq!(response.match_count, 1);
        assert_eq!(response.payload.points.len(), 1);
        assert_eq!(response.payload.points[0].observation_year, 2024);
        assert_eq!(response.payload.points[0].color, "green");
        assert_eq!(response.payload.viewport, Viewport::default());
    }

    #[test]
    fn test_empty_label_set_renders_nothing() {
        let request = MapRequest {
            selection: FilterSelection::new(RoadClass::ALL, Vec::<ConditionLabel>::new(), Some(2024)),
            previous_viewport: Some(panned()),
        };
        let response = controller().respond(&request);
        assert_eq!(response.match_count, 0);
        assert!(response.payload.points.is_empty());
        assert_eq!(response.payload.viewport, panned());
    }

    #[test]
    fn test_refiltering_never_moves_camera() {
        let controller = controller();
        let first = controller.initial_selection();
        let second = FilterSelection::new([RoadClass::ClassIRoad], [ConditionLabel::Unknown], None);
        assert_ne!(first, second);

        let before = controller.on_selection_change(&first, Some(panned()));
        let after = controller.on_selection_change(&second, Some(before.viewport));
        assert_eq!(before.viewport, panned());
        assert_eq!(after.viewport, panned());
        assert_eq!(after.points.len(), 1);
    }

    #[test]
    fn test_count_matches_payload() {
        let controller = controller();
        let selections = [
            controller.initial_selection(),
            controller.initial_selection().for_year(2012),
            FilterSelection::new([RoadClass::LocalRoad], ConditionLabel::ALL, None),
        ];
        for selection in &selections {
            let payload = controller.on_selection_change(selection, None);
            assert_eq!(controller.match_count(selection), payload.points.len());
        }
    }

    #[test]
    fn test_identical_inputs_give_identical_bytes() {
        let controller = controller();
        let request = MapRequest {
            selection: controller.initial_selection(),
            previous_viewport: Some(panned()),
        };
        let a = serde_json::to_string(&controller.respond(&request)).unwrap();
        let b = serde_json::to_string(&controller.respond(&request)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "roadClasses": ["Highway", "ClassIRoad"],
            "conditionLabels": ["Good", "Unknown"],
            "year": 2024,
            "previousViewport": {"zoom": 8.0, "center": {"lat": 48.5, "lon": 19.0}}
        }"#;
        let request: MapRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.selection.year, Some(2024));
        assert_eq!(request.selection.road_classes.len(), 2);
        assert_eq!(request.previous_viewport.map(|v| v.zoom), Some(8.0));

        let response = controller().respond(&request);
        assert_eq!(response.match_count, 2);
    }

    #[test]
    fn test_request_without_year_or_viewport() {
        let json = r#"{"roadClasses": ["Highway"], "conditionLabels": ["Good"]}"#;
        let request: MapRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.selection.year, None);
        assert_eq!(request.previous_viewport, None);
        assert_eq!(controller().respond(&request).match_count, 2);
    }

    #[test]
    fn test_response_wire_names() {
        let controller = controller();
        let request = MapRequest {
            selection: controller.initial_selection(),
            previous_viewport: None,
        };
        let json = serde_json::to_value(controller.respond(&request)).unwrap();
        assert_eq!(json["matchCount"], 3);
        assert!(json["points"].is_array());
        assert!(json["colorByLabel"].is_object());
        assert!(json["viewport"].is_object());
    }

    #[test]
    fn test_controller_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReactiveController>();
    }
}
