//! Render payload for the map widget.
//!
//! The payload carries no per-series visibility. Which condition labels are
//! shown is decided upstream by the filter; the legend is informational only.

use crate::view_state::Viewport;
use sbi_cdb::condition::ConditionLabel;
use sbi_cdb::record::BridgeRecord;
use sbi_cdb::road_class::RoadClass;
use serde::Serialize;
use std::collections::BTreeMap;

/// Base map tiles the rendering surface should use
pub const MAP_STYLE: &str = "open-street-map";
pub const MAP_WIDTH: u32 = 1200;
pub const MAP_HEIGHT: u32 = 800;

/// Fixed marker color per condition label (CSS color names).
pub fn condition_color(label: ConditionLabel) -> &'static str {
    match label {
        ConditionLabel::Flawless => "darkgreen",
        ConditionLabel::VeryGood => "darkgreen",
        ConditionLabel::Good => "green",
        ConditionLabel::Satisfactory => "gold",
        ConditionLabel::Bad => "orangered",
        ConditionLabel::VeryBad => "firebrick",
        ConditionLabel::Critical => "black",
        ConditionLabel::Unknown => "gray",
    }
}

/// The whole color table, best label first.
pub fn color_table() -> BTreeMap<ConditionLabel, &'static str> {
    ConditionLabel::ALL
        .into_iter()
        .map(|label| (label, condition_color(label)))
        .collect()
}

/// One map marker with its hover attributes.
///
/// `road_class` and `condition_label` are the canonical names the request
/// contract uses; the `*_text` fields are the Slovak wording shown on hover.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapPoint {
    pub lat: f64,
    pub lon: f64,
    pub bridge_id: String,
    pub road_class: RoadClass,
    pub road_class_text: &'static str,
    pub road_number: String,
    pub year_built: Option<i32>,
    pub condition_code: i32,
    pub condition_label: ConditionLabel,
    pub condition_text: &'static str,
    pub observation_year: i32,
    pub color: &'static str,
}

impl From<&BridgeRecord> for MapPoint {
    fn from(record: &BridgeRecord) -> Self {
        Self {
            lat: record.lat,
            lon: record.lon,
            bridge_id: record.bridge_id.clone(),
            road_class: record.road_class,
            road_class_text: record.road_class.display_name(),
            road_number: record.road_number.clone(),
            year_built: record.year_built,
            condition_code: record.condition_code,
            condition_label: record.condition_label,
            condition_text: record.condition_label.display_name(),
            observation_year: record.observation_year,
            color: condition_color(record.condition_label),
        }
    }
}

/// Everything the map widget needs for one render.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderPayload {
    /// Markers in canonical dataset order (which is also hover order)
    pub points: Vec<MapPoint>,
    pub color_by_label: BTreeMap<ConditionLabel, &'static str>,
    pub viewport: Viewport,
    pub map_style: &'static str,
    pub width: u32,
    pub height: u32,
}

/// Combine a filtered subset with the viewport to render at.
pub fn compose(subset: &[&BridgeRecord], viewport: Viewport) -> RenderPayload {
    let points: Vec<MapPoint> = subset.iter().map(|record| MapPoint::from(*record)).collect();
    log::debug!(
        "[SBI Debug] render: {} points at zoom {}",
        points.len(),
        viewport.zoom
    );
    RenderPayload {
        points,
        color_by_label: color_table(),
        viewport,
        map_style: MAP_STYLE,
        width: MAP_WIDTH,
        height: MAP_HEIGHT,
    }
}
