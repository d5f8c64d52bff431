//! Map payload rendering from flags or from a JSON request file.

use crate::{write_output, SourceArgs};
use anyhow::Context;
use sbi_cdb::condition::ConditionLabel;
use sbi_cdb::road_class::RoadClass;
use sbi_data::selection::FilterSelection;
use sbi_map::controller::{MapRequest, MapResponse, ReactiveController};
use sbi_map::view_state::{self, LatLon, Viewport, ViewportChange};
use std::path::Path;

/// Facets as given on the command line.
///
/// An omitted road class or condition list means the whole domain of the
/// loaded dataset, which is what a fresh dashboard session starts with.
#[derive(Debug, Clone, Default)]
pub struct Facets {
    pub road_classes: Vec<String>,
    pub conditions: Vec<String>,
    pub year: Option<i32>,
    pub zoom: Option<f64>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl Facets {
    pub fn selection(&self, controller: &ReactiveController) -> anyhow::Result<FilterSelection> {
        let domain = controller.initial_selection();
        let road_classes = if self.road_classes.is_empty() {
            domain.road_classes
        } else {
            self.road_classes
                .iter()
                .map(|name| {
                    RoadClass::from_name(name)
                        .with_context(|| format!("Unknown road class '{}'", name))
                })
                .collect::<anyhow::Result<_>>()?
        };
        let condition_labels = if self.conditions.is_empty() {
            domain.condition_labels
        } else {
            self.conditions
                .iter()
                .map(|name| {
                    ConditionLabel::from_name(name)
                        .with_context(|| format!("Unknown condition label '{}'", name))
                })
                .collect::<anyhow::Result<_>>()?
        };
        Ok(FilterSelection {
            road_classes,
            condition_labels,
            year: self.year,
        })
    }

    /// The viewport the caller says the map was left at, if any.
    pub fn prior_viewport(&self) -> Option<Viewport> {
        let center = match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(LatLon { lat, lon }),
            _ => None,
        };
        if self.zoom.is_none() && center.is_none() {
            return None;
        }
        Some(view_state::apply_change(
            None,
            ViewportChange {
                zoom: self.zoom,
                center,
            },
        ))
    }
}

fn serialize(response: &MapResponse, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(response)?
    } else {
        serde_json::to_string(response)?
    };
    Ok(json)
}

/// Render the map payload for the facets given on the command line.
pub fn run_render(
    source: &SourceArgs,
    facets: &Facets,
    output: Option<&Path>,
    pretty: bool,
) -> anyhow::Result<()> {
    let controller = ReactiveController::new(source.load()?);
    let request = MapRequest {
        selection: facets.selection(&controller)?,
        previous_viewport: facets.prior_viewport(),
    };
    let response = controller.respond(&request);
    log::info!(
        "Rendering {} of {} bridges",
        response.match_count,
        controller.dataset().len()
    );
    write_output(&serialize(&response, pretty)?, output)
}

/// Answer a request object read from `request_path`.
pub fn run_respond(
    source: &SourceArgs,
    request_path: &Path,
    output: Option<&Path>,
    pretty: bool,
) -> anyhow::Result<()> {
    let body = std::fs::read_to_string(request_path)
        .with_context(|| format!("Failed to read {}", request_path.display()))?;
    let request: MapRequest = serde_json::from_str(&body)
        .with_context(|| format!("Invalid map request in {}", request_path.display()))?;

    let controller = ReactiveController::new(source.load()?);
    let response = controller.respond(&request);
    log::info!(
        "Responding with {} of {} bridges",
        response.match_count,
        controller.dataset().len()
    );
    write_output(&serialize(&response, pretty)?, output)
}
