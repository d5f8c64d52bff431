use serde::{Deserialize, Serialize};

pub const DEFAULT_ZOOM: f64 = 6.7;
/// Roughly the middle of Slovakia
pub const DEFAULT_CENTER: LatLon = LatLon {
    lat: 48.8,
    lon: 19.7,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// Map camera: zoom level and center coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub zoom: f64,
    pub center: LatLon,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            center: DEFAULT_CENTER,
        }
    }
}

/// A pan/zoom event from the map widget. Either half may be missing, e.g. a
/// pure zoom gesture reports no center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportChange {
    #[serde(default)]
    pub zoom: Option<f64>,
    #[serde(default)]
    pub center: Option<LatLon>,
}

/// Viewport to render with after a filter change.
///
/// A prior viewport is returned untouched. The selection is deliberately not
/// an input: re-filtering never moves the camera.
pub fn resolve(previous: Option<Viewport>) -> Viewport {
    previous.unwrap_or_default()
}

/// Fold a viewport event onto the prior viewport (or the default).
pub fn apply_change(previous: Option<Viewport>, change: ViewportChange) -> Viewport {
    let base = resolve(previous);
    Viewport {
        zoom: change.zoom.unwrap_or(base.zoom),
        center: change.center.unwrap_or(base.center),
    }
}

/// Explicit "reset view".
pub fn reset() -> Viewport {
    Viewport::default()
}
