//! Read-only render snapshot handed to the hosting renderer after every
//! mutation.

use serde::Serialize;

use crate::annotations::DistanceLine;
use crate::geometry::LatLon;
use crate::markers::{Marker, MarkerId};

pub const OPACITY_SELECTED: f32 = 0.6;
pub const OPACITY_PENDING_MEASURE: f32 = 0.7;
pub const OPACITY_DEFAULT: f32 = 1.0;

/// Selection and pending-first-pick can hold on the same marker at the
/// same time; selection wins the opacity slot while both flags stay
/// visible to the renderer.
pub(crate) fn marker_opacity(selected: bool, pending_measure: bool) -> f32 {
    if selected {
        OPACITY_SELECTED
    } else if pending_measure {
        OPACITY_PENDING_MEASURE
    } else {
        OPACITY_DEFAULT
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerView {
    pub id: MarkerId,
    pub position: LatLon,
    pub label: String,
    /// Popup text, latitude and longitude to four decimal places.
    pub coordinates_label: String,
    pub opacity: f32,
    pub selected: bool,
    pub pending_measure: bool,
}

impl MarkerView {
    pub(crate) fn from_marker(marker: &Marker, selected: bool, pending_measure: bool) -> Self {
        Self {
            id: marker.id,
            position: marker.position,
            label: marker.label.clone(),
            coordinates_label: format!("{:.4}, {:.4}", marker.position.lat, marker.position.lon),
            opacity: marker_opacity(selected, pending_measure),
            selected,
            pending_measure,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceLineView {
    pub from: LatLon,
    pub to: LatLon,
    pub distance_km: f64,
    /// Formatted distance, e.g. `"111.19 km"`.
    pub label: String,
    /// Anchor for placing the distance label.
    pub midpoint: LatLon,
}

impl DistanceLineView {
    pub(crate) fn from_line(line: &DistanceLine) -> Self {
        Self {
            from: line.from,
            to: line.to,
            distance_km: line.distance_km,
            label: line.label(),
            midpoint: line.midpoint(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapSnapshot {
    pub center: LatLon,
    pub zoom: u8,
    pub markers: Vec<MarkerView>,
    pub lines: Vec<DistanceLineView>,
    pub selected: Option<MarkerId>,
    pub pending_measure: Option<MarkerId>,
    /// Label of the most recent recenter directive, if any.
    pub recenter_label: Option<String>,
}
