//! Map session wiring: pointer-event routing, viewport, and render
//! snapshots.

pub mod snapshot;
pub mod viewport;

use crate::annotations::DistanceLineStore;
use crate::error::AppResult;
use crate::geometry::{self, LatLon};
use crate::markers::{MarkerId, MarkerStore};
use crate::measure::{MeasureMachine, MeasureState, MeasureTransition};
use crate::selection::SelectionController;

pub use snapshot::{DistanceLineView, MapSnapshot, MarkerView};
pub use viewport::MapViewport;

/// Raw pointer events delivered by the hosting mapping collaborator.
///
/// Marker-level and map-surface events are distinct variants, so a click
/// on a marker can never additionally register as a click on the surface
/// beneath it; the host must deliver exactly one event per gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    MapClick { position: LatLon },
    MarkerClick { id: MarkerId },
    MarkerContextClick { id: MarkerId },
    MarkerDoubleClick { id: MarkerId },
    MarkerDragEnd { id: MarkerId, position: LatLon },
}

/// What a dispatched pointer event did, reported back to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapEffect {
    MarkerCreated { id: MarkerId },
    SelectionChanged { selected: Option<MarkerId> },
    MeasureArmed { first: MarkerId },
    MeasureCancelled,
    LineAdded { from: LatLon, to: LatLon, distance_km: f64 },
    MarkerRemoved { id: MarkerId, lines_removed: usize },
    MarkerMoved { id: MarkerId },
    /// Defensive no-op path, e.g. an event for an already-removed marker.
    Ignored,
}

/// Owns all interaction state for one map: markers, derived distance
/// lines, selection, the measurement machine, and the viewport.
///
/// All mutation happens synchronously inside `dispatch` and `recenter`;
/// the hosting event loop runs one handler at a time.
#[derive(Debug)]
pub struct MapSession {
    viewport: MapViewport,
    markers: MarkerStore,
    lines: DistanceLineStore,
    selection: SelectionController,
    measure: MeasureMachine,
    recenter_label: Option<String>,
}

impl MapSession {
    /// Starts a session with the seed marker at `center`.
    pub fn new(center: LatLon, zoom: u8) -> Self {
        Self {
            viewport: MapViewport::new(center, zoom),
            markers: MarkerStore::new(center),
            lines: DistanceLineStore::new(),
            selection: SelectionController::new(),
            measure: MeasureMachine::new(),
            recenter_label: None,
        }
    }

    /// Routes one pointer event to the owning controller and returns the
    /// resulting effect.
    pub fn dispatch(&mut self, event: PointerEvent) -> MapEffect {
        match event {
            PointerEvent::MapClick { position } => {
                let id = self.markers.create(position);
                MapEffect::MarkerCreated { id }
            }
            PointerEvent::MarkerClick { id } => MapEffect::SelectionChanged {
                selected: self.selection.toggle(id),
            },
            PointerEvent::MarkerContextClick { id } => self.dispatch_context_click(id),
            PointerEvent::MarkerDoubleClick { id } => self.dispatch_double_click(id),
            PointerEvent::MarkerDragEnd { id, position } => {
                if self.markers.contains(id) {
                    // Lines keep their snapshotted endpoints; only the
                    // marker moves.
                    self.markers.update_position(id, position);
                    MapEffect::MarkerMoved { id }
                } else {
                    tracing::warn!(id, "drag end for absent marker ignored");
                    MapEffect::Ignored
                }
            }
        }
    }

    fn dispatch_context_click(&mut self, id: MarkerId) -> MapEffect {
        match self.measure.right_click(id) {
            MeasureTransition::Armed { first } => MapEffect::MeasureArmed { first },
            MeasureTransition::Cancelled { .. } => MapEffect::MeasureCancelled,
            MeasureTransition::Completed { first, second } => {
                match (self.markers.get(first), self.markers.get(second)) {
                    (Some(a), Some(b)) => {
                        let (from, to) = (a.position, b.position);
                        let distance_km = geometry::distance_km(from, to);
                        self.lines.add(from, to, distance_km);
                        MapEffect::LineAdded {
                            from,
                            to,
                            distance_km,
                        }
                    }
                    _ => {
                        // A marker vanished mid-interaction; the pair
                        // silently dissolves.
                        tracing::warn!(first, second, "measurement pair no longer resolvable");
                        MapEffect::Ignored
                    }
                }
            }
        }
    }

    fn dispatch_double_click(&mut self, id: MarkerId) -> MapEffect {
        match self.markers.delete(id) {
            Some(position) => {
                let lines_removed = self.lines.remove_lines_touching(position);
                self.selection.clear_if_equals(id);
                self.measure.marker_deleted(id);
                MapEffect::MarkerRemoved { id, lines_removed }
            }
            None => {
                tracing::warn!(id, "double click for absent marker ignored");
                MapEffect::Ignored
            }
        }
    }

    /// Directive from the search collaborator after its async lookup has
    /// resolved. Re-centers the viewport; never creates or moves markers.
    pub fn recenter(&mut self, lat: f64, lon: f64, label: &str) -> AppResult<()> {
        let center = LatLon::validated(lat, lon)?;
        tracing::info!(lat, lon, label, "recenter viewport");
        self.viewport.recenter(center);
        self.recenter_label = Some(label.to_string());
        Ok(())
    }

    pub fn viewport(&self) -> &MapViewport {
        &self.viewport
    }

    pub fn markers(&self) -> &MarkerStore {
        &self.markers
    }

    pub fn lines(&self) -> &DistanceLineStore {
        &self.lines
    }

    pub fn selected(&self) -> Option<MarkerId> {
        self.selection.selected()
    }

    pub fn measure_state(&self) -> MeasureState {
        self.measure.state()
    }

    /// Read-only view for the renderer, rebuilt after every mutation.
    pub fn snapshot(&self) -> MapSnapshot {
        let selected = self.selection.selected();
        let pending = self.measure.pending_first();
        MapSnapshot {
            center: self.viewport.center(),
            zoom: self.viewport.zoom(),
            markers: self
                .markers
                .markers()
                .iter()
                .map(|marker| {
                    MarkerView::from_marker(
                        marker,
                        selected == Some(marker.id),
                        pending == Some(marker.id),
                    )
                })
                .collect(),
            lines: self
                .lines
                .lines()
                .iter()
                .map(DistanceLineView::from_line)
                .collect(),
            selected,
            pending_measure: pending,
            recenter_label: self.recenter_label.clone(),
        }
    }
}
