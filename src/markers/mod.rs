//! Authoritative marker collection with stable, session-unique identities.

use crate::geometry::LatLon;

pub type MarkerId = u64;

/// Id of the seed marker placed at the initial map center.
pub const SEED_MARKER_ID: MarkerId = 0;

const SEED_MARKER_LABEL: &str = "Initial marker";

/// A user-placed point annotation on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: MarkerId,
    pub position: LatLon,
    pub label: String,
}

/// Owns every live marker. Collection order is insertion order, kept only
/// for render determinism.
///
/// Selection and measurement hold `MarkerId`s, never marker copies, so a
/// drag can never leave them observing stale positions.
#[derive(Debug)]
pub struct MarkerStore {
    markers: Vec<Marker>,
    next_id: MarkerId,
}

impl MarkerStore {
    /// Creates the store with the seed marker (id 0) at `center`.
    pub fn new(center: LatLon) -> Self {
        Self {
            markers: vec![Marker {
                id: SEED_MARKER_ID,
                position: center,
                label: SEED_MARKER_LABEL.to_string(),
            }],
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> MarkerId {
        let id = self.next_id;
        // Monotonic for the whole session; never reset, never reused.
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    pub fn create(&mut self, position: LatLon) -> MarkerId {
        let id = self.allocate_id();
        tracing::debug!(id, lat = position.lat, lon = position.lon, "create marker");
        self.markers.push(Marker {
            id,
            position,
            label: format!("Marker {id}"),
        });
        id
    }

    /// Replaces the position of marker `id`. Silent no-op when the id is
    /// absent; an absent id here means the hosting framework delivered an
    /// event for a marker already removed, which must not crash the loop.
    pub fn update_position(&mut self, id: MarkerId, position: LatLon) {
        match self.markers.iter_mut().find(|marker| marker.id == id) {
            Some(marker) => marker.position = position,
            None => {
                tracing::warn!(id, "position update for absent marker ignored");
            }
        }
    }

    /// Removes marker `id`, returning its last position so callers can
    /// cascade cleanup of derived annotations and controller state.
    pub fn delete(&mut self, id: MarkerId) -> Option<LatLon> {
        let index = self.markers.iter().position(|marker| marker.id == id)?;
        let removed = self.markers.remove(index);
        tracing::debug!(id, "delete marker");
        Some(removed.position)
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.id == id)
    }

    pub fn contains(&self, id: MarkerId) -> bool {
        self.get(id).is_some()
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
