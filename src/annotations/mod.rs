//! Derived distance annotations connecting two snapshotted positions.

use crate::geometry::LatLon;

/// A measured-distance annotation between two positions.
///
/// Endpoints are captured by value when the measurement completes and are
/// never updated afterwards: dragging a source marker leaves an existing
/// line where it was drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceLine {
    pub from: LatLon,
    pub to: LatLon,
    pub distance_km: f64,
}

impl DistanceLine {
    /// Renderer-facing text, e.g. `"111.19 km"`.
    pub fn label(&self) -> String {
        format!("{:.2} km", self.distance_km)
    }

    /// Anchor point for placing the distance label.
    pub fn midpoint(&self) -> LatLon {
        self.from.midpoint(self.to)
    }

    fn touches(&self, position: LatLon) -> bool {
        self.from == position || self.to == position
    }
}

/// Append-only set of distance lines, pruned only when a source marker is
/// deleted. Measuring the same pair twice yields two coexisting lines.
#[derive(Debug, Default)]
pub struct DistanceLineStore {
    lines: Vec<DistanceLine>,
}

impl DistanceLineStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, from: LatLon, to: LatLon, distance_km: f64) {
        tracing::debug!(distance_km, "add distance line");
        self.lines.push(DistanceLine {
            from,
            to,
            distance_km,
        });
    }

    /// Removes every line with an endpoint exactly equal to `position` and
    /// returns how many were dropped. Called once per marker deletion with
    /// the deleted marker's last known position.
    pub fn remove_lines_touching(&mut self, position: LatLon) -> usize {
        let before = self.lines.len();
        self.lines.retain(|line| !line.touches(position));
        let removed = before - self.lines.len();
        if removed > 0 {
            tracing::debug!(
                removed,
                lat = position.lat,
                lon = position.lon,
                "remove distance lines touching deleted marker"
            );
        }
        removed
    }

    pub fn lines(&self) -> &[DistanceLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_keeps_duplicate_measurements() {
        let mut store = DistanceLineStore::new();
        let from = LatLon::new(10.0, 10.0);
        let to = LatLon::new(10.0, 11.0);
        store.add(from, to, 109.5);
        store.add(from, to, 109.5);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn remove_lines_touching_matches_either_endpoint_exactly() {
        let mut store = DistanceLineStore::new();
        let shared = LatLon::new(10.0, 10.0);
        store.add(shared, LatLon::new(10.0, 11.0), 109.5);
        store.add(LatLon::new(20.0, 20.0), shared, 1500.0);
        store.add(LatLon::new(30.0, 30.0), LatLon::new(31.0, 31.0), 145.0);

        let removed = store.remove_lines_touching(shared);
        assert_eq!(removed, 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.lines()[0].from, LatLon::new(30.0, 30.0));
    }

    #[test]
    fn remove_lines_touching_ignores_near_but_unequal_positions() {
        let mut store = DistanceLineStore::new();
        store.add(LatLon::new(10.0, 10.0), LatLon::new(10.0, 11.0), 109.5);
        let removed = store.remove_lines_touching(LatLon::new(10.0, 10.000001));
        assert_eq!(removed, 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn label_formats_two_decimal_places_with_unit() {
        let line = DistanceLine {
            from: LatLon::new(0.0, 0.0),
            to: LatLon::new(0.0, 1.0),
            distance_km: 111.19492664455873,
        };
        assert_eq!(line.label(), "111.19 km");
    }

    #[test]
    fn midpoint_sits_between_endpoints() {
        let line = DistanceLine {
            from: LatLon::new(10.0, 10.0),
            to: LatLon::new(10.0, 11.0),
            distance_km: 109.5,
        };
        assert_eq!(line.midpoint(), LatLon::new(10.0, 10.5));
    }
}
