use crate::geometry::LatLon;

const VIEWPORT_ZOOM_MIN: u8 = 0;
const VIEWPORT_ZOOM_MAX: u8 = 19;

fn clamp_zoom(zoom: u8) -> u8 {
    zoom.clamp(VIEWPORT_ZOOM_MIN, VIEWPORT_ZOOM_MAX)
}

/// Camera over the map surface. Re-centering is a viewport operation only
/// and never creates or moves markers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    center: LatLon,
    zoom: u8,
}

impl MapViewport {
    pub fn new(center: LatLon, zoom: u8) -> Self {
        Self {
            center,
            zoom: clamp_zoom(zoom),
        }
    }

    pub const fn center(&self) -> LatLon {
        self.center
    }

    pub const fn zoom(&self) -> u8 {
        self.zoom
    }

    pub const fn min_zoom() -> u8 {
        VIEWPORT_ZOOM_MIN
    }

    pub const fn max_zoom() -> u8 {
        VIEWPORT_ZOOM_MAX
    }

    pub fn recenter(&mut self, center: LatLon) {
        self.center = center;
    }

    pub fn zoom_in(&mut self) {
        self.zoom = clamp_zoom(self.zoom.saturating_add(1));
    }

    pub fn zoom_out(&mut self) {
        self.zoom = clamp_zoom(self.zoom.saturating_sub(1));
    }

    pub fn set_zoom(&mut self, zoom: u8) {
        self.zoom = clamp_zoom(zoom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_clamps_zoom_at_construction_and_on_change() {
        let mut viewport = MapViewport::new(LatLon::new(51.505, -0.09), 42);
        assert_eq!(viewport.zoom(), MapViewport::max_zoom());

        viewport.set_zoom(13);
        assert_eq!(viewport.zoom(), 13);

        for _ in 0..40 {
            viewport.zoom_out();
        }
        assert_eq!(viewport.zoom(), MapViewport::min_zoom());

        for _ in 0..40 {
            viewport.zoom_in();
        }
        assert_eq!(viewport.zoom(), MapViewport::max_zoom());
    }

    #[test]
    fn recenter_replaces_the_center_only() {
        let mut viewport = MapViewport::new(LatLon::new(51.505, -0.09), 13);
        viewport.recenter(LatLon::new(48.8566, 2.3522));
        assert_eq!(viewport.center(), LatLon::new(48.8566, 2.3522));
        assert_eq!(viewport.zoom(), 13);
    }
}
