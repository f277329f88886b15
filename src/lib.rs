pub mod annotations;
pub mod config;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod map;
pub mod markers;
pub mod measure;
pub mod selection;

pub use error::{AppError, AppResult};
pub use map::{MapEffect, MapSession, MapSnapshot, PointerEvent};

/// Entrypoint used by hosting shells and renderer integrations: installs
/// logging, loads the user config, and returns a ready map session with
/// the seed marker placed at the configured center.
pub fn start_session() -> MapSession {
    logging::init();
    let config = config::load_app_config();
    tracing::info!(
        lat = config.initial_lat,
        lon = config.initial_lon,
        zoom = config.initial_zoom,
        "starting map session"
    );

    MapSession::new(config.initial_center(), config.initial_zoom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_session_seeds_one_marker_at_the_configured_center() {
        let session = start_session();
        assert_eq!(session.markers().len(), 1);
        let seed = session.markers().get(0).expect("seed marker should exist");
        assert_eq!(seed.position, session.viewport().center());
    }
}
