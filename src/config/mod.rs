use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::geometry::LatLon;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPathError {
    #[error("neither $XDG_CONFIG_HOME nor $HOME is set")]
    MissingHomeDirectory,
}

const APP_DIR: &str = "mapmark";
const APP_CONFIG_FILE: &str = "config.json";

const DEFAULT_INITIAL_LAT: f64 = 51.505;
const DEFAULT_INITIAL_LON: f64 = -0.09;
const DEFAULT_INITIAL_ZOOM: u8 = 13;

/// Application-level settings from `config.json`: the initial viewport
/// center and zoom, which also place the seed marker.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_initial_lat")]
    pub initial_lat: f64,
    #[serde(default = "default_initial_lon")]
    pub initial_lon: f64,
    #[serde(default = "default_initial_zoom")]
    pub initial_zoom: u8,
}

fn default_initial_lat() -> f64 {
    DEFAULT_INITIAL_LAT
}

fn default_initial_lon() -> f64 {
    DEFAULT_INITIAL_LON
}

fn default_initial_zoom() -> u8 {
    DEFAULT_INITIAL_ZOOM
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_lat: DEFAULT_INITIAL_LAT,
            initial_lon: DEFAULT_INITIAL_LON,
            initial_zoom: DEFAULT_INITIAL_ZOOM,
        }
    }
}

impl AppConfig {
    pub fn initial_center(&self) -> LatLon {
        LatLon::new(self.initial_lat, self.initial_lon)
    }
}

pub fn load_app_config() -> AppConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_app_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_app_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> AppConfig {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return AppConfig::default(),
    };
    if !path.exists() {
        return AppConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
            AppConfig::default()
        }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            AppConfig::default()
        }
    }
}

fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_path_prefers_xdg_config_home() {
        let path = app_config_path(
            "mapmark",
            "config.json",
            Some(Path::new("/tmp/config-root")),
            Some(Path::new("/tmp/home")),
        )
        .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/config-root/mapmark/config.json"));
    }

    #[test]
    fn app_config_path_falls_back_to_home_dot_config() {
        let path = app_config_path("mapmark", "config.json", None, Some(Path::new("/tmp/home")))
            .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/home/.config/mapmark/config.json"));
    }

    #[test]
    fn app_config_path_errors_when_home_missing_and_xdg_unset() {
        let error = app_config_path("mapmark", "config.json", None, None).unwrap_err();
        assert_eq!(error, ConfigPathError::MissingHomeDirectory);
    }

    #[test]
    fn defaults_match_the_stock_london_viewport() {
        let config = AppConfig::default();
        assert_eq!(config.initial_center(), LatLon::new(51.505, -0.09));
        assert_eq!(config.initial_zoom, 13);
    }

    #[test]
    fn partial_config_json_fills_missing_fields_with_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"initial_zoom": 5}"#).expect("partial config should parse");
        assert_eq!(config.initial_zoom, 5);
        assert_eq!(config.initial_lat, 51.505);
        assert_eq!(config.initial_lon, -0.09);
    }

    #[test]
    fn missing_config_file_yields_defaults() {
        let config = load_app_config_with(Some(Path::new("/nonexistent-config-root")), None);
        assert_eq!(config, AppConfig::default());
    }
}
