/// Shared geographic primitives used across map and annotation modules.
use serde::Serialize;
use thiserror::Error;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub const LATITUDE_RANGE_DEG: std::ops::RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE_RANGE_DEG: std::ops::RangeInclusive<f64> = -180.0..=180.0;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CoordinateError {
    #[error("latitude {0} is not a finite number")]
    NonFiniteLatitude(f64),
    #[error("longitude {0} is not a finite number")]
    NonFiniteLongitude(f64),
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// A latitude/longitude pair in degrees.
///
/// Exact value equality on `LatLon` is load-bearing: distance-line cleanup
/// matches endpoints against a deleted marker's last position bit-for-bit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Checked constructor for coordinates that cross the crate boundary,
    /// e.g. a `recenter` directive from the search collaborator.
    pub fn validated(lat: f64, lon: f64) -> Result<Self, CoordinateError> {
        if !lat.is_finite() {
            return Err(CoordinateError::NonFiniteLatitude(lat));
        }
        if !lon.is_finite() {
            return Err(CoordinateError::NonFiniteLongitude(lon));
        }
        if !LATITUDE_RANGE_DEG.contains(&lat) {
            return Err(CoordinateError::LatitudeOutOfRange(lat));
        }
        if !LONGITUDE_RANGE_DEG.contains(&lon) {
            return Err(CoordinateError::LongitudeOutOfRange(lon));
        }
        Ok(Self { lat, lon })
    }

    pub fn midpoint(self, other: Self) -> Self {
        Self {
            lat: (self.lat + other.lat) / 2.0,
            lon: (self.lon + other.lon) / 2.0,
        }
    }
}

/// Haversine great-circle distance in kilometers.
///
/// Total over finite inputs and symmetric up to floating-point rounding.
/// Identical points yield exactly 0.
pub fn distance_km(from: LatLon, to: LatLon) -> f64 {
    if from == to {
        return 0.0;
    }

    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lon = (to.lon - from.lon).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
