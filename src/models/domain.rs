use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// Errors produced when malformed input reaches the overlap pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("radius must be positive, got {0} km")]
    InvalidRadius(f64),

    #[error("coordinate out of range: latitude {latitude}, longitude {longitude}")]
    OutOfRangeCoordinate { latitude: f64, longitude: f64 },

    #[error("overlap threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),
}

/// A point on the Earth's surface in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct GeoPoint {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check that both coordinates are finite and within geographic range
    pub fn check(&self) -> Result<(), GeoError> {
        let lat_ok = self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude);
        let lon_ok = self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude);
        if lat_ok && lon_ok {
            Ok(())
        } else {
            Err(GeoError::OutOfRangeCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

/// One device's reported location plus its uncertainty radius at one moment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct PresenceCircle {
    #[validate(nested)]
    pub center: GeoPoint,
    #[serde(rename = "radiusKm")]
    #[validate(range(exclusive_min = 0.0))]
    pub radius_km: f64,
}

impl PresenceCircle {
    /// Construct a presence circle, rejecting degenerate input up front
    ///
    /// The core geometry functions assume `radius_km > 0` and in-range
    /// coordinates; a zero radius would later divide the intersection area
    /// by a zero circle area. Fail fast here instead.
    pub fn new(center: GeoPoint, radius_km: f64) -> Result<Self, GeoError> {
        center.check()?;
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(GeoError::InvalidRadius(radius_km));
        }
        Ok(Self { center, radius_km })
    }
}

/// Result of comparing two presence circles
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OverlapReport {
    /// Distance between the circle centers in kilometers
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    /// Approximate overlap area in km²
    #[serde(rename = "intersectionArea")]
    pub intersection_area: f64,
    /// Fraction of the first circle's area inside the overlap
    #[serde(rename = "firstAreaShare")]
    pub first_area_share: f64,
    /// Fraction of the second circle's area inside the overlap
    #[serde(rename = "secondAreaShare")]
    pub second_area_share: f64,
    /// True when both shares exceed the decision threshold
    #[serde(rename = "sameEntity")]
    pub same_entity: bool,
}
