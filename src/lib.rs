//! Copresence - presence-circle overlap analysis
//!
//! This library decides whether two reported location circles (a center point
//! plus an uncertainty radius) plausibly belong to the same physical person,
//! e.g. one person carrying two phones. It computes the geodesic distance
//! between the circle centers, approximates the circle-circle intersection
//! area in a locally flat plane, and requires that *both* circles have most
//! of their area inside the overlap before declaring a match.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{
    distance::haversine_distance,
    geometry::{circle_area, circle_intersection_area},
    overlap::{evaluate_overlap, is_same_entity, DEFAULT_OVERLAP_THRESHOLD},
};
pub use crate::models::{GeoError, GeoPoint, OverlapReport, PresenceCircle};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let point = GeoPoint::new(40.7128, -74.0060);
        let circle = PresenceCircle::new(point, 1.0).unwrap();
        assert!(circle_area(circle.radius_km) > 3.14);
    }
}
