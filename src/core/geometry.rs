use crate::core::distance::haversine_distance;
use crate::models::PresenceCircle;

/// Area of a circle with the given radius in km²
///
/// Pure; a non-positive radius yields a zero or meaningless area, which the
/// decision layer guards against before calling in here.
#[inline]
pub fn circle_area(radius_km: f64) -> f64 {
    std::f64::consts::PI * radius_km * radius_km
}

/// Intersection area of two circles whose centers are `d` apart in a plane
///
/// # Arguments
/// * `d` - Distance between the circle centers
/// * `r1` - Radius of the first circle
/// * `r2` - Radius of the second circle
///
/// # Returns
/// Overlap area, in [0, min(circle_area(r1), circle_area(r2))] for positive
/// radii and non-negative distance
///
/// Cases, in order: disjoint (`d >= r1 + r2`) gives zero; containment
/// (`d <= |r1 - r2|`) gives the smaller circle's full area; otherwise the
/// lens is decomposed into two circular segments along the chord through the
/// intersection points.
pub fn intersection_area_at_distance(d: f64, r1: f64, r2: f64) -> f64 {
    if d >= r1 + r2 {
        return 0.0;
    }

    if d <= (r1 - r2).abs() {
        return circle_area(r1.min(r2));
    }

    let r1_sq = r1 * r1;
    let r2_sq = r2 * r2;

    // Split the line of centers at the chord: d1 + d2 = d
    let d1 = (r1_sq - r2_sq + d * d) / (2.0 * d);
    let d2 = d - d1;

    // Clamp the acos arguments and the radicands; floating-point error at
    // the tangency and containment boundaries can push them out of domain.
    let a1 = r1_sq * (d1 / r1).clamp(-1.0, 1.0).acos() - d1 * (r1_sq - d1 * d1).max(0.0).sqrt();
    let a2 = r2_sq * (d2 / r2).clamp(-1.0, 1.0).acos() - d2 * (r2_sq - d2 * d2).max(0.0).sqrt();

    a1 + a2
}

/// Approximate intersection area of two presence circles in km²
///
/// Converts the geodesic center-to-center distance to a planar one and
/// evaluates the flat-plane circle intersection. The approximation is good
/// for small circles; accuracy degrades as radius or separation grows
/// relative to the Earth's radius, or near the poles.
pub fn circle_intersection_area(first: &PresenceCircle, second: &PresenceCircle) -> f64 {
    let d = haversine_distance(first.center, second.center);
    intersection_area_at_distance(d, first.radius_km, second.radius_km)
}
