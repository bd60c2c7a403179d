use crate::core::distance::haversine_distance;
use crate::core::geometry::{circle_area, intersection_area_at_distance};
use crate::models::{GeoError, OverlapReport, PresenceCircle};

/// Default minimum area share for a positive same-entity decision
pub const DEFAULT_OVERLAP_THRESHOLD: f64 = 0.5;

/// Compare two presence circles and decide whether they plausibly belong to
/// the same person
///
/// # Arguments
/// * `first` - First reported presence circle
/// * `second` - Second reported presence circle
/// * `threshold` - Minimum area share, in (0, 1]; see
///   [`DEFAULT_OVERLAP_THRESHOLD`]
///
/// # Returns
/// An [`OverlapReport`] with the intersection area, both area shares, and the
/// decision `min(first_area_share, second_area_share) > threshold`.
///
/// The minimum of the two shares is used rather than a Jaccard-style union
/// ratio so that a very large circle cannot "swallow" a small one: both
/// uncertainty regions must be substantially covered by the overlap.
pub fn evaluate_overlap(
    first: &PresenceCircle,
    second: &PresenceCircle,
    threshold: f64,
) -> Result<OverlapReport, GeoError> {
    if !threshold.is_finite() || threshold <= 0.0 || threshold > 1.0 {
        return Err(GeoError::InvalidThreshold(threshold));
    }
    check_radius(first.radius_km)?;
    check_radius(second.radius_km)?;

    let distance_km = haversine_distance(first.center, second.center);
    let intersection_area =
        intersection_area_at_distance(distance_km, first.radius_km, second.radius_km);

    let first_area_share = intersection_area / circle_area(first.radius_km);
    let second_area_share = intersection_area / circle_area(second.radius_km);
    let same_entity = first_area_share.min(second_area_share) > threshold;

    tracing::debug!(
        distance_km,
        first_area_share,
        second_area_share,
        threshold,
        same_entity,
        "evaluated presence overlap"
    );

    Ok(OverlapReport {
        distance_km,
        intersection_area,
        first_area_share,
        second_area_share,
        same_entity,
    })
}

/// Shorthand for callers who only need the boolean decision
pub fn is_same_entity(
    first: &PresenceCircle,
    second: &PresenceCircle,
    threshold: f64,
) -> Result<bool, GeoError> {
    Ok(evaluate_overlap(first, second, threshold)?.same_entity)
}

fn check_radius(radius_km: f64) -> Result<(), GeoError> {
    if !radius_km.is_finite() || radius_km <= 0.0 {
        return Err(GeoError::InvalidRadius(radius_km));
    }
    Ok(())
}
