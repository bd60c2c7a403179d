use geo::{Area, BooleanOps, Centroid, Coord, EuclideanDistance, LineString, Polygon};

use crate::models::{GeoError, OverlapReport};

/// Approximate a disk with a regular polygon
///
/// # Arguments
/// * `center` - Disk center in the caller's projected coordinates
/// * `radius` - Disk radius in the same units
/// * `segments` - Number of polygon vertices; 64 is plenty for area work
pub fn circle_polygon(center: Coord<f64>, radius: f64, segments: usize) -> Polygon<f64> {
    let ring: Vec<Coord<f64>> = (0..segments)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * (i as f64) / (segments as f64);
            Coord {
                x: center.x + radius * angle.cos(),
                y: center.y + radius * angle.sin(),
            }
        })
        .collect();

    Polygon::new(LineString::from(ring), vec![])
}

/// Same-entity decision for callers who already hold projected geometry
///
/// Alternate entry point to [`evaluate_overlap`](crate::core::overlap::evaluate_overlap):
/// skips the geodesic-distance step and computes the overlap directly from a
/// polygon intersection. Both polygons must live in the same planar
/// projection; the reported distance is the Euclidean distance between the
/// polygon centroids in those units. For small, co-located circles this path
/// agrees with the geodesic one; the geodesic path is authoritative where
/// they differ.
pub fn evaluate_polygon_overlap(
    first: &Polygon<f64>,
    second: &Polygon<f64>,
    threshold: f64,
) -> Result<OverlapReport, GeoError> {
    if !threshold.is_finite() || threshold <= 0.0 || threshold > 1.0 {
        return Err(GeoError::InvalidThreshold(threshold));
    }

    let first_area = first.unsigned_area();
    let second_area = second.unsigned_area();
    if first_area <= 0.0 || second_area <= 0.0 {
        return Err(GeoError::DegenerateGeometry("polygon with zero area"));
    }

    let distance_km = match (first.centroid(), second.centroid()) {
        (Some(a), Some(b)) => a.euclidean_distance(&b),
        _ => return Err(GeoError::DegenerateGeometry("polygon without a centroid")),
    };

    let intersection_area = first.intersection(second).unsigned_area();
    let first_area_share = intersection_area / first_area;
    let second_area_share = intersection_area / second_area;
    let same_entity = first_area_share.min(second_area_share) > threshold;

    tracing::debug!(
        distance_km,
        first_area_share,
        second_area_share,
        threshold,
        same_entity,
        "evaluated planar polygon overlap"
    );

    Ok(OverlapReport {
        distance_km,
        intersection_area,
        first_area_share,
        second_area_share,
        same_entity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::overlap::DEFAULT_OVERLAP_THRESHOLD;
    use std::f64::consts::PI;

    #[test]
    fn test_circle_polygon_area() {
        let disk = circle_polygon(Coord { x: 0.0, y: 0.0 }, 1.0, 256);
        // A 256-gon underestimates the disk by well under 0.1%
        assert!((disk.unsigned_area() - PI).abs() / PI < 1e-3);
    }

    #[test]
    fn test_unit_circles_one_apart_do_not_match() {
        // The shapely reference case: Point(0,0).buffer(1) vs Point(0,1).buffer(1)
        let a = circle_polygon(Coord { x: 0.0, y: 0.0 }, 1.0, 256);
        let b = circle_polygon(Coord { x: 0.0, y: 1.0 }, 1.0, 256);

        let report = evaluate_polygon_overlap(&a, &b, DEFAULT_OVERLAP_THRESHOLD).unwrap();

        // Exact lens area for unit circles one radius apart
        let expected = 2.0 * PI / 3.0 - 3.0_f64.sqrt() / 2.0;
        assert!((report.intersection_area - expected).abs() / expected < 1e-2);
        assert!((report.distance_km - 1.0).abs() < 1e-9);
        assert!(!report.same_entity);
    }

    #[test]
    fn test_identical_polygons_match() {
        let a = circle_polygon(Coord { x: 3.0, y: -2.0 }, 0.5, 128);
        let report = evaluate_polygon_overlap(&a, &a, DEFAULT_OVERLAP_THRESHOLD).unwrap();
        assert!(report.first_area_share > 0.999);
        assert!(report.same_entity);
    }

    #[test]
    fn test_degenerate_polygon_rejected() {
        let flat = Polygon::new(
            LineString::from(vec![
                Coord { x: 0.0, y: 0.0 },
                Coord { x: 1.0, y: 0.0 },
                Coord { x: 2.0, y: 0.0 },
            ]),
            vec![],
        );
        let disk = circle_polygon(Coord { x: 0.0, y: 0.0 }, 1.0, 64);
        let err = evaluate_polygon_overlap(&flat, &disk, DEFAULT_OVERLAP_THRESHOLD).unwrap_err();
        assert!(matches!(err, GeoError::DegenerateGeometry(_)));
    }

    #[test]
    fn test_bad_threshold_rejected() {
        let disk = circle_polygon(Coord { x: 0.0, y: 0.0 }, 1.0, 64);
        assert!(evaluate_polygon_overlap(&disk, &disk, 0.0).is_err());
    }
}
