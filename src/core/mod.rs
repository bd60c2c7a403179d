// Core algorithm exports
pub mod distance;
pub mod geometry;
pub mod overlap;
pub mod planar;

pub use distance::haversine_distance;
pub use geometry::{circle_area, circle_intersection_area, intersection_area_at_distance};
pub use overlap::{evaluate_overlap, is_same_entity, DEFAULT_OVERLAP_THRESHOLD};
pub use planar::{circle_polygon, evaluate_polygon_overlap};
