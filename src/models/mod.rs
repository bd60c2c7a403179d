// Model exports
pub mod domain;

pub use domain::{GeoError, GeoPoint, OverlapReport, PresenceCircle};
