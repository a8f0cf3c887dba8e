use crate::models::{Coordinate, DistanceResult};

/// Earth's mean radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points
///
/// Inputs outside the usual latitude/longitude ranges are not rejected; they
/// produce a defined but geographically meaningless result.
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers, with miles derived from it
#[inline]
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> DistanceResult {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 near antipodes
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    DistanceResult::from_kilometers(EARTH_RADIUS_KM * c)
}

impl Coordinate {
    /// Great-circle distance from this coordinate to `other`
    #[inline]
    pub fn distance_to(&self, other: &Coordinate) -> DistanceResult {
        if !self.is_in_range() || !other.is_in_range() {
            tracing::debug!("Measuring distance with out-of-range coordinate: {:?} -> {:?}", self, other);
        }
        haversine(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}
