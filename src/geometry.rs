//! Great-circle distance on the WGS84 sphere.

use geo::Point;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two points, in kilometres.
///
/// Points follow the crate-wide convention `x = longitude, y = latitude`
/// (degrees). Used both as the scoring heuristic for stranded-endpoint
/// repair and for nearest-stop lookups.
pub fn haversine_km(from: Point<f64>, to: Point<f64>) -> f64 {
    let lat1 = from.y().to_radians();
    let lat2 = to.y().to_radians();
    let dlat = (to.y() - from.y()).to_radians();
    let dlon = (to.x() - from.x()).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_for_identical_points() {
        let p = Point::new(29.95, 40.78);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn symmetric() {
        let a = Point::new(29.97302, 40.80056);
        let b = Point::new(29.8956, 40.77736);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-12);
    }

    #[test]
    fn known_pair_across_town() {
        // Two points roughly 7 km apart.
        let a = Point::new(29.97302, 40.80056);
        let b = Point::new(29.8956, 40.77736);
        let d = haversine_km(a, b);
        assert!((d - 7.0).abs() < 0.1, "got {d}");
    }
}
