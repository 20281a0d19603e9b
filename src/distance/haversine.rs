//! Great-circle distance estimator.
//!
//! # Algorithm
//!
//! Haversine formula over a spherical Earth with mean radius 6 371 000 m:
//!
//! ```text
//! x = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)
//! d = 2R·asin(√x)
//! ```
//!
//! The result is a straight-line proxy for travel cost, used whenever no
//! external travel-cost provider is available (or for individual cells the
//! provider could not resolve). It is deterministic and side-effect-free.

use crate::models::Coordinate;

/// Mean Earth radius in metres.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Returns the great-circle distance between two coordinates, in metres.
///
/// Identical coordinates yield exactly zero. Coordinate range validity is
/// guaranteed by [`Coordinate::new`], so no checking happens here.
///
/// # Examples
///
/// ```
/// use delivery_routing::distance::haversine;
/// use delivery_routing::models::Coordinate;
///
/// let a = Coordinate::new(0.0, 0.0).unwrap();
/// let b = Coordinate::new(0.0, 1.0).unwrap();
/// assert_eq!(haversine(a, a), 0.0);
/// // One degree of longitude at the equator is ~111.2 km.
/// assert!((haversine(a, b) - 111_195.0).abs() < 100.0);
/// ```
pub fn haversine(a: Coordinate, b: Coordinate) -> f64 {
    if a == b {
        return 0.0;
    }
    let (lat1, lon1) = (a.lat().to_radians(), a.lon().to_radians());
    let (lat2, lon2) = (b.lat().to_radians(), b.lon().to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let x = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    EARTH_RADIUS_M * 2.0 * x.sqrt().asin()
}
