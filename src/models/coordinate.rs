//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

/// A point on the globe in decimal degrees.
///
/// Construction validates the ranges: latitude must lie in `[-90, 90]` and
/// longitude in `[-180, 180]`, and both must be finite. Out-of-range input is
/// rejected (the constructor returns `None`) rather than clamped, so a bad
/// geocode surfaces instead of silently moving a delivery.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::Coordinate;
///
/// let c = Coordinate::new(-23.55, -46.63).unwrap();
/// assert_eq!(c.lat(), -23.55);
/// assert!(Coordinate::new(91.0, 0.0).is_none());
/// assert!(Coordinate::new(0.0, f64::NAN).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

/// Unvalidated mirror used to funnel deserialization through [`Coordinate::new`].
#[derive(Deserialize)]
struct RawCoordinate {
    lat: f64,
    lon: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = String;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lon)
            .ok_or_else(|| format!("coordinate out of range: ({}, {})", raw.lat, raw.lon))
    }
}

impl Coordinate {
    /// Creates a coordinate from decimal degrees.
    ///
    /// Returns `None` if either component is non-finite or out of range.
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        if !lat.is_finite() || !lon.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return None;
        }
        Some(Self { lat, lon })
    }

    /// Latitude in decimal degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}
