//! Delivery waypoint type.

use super::Coordinate;

/// A delivery stop: the caller's record key bound to a geocoded location.
///
/// The identifier is opaque to the engine — typically a database primary key
/// in the surrounding application — and is echoed back unchanged in the
/// optimized visiting order. Waypoints are supplied per request and have no
/// lifecycle of their own inside the engine.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::{Coordinate, Waypoint};
///
/// let w = Waypoint::new(42u32, Coordinate::new(0.0, 1.0).unwrap());
/// assert_eq!(*w.id(), 42);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint<Id> {
    id: Id,
    location: Coordinate,
}

impl<Id> Waypoint<Id> {
    /// Creates a waypoint from a caller identifier and a location.
    pub fn new(id: Id, location: Coordinate) -> Self {
        Self { id, location }
    }

    /// The caller-supplied identifier.
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// The geocoded location.
    pub fn location(&self) -> Coordinate {
        self.location
    }
}
