//! Domain model types for the route-ordering engine.
//!
//! Provides the request/response vocabulary: validated geographic
//! coordinates, waypoints binding a caller's record key to a location, the
//! cost priority selector, and the optimized route returned to the caller.

mod coordinate;
mod priority;
mod route;
mod waypoint;

pub use coordinate::Coordinate;
pub use priority::Priority;
pub use route::Route;
pub use waypoint::Waypoint;
