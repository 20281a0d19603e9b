//! # delivery-routing
//!
//! Route-ordering engine for courier deliveries: given a start point and a
//! set of geocoded waypoints, build a pairwise travel-cost matrix and solve
//! for the cheapest visiting order (single-vehicle open-path TSP — fixed
//! start, no return to origin).
//!
//! Costs come from an optional external [travel-cost
//! provider](provider::TravelCostProvider) (one batched call per request,
//! best-effort) with a haversine straight-line fallback, so a route is
//! always produced for valid input. Small instances are solved exactly by
//! enumeration; larger ones use cheapest-arc construction refined by
//! 2-opt, a deliberate accuracy/latency tradeoff.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Coordinate, Waypoint, Priority, Route)
//! - [`distance`] — Haversine great-circle estimator
//! - [`matrix`] — Cost matrix and its builder with provider fallback
//! - [`provider`] — Pluggable external travel-cost capability
//! - [`solver`] — Exact and heuristic open-path solvers
//! - [`engine`] — The `optimize` entry point and result mapping
//!
//! ## Example
//!
//! ```
//! use delivery_routing::models::{Coordinate, Priority, Waypoint};
//! use delivery_routing::optimize;
//!
//! let depot = Coordinate::new(-23.5505, -46.6333).unwrap();
//! let deliveries = vec![
//!     Waypoint::new(17u32, Coordinate::new(-23.5617, -46.6559).unwrap()),
//!     Waypoint::new(4u32, Coordinate::new(-23.5489, -46.6388).unwrap()),
//! ];
//!
//! let route = optimize(depot, &deliveries, Priority::Distance, None).unwrap();
//! assert_eq!(route.len(), 2);
//! ```

pub mod distance;
pub mod engine;
pub mod matrix;
pub mod models;
pub mod provider;
pub mod solver;

pub use engine::{optimize, OptimizeError, Optimizer};
pub use models::{Coordinate, Priority, Route, Waypoint};
