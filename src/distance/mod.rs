//! Straight-line travel-cost estimation.
//!
//! Provides the haversine great-circle estimator used as the fallback cost
//! source when no external travel-cost provider is available.

mod haversine;

pub use haversine::haversine;
