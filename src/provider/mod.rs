//! External travel-cost capability.
//!
//! The engine performs no I/O of its own; real-world distances and durations
//! come from an optional [`TravelCostProvider`] injected per request. The
//! provider is best-effort: any failure, partial result, or timeout is
//! absorbed by the matrix builder's estimator fallback.

mod travel;

pub use travel::{MatrixCell, ProviderError, TravelCostProvider, TravelMatrix};
