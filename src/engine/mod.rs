//! Optimization entry point and result mapping.
//!
//! - [`optimize`] / [`Optimizer`] — validate the request, build the cost
//!   matrix, solve, and map node indices back to caller identifiers
//! - [`map_order`] — the index-to-identifier translation on its own
//! - [`OptimizeError`] — structured failures surfaced to the caller

mod error;
mod mapper;
mod optimize;

pub use error::OptimizeError;
pub use mapper::map_order;
pub use optimize::{optimize, Optimizer};
