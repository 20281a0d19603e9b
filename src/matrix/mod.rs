//! Travel-cost matrix and its builder.
//!
//! - [`CostMatrix`] — dense integer-cost square matrix (node 0 = start)
//! - [`build_cost_matrix`] — assembly from coordinates with optional
//!   provider data and per-cell haversine fallback

mod builder;
mod cost_matrix;

pub use builder::build_cost_matrix;
pub use cost_matrix::CostMatrix;
