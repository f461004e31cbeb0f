//! Route generation logic.
//!
//! - [`filter`] - exclusion rules applied to each row
//! - [`builder`] - turns an accepted row into a route line
//! - [`pipeline`] - feeds rows through both and collects the results

mod builder;
mod filter;
mod pipeline;

// Re-export public functions
pub use builder::build_route;
pub use filter::{Decision, RouteFilter, SkipReason};
pub use pipeline::{collect_routes, RunStats};
