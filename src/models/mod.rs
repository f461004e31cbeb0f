//! Domain models for route generation.
//!
//! - [`Interface`] - IPv4 address with the prefix of its network
//! - [`GatewayPool`] - ordered set of migration gateway interfaces
//! - [`CandidateRow`] - one input record
//! - [`ResolvedRoute`] - a route line ready to be written
//! - [`ServerRegistry`] and [`ServerEntry`] - routes collected per server

mod gateway_pool;
mod interface;
mod registry;
mod route;
mod row;

// Re-export public types
pub use gateway_pool::GatewayPool;
pub use interface::{
    cut_addr, get_cidr_mask, netmask_to_prefix, parse_address, parse_interface, Interface,
    MAX_LENGTH,
};
pub use registry::{ServerEntry, ServerRegistry};
pub use route::ResolvedRoute;
pub use row::CandidateRow;
