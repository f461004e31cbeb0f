//! Output of generated routes.
//!
//! - [`routes_file`] - one text file per server
//! - [`terminal`] - run summary on stdout

mod routes_file;
mod terminal;

pub use routes_file::{route_file_path, save_routes};
pub use terminal::{format_field, print_summary};
