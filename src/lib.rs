//! Generate Windows static routes for servers moving behind migration gateways.
//!
//! A run loads every gateway interface first, then reads the server records
//! of each workbook in order, and finally writes one route file per server.

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod sources;

use config::{RouteConfig, Settings};
use error::RouteResult;
use models::ServerRegistry;
use processing::RunStats;
use std::path::PathBuf;

pub use error::RouteError;

/// Result of a completed run.
#[derive(Debug)]
pub struct RunReport {
    pub registry: ServerRegistry,
    pub stats: RunStats,
    /// Route files written, in registry order.
    pub written: Vec<PathBuf>,
}

/// Read all inputs and collect routes without writing anything.
///
/// Every workbook is read before the first row is processed, so any fatal
/// error aborts before routes are built.
pub fn collect(settings: &Settings, config: &RouteConfig) -> RouteResult<(ServerRegistry, RunStats)> {
    let pool = sources::load_gateway_pool(&settings.next_hops_dir)?;
    if pool.is_empty() {
        log::warn!(
            "No next hops found in {}, every row will be skipped",
            settings.next_hops_dir.display()
        );
    }

    log::info!("Looping over files in folder '{}'", settings.input_dir.display());
    let mut rows = Vec::new();
    for path in sources::discover_files(&settings.input_dir, "xlsx")? {
        let workbook_rows = sources::read_workbook_rows(&path, config)?;
        log::info!("Read {} rows of {}", workbook_rows.len(), path.display());
        rows.extend(workbook_rows);
    }
    Ok(processing::collect_routes(&rows, config, &pool))
}

/// Full run: collect routes, then write them below the output directory.
pub fn run(settings: &Settings, config: &RouteConfig) -> RouteResult<RunReport> {
    let (registry, stats) = collect(settings, config)?;
    let written = output::save_routes(&registry, &settings.output_dir)?;
    log::info!(
        "Wrote {} route files with {} routes",
        written.len(),
        registry.route_count()
    );
    Ok(RunReport {
        registry,
        stats,
        written,
    })
}
