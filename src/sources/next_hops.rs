//! Migration gateway definitions.
//!
//! Each non-blank line of a next hop file is one interface, `addr` or
//! `addr/prefix`. A single bad line aborts the run.

use super::discover_files;
use crate::error::{RouteError, RouteResult};
use crate::models::{parse_interface, GatewayPool, Interface};
use std::path::Path;

/// Parse every interface of one next hop file, in line order.
pub fn read_next_hop_file(path: &Path) -> RouteResult<Vec<Interface>> {
    log::debug!("Opening file at path {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| RouteError::io(path, e))?;

    let mut interfaces = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let interface = parse_interface(text).map_err(|_| RouteError::InvalidNextHop {
            path: path.to_path_buf(),
            line: i + 1,
            text: text.to_string(),
        })?;
        interfaces.push(interface);
    }
    Ok(interfaces)
}

/// Build the gateway pool from every `*.txt` file below `dir`.
pub fn load_gateway_pool(dir: &Path) -> RouteResult<GatewayPool> {
    log::info!(
        "Looping over files in folder '{}' and adding as next hops",
        dir.display()
    );
    let mut interfaces = Vec::new();
    for path in discover_files(dir, "txt")? {
        interfaces.extend(read_next_hop_file(&path)?);
    }
    let pool = GatewayPool::new(interfaces);
    log::info!("Loaded {} next hops: {pool}", pool.len());
    Ok(pool)
}
