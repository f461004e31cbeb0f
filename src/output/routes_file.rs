//! Per-server route files.

use crate::error::{RouteError, RouteResult};
use crate::models::ServerRegistry;
use itertools::Itertools;
use std::path::{Path, PathBuf};

/// A single path component: no separators, not `.` or `..`.
/// An empty domain is allowed and places the file directly in the output dir.
fn check_component(kind: &'static str, name: &str, allow_empty: bool) -> RouteResult<()> {
    let unsafe_name = (name.is_empty() && !allow_empty)
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if unsafe_name {
        return Err(RouteError::UnsafeName {
            kind,
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Location of the route file for `hostname` in `domain`.
///
/// # Errors
/// * `RouteError::UnsafeName` - if either name would leave its directory
pub fn route_file_path(output_dir: &Path, domain: &str, hostname: &str) -> RouteResult<PathBuf> {
    check_component("domain", domain, true)?;
    check_component("hostname", hostname, false)?;
    Ok(output_dir.join(domain).join(format!("{hostname}.txt")))
}

/// Write `<output_dir>/<domain>/<hostname>.txt` for every server with routes.
///
/// Lines are joined with `\n`, without a newline after the last route.
/// Servers without routes get no file. Every path is checked before the
/// first file is written.
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` - the files written, in registry order
pub fn save_routes(registry: &ServerRegistry, output_dir: &Path) -> RouteResult<Vec<PathBuf>> {
    log::info!("Saving Routes to {}", output_dir.display());

    let mut planned = Vec::new();
    for (hostname, entry) in registry.iter() {
        if entry.routes.is_empty() {
            log::debug!("No routes for {hostname}, no file written");
            continue;
        }
        planned.push((route_file_path(output_dir, &entry.domain, hostname)?, entry));
    }

    let mut written = Vec::new();
    for (path, entry) in planned {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| RouteError::io(parent, e))?;
        }
        std::fs::write(&path, entry.routes.iter().join("\n"))
            .map_err(|e| RouteError::io(&path, e))?;
        log::debug!("Wrote {} routes to {}", entry.routes.len(), path.display());
        written.push(path);
    }

    Ok(written)
}
