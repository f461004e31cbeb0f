//! Input discovery and reading.
//!
//! - [`next_hops`] - gateway interface lists (`*.txt`)
//! - [`workbook`] - server route records (`*.xlsx`)

mod next_hops;
mod workbook;

pub use next_hops::{load_gateway_pool, read_next_hop_file};
pub use workbook::{read_workbook_rows, rows_from_range};

use crate::error::{RouteError, RouteResult};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// All files below `dir` with the extension `ext`, in sorted traversal order.
///
/// # Errors
/// * `RouteError::MissingDirectory` - if `dir` is not a directory
/// * `RouteError::Io` - if a directory cannot be read
pub fn discover_files(dir: &Path, ext: &str) -> RouteResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(RouteError::MissingDirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            RouteError::io(path, e.into())
        })?;
        let matches = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(ext));
        if entry.file_type().is_file() && matches {
            files.push(entry.into_path());
        }
    }
    log::debug!("Found {} *.{ext} files in {}", files.len(), dir.display());
    Ok(files)
}
