//! Input workbook reading.
//!
//! Rows are read from the configured sheet starting at the second row.
//! Columns are addressed by absolute position so leading empty rows or
//! columns in the sheet do not shift the mapping.

use crate::config::{ColumnMap, RouteConfig};
use crate::error::{RouteError, RouteResult};
use crate::models::CandidateRow;
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

/// Read every candidate row of the configured sheet of `path`.
///
/// # Errors
/// * `RouteError::Workbook` - if the file cannot be opened or parsed
/// * `RouteError::MissingSheet` - if the sheet does not exist
pub fn read_workbook_rows(path: &Path, config: &RouteConfig) -> RouteResult<Vec<CandidateRow>> {
    log::info!("Trying to load workbook {}", path.display());
    let mut workbook = open_workbook_auto(path).map_err(|e| RouteError::Workbook {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    log::info!("Trying to load worksheet {}", config.sheet_name);
    if !workbook.sheet_names().contains(&config.sheet_name) {
        return Err(RouteError::MissingSheet {
            path: path.to_path_buf(),
            sheet: config.sheet_name.clone(),
        });
    }
    let range = workbook
        .worksheet_range(&config.sheet_name)
        .map_err(|e| RouteError::Workbook {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let rows = rows_from_range(&range, path, &config.columns);
    log::debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Convert sheet cells into rows, skipping the header and blank hostnames.
pub fn rows_from_range(range: &Range<Data>, source: &Path, columns: &ColumnMap) -> Vec<CandidateRow> {
    let Some((last_row, _)) = range.end() else {
        return vec![];
    };

    let mut rows = Vec::new();
    for r in 1..=last_row {
        let cell = |col: u32| -> String {
            range
                .get_value((r, col))
                .map(|d| d.to_string())
                .unwrap_or_default()
        };

        let hostname = cell(columns.hostname);
        if hostname.trim().is_empty() {
            log::debug!("skipping empty row {} of {}", r + 1, source.display());
            continue;
        }

        rows.push(CandidateRow {
            source: source.to_path_buf(),
            row: r as usize + 1,
            hostname,
            domain: cell(columns.domain),
            ip_address: CandidateRow::first_ip(&cell(columns.ip_address)),
            destination: cell(columns.destination).trim().to_string(),
            mask: cell(columns.mask).trim().to_string(),
            next_hop: cell(columns.next_hop),
            metric: cell(columns.metric).trim().to_string(),
        });
    }
    rows
}
