//! Candidate row model read from an input workbook.

use std::fmt;
use std::path::PathBuf;

/// One record from an input sheet, all fields as displayed in the sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateRow {
    /// Workbook the row was read from.
    pub source: PathBuf,
    /// 1-based row number inside the sheet.
    pub row: usize,
    pub hostname: String,
    pub domain: String,
    /// First value of the (possibly comma separated) IP address field.
    pub ip_address: String,
    pub destination: String,
    pub mask: String,
    /// Next hop as listed in the sheet. Never used to pick the gateway.
    pub next_hop: String,
    pub metric: String,
}

impl CandidateRow {
    /// First comma separated token of a raw IP address cell.
    pub fn first_ip(raw: &str) -> String {
        raw.split(',').next().unwrap_or_default().trim().to_string()
    }
}

impl fmt::Display for CandidateRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} ({}) {} -> {}/{}",
            self.source.display(),
            self.row,
            self.hostname,
            self.ip_address,
            self.domain,
            self.destination,
            self.mask
        )
    }
}
