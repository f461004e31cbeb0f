//! Terminal output utilities.

use crate::models::ServerRegistry;
use crate::processing::RunStats;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Print servers and routes per domain, then the run totals.
pub fn print_summary(registry: &ServerRegistry, stats: &RunStats) {
    log::info!("Run summary: {stats}");

    println!(r#" "domain",    "servers",  "routes""#);
    for (domain, servers) in registry.by_domain() {
        let with_routes = servers.iter().filter(|(_, e)| !e.routes.is_empty()).count();
        let routes: usize = servers.iter().map(|(_, e)| e.routes.len()).sum();
        println!(
            "{},{},{}",
            format_field(domain, 10),
            format_field(with_routes, 12),
            format_field(routes, 9)
        );
    }

    let skipped = stats.skipped_total();
    let skipped_text = format!("{skipped} skipped");
    println!(
        "#{}# rows={} routes={} local={} {}",
        "DONE".on_green(),
        stats.rows,
        stats.routes.to_string().green(),
        stats.local,
        if skipped > 0 {
            skipped_text.yellow()
        } else {
            skipped_text.normal()
        }
    );
}
