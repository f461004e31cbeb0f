// Configuration for the route generator
// Directory locations come from CLI arguments or environment variables,
// everything else is fixed in RouteConfig::default()

use clap::Parser;
use std::collections::HashSet;
use std::path::PathBuf;

/// Generate Windows static routes for servers behind migration gateways
#[derive(Parser, Debug, Clone)]
#[command(name = "migration-routes")]
#[command(author, version, about, long_about = None)]
pub struct Settings {
    /// Directory tree of *.txt files listing next hop interfaces
    #[arg(long, default_value = "next_hops", env = "ROUTES_NEXT_HOPS_DIR")]
    pub next_hops_dir: PathBuf,

    /// Directory tree of *.xlsx workbooks with server route records
    #[arg(long, default_value = "input", env = "ROUTES_INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Directory the per-server route files are written to
    #[arg(long, default_value = "output", env = "ROUTES_OUTPUT_DIR")]
    pub output_dir: PathBuf,
}

/// Column positions (0-based) of the fields in an input sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub hostname: u32,
    pub domain: u32,
    pub ip_address: u32,
    pub destination: u32,
    pub mask: u32,
    pub metric: u32,
    pub next_hop: u32,
}

impl Default for ColumnMap {
    fn default() -> Self {
        ColumnMap {
            hostname: 0,
            domain: 1,
            ip_address: 2,
            destination: 11,
            mask: 15,
            metric: 16,
            next_hop: 22,
        }
    }
}

/// Exclusion rules and sheet layout used while reading and filtering rows.
#[derive(Debug, Clone)]
pub struct RouteConfig {
    pub skipped_hostnames: HashSet<String>,
    pub skipped_ips: HashSet<String>,
    pub skipped_destinations: HashSet<String>,
    pub sheet_name: String,
    pub columns: ColumnMap,
}

fn default_skipped_hostnames() -> Vec<&'static str> {
    vec!["NULL", "LOCALHOST"]
}

fn default_skipped_ips() -> Vec<&'static str> {
    vec!["NULL"]
}

/// Loopback, multicast and broadcast destinations never get a route.
fn default_skipped_destinations() -> Vec<&'static str> {
    vec![
        "127.0.0.0",
        "127.0.0.1",
        "224.0.0.0",
        "255.255.255.255",
        "127.255.255.255",
    ]
}

fn to_set(list: Vec<&str>) -> HashSet<String> {
    list.into_iter().map(String::from).collect()
}

impl Default for RouteConfig {
    fn default() -> Self {
        RouteConfig {
            skipped_hostnames: to_set(default_skipped_hostnames()),
            skipped_ips: to_set(default_skipped_ips()),
            skipped_destinations: to_set(default_skipped_destinations()),
            sheet_name: "Sheet1".to_string(),
            columns: ColumnMap::default(),
        }
    }
}
