//! Integration tests for migration-routes
//!
//! These tests build real next hop files and workbooks in a scratch
//! directory and run the complete workflow on them.

use migration_routes::config::{ColumnMap, RouteConfig, Settings};
use migration_routes::processing::SkipReason;
use migration_routes::{collect, run, RouteError};
use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::{Path, PathBuf};

struct Record<'a> {
    hostname: &'a str,
    domain: &'a str,
    ip_address: &'a str,
    destination: &'a str,
    mask: &'a str,
    metric: f64,
}

fn record<'a>(hostname: &'a str, ip_address: &'a str, destination: &'a str) -> Record<'a> {
    Record {
        hostname,
        domain: "corp",
        ip_address,
        destination,
        mask: "255.255.0.0",
        metric: 5.0,
    }
}

fn write_workbook(path: &Path, sheet: &str, records: &[Record]) {
    let cols = ColumnMap::default();
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet).unwrap();
    worksheet.write_string(0, cols.hostname as u16, "Hostname").unwrap();
    worksheet.write_string(0, cols.next_hop as u16, "Next Hop").unwrap();

    for (i, r) in records.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write_string(row, cols.hostname as u16, r.hostname).unwrap();
        worksheet.write_string(row, cols.domain as u16, r.domain).unwrap();
        worksheet.write_string(row, cols.ip_address as u16, r.ip_address).unwrap();
        worksheet.write_string(row, cols.destination as u16, r.destination).unwrap();
        worksheet.write_string(row, cols.mask as u16, r.mask).unwrap();
        worksheet.write_number(row, cols.metric as u16, r.metric).unwrap();
        worksheet.write_string(row, cols.next_hop as u16, "0.0.0.0").unwrap();
    }
    workbook.save(path).unwrap();
}

fn settings(root: &Path) -> Settings {
    let settings = Settings {
        next_hops_dir: root.join("next_hops"),
        input_dir: root.join("input"),
        output_dir: root.join("output"),
    };
    fs::create_dir_all(&settings.next_hops_dir).unwrap();
    fs::create_dir_all(&settings.input_dir).unwrap();
    settings
}

fn output_file(settings: &Settings, domain: &str, hostname: &str) -> PathBuf {
    settings.output_dir.join(domain).join(format!("{hostname}.txt"))
}

#[test]
fn test_full_workflow_single_route() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings(dir.path());
    fs::write(settings.next_hops_dir.join("gateways.txt"), "10.0.0.1/24\n").unwrap();
    write_workbook(
        &settings.input_dir.join("servers.xlsx"),
        "Sheet1",
        &[record("SRV1", "10.0.0.5", "172.16.0.0")],
    );

    let report = run(&settings, &RouteConfig::default()).expect("run failed");

    let path = output_file(&settings, "corp", "SRV1");
    assert_eq!(report.written, vec![path.clone()]);
    assert_eq!(
        fs::read_to_string(path).unwrap(),
        "route -p add 172.16.0.0 mask 255.255.0.0 10.0.0.1 metric 5"
    );
    assert_eq!(report.stats.rows, 1);
    assert_eq!(report.stats.routes, 1);
}

#[test]
fn test_filtered_servers_get_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings(dir.path());
    fs::write(settings.next_hops_dir.join("gateways.txt"), "10.0.0.1/24\n").unwrap();
    write_workbook(
        &settings.input_dir.join("servers.xlsx"),
        "Sheet1",
        &[
            record("LOCALHOST", "10.0.0.5", "172.16.0.0"),
            record("SRV2", "NULL", "172.16.0.0"),
            record("SRV3", "10.0.0.7", "127.0.0.1"),
            record("SRV4", "10.9.9.9", "172.16.0.0"),
            record("SRV5", "10.0.0.8", "10.0.0.0"),
            record("SRV6", "10.0.0.9,10.5.5.5", "192.168.0.0"),
        ],
    );

    let report = run(&settings, &RouteConfig::default()).expect("run failed");

    assert!(report.registry.get("LOCALHOST").is_none());
    assert!(report.registry.get("SRV4").is_none());
    // destination on the gateway network: entry exists but stays empty
    assert!(report.registry.get("SRV5").unwrap().routes.is_empty());
    assert_eq!(report.written, vec![output_file(&settings, "corp", "SRV6")]);
    for hostname in ["LOCALHOST", "SRV2", "SRV3", "SRV4", "SRV5"] {
        assert!(!output_file(&settings, "corp", hostname).exists());
    }

    let skipped = &report.stats.skipped;
    assert_eq!(skipped[&SkipReason::ExcludedHostname], 1);
    assert_eq!(skipped[&SkipReason::ExcludedIp], 1);
    assert_eq!(skipped[&SkipReason::ExcludedDestination], 1);
    assert_eq!(skipped[&SkipReason::OutsideGateways], 1);
    assert_eq!(report.stats.local, 1);
}

#[test]
fn test_routes_follow_file_then_row_order() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings(dir.path());
    fs::write(settings.next_hops_dir.join("a.txt"), "10.0.0.1/16\n").unwrap();
    fs::write(settings.next_hops_dir.join("b.txt"), "10.0.5.1/24\n").unwrap();
    write_workbook(
        &settings.input_dir.join("1-first.xlsx"),
        "Sheet1",
        &[record("SRV1", "10.0.5.20", "172.16.0.0")],
    );
    fs::create_dir_all(settings.input_dir.join("2-more")).unwrap();
    write_workbook(
        &settings.input_dir.join("2-more").join("second.xlsx"),
        "Sheet1",
        &[record("SRV1", "10.0.5.20", "172.17.0.0")],
    );

    let (registry, _) = collect(&settings, &RouteConfig::default()).expect("collect failed");
    assert_eq!(
        registry.get("SRV1").unwrap().routes,
        vec![
            "route -p add 172.16.0.0 mask 255.255.0.0 10.0.0.1 metric 5",
            "route -p add 172.17.0.0 mask 255.255.0.0 10.0.0.1 metric 5",
        ]
    );
}

#[test]
fn test_invalid_next_hop_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings(dir.path());
    fs::write(
        settings.next_hops_dir.join("gateways.txt"),
        "10.0.0.1/24\nnot-an-address\n",
    )
    .unwrap();
    write_workbook(
        &settings.input_dir.join("servers.xlsx"),
        "Sheet1",
        &[record("SRV1", "10.0.0.5", "172.16.0.0")],
    );

    let err = run(&settings, &RouteConfig::default()).unwrap_err();
    assert!(matches!(err, RouteError::InvalidNextHop { line: 2, .. }));
    assert!(err.to_string().contains("not-an-address"));
    assert!(!settings.output_dir.exists());
}

#[test]
fn test_missing_sheet_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings(dir.path());
    fs::write(settings.next_hops_dir.join("gateways.txt"), "10.0.0.1/24\n").unwrap();
    write_workbook(
        &settings.input_dir.join("servers.xlsx"),
        "Servers",
        &[record("SRV1", "10.0.0.5", "172.16.0.0")],
    );

    let err = run(&settings, &RouteConfig::default()).unwrap_err();
    assert!(matches!(err, RouteError::MissingSheet { .. }));
    assert!(!settings.output_dir.exists());
}
