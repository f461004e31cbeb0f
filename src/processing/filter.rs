//! Row exclusion rules.
//!
//! Checks run in a fixed order and stop at the first match, so the logged
//! reason is always the earliest rule that applies.

use crate::config::RouteConfig;
use crate::models::{parse_address, CandidateRow, GatewayPool};
use std::fmt;

/// Why a row was dropped without producing a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkipReason {
    ExcludedHostname,
    ExcludedIp,
    ExcludedDestination,
    InvalidIp,
    OutsideGateways,
    NoNextHop,
    InvalidDestination,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::ExcludedHostname => "excluded hostname",
            SkipReason::ExcludedIp => "excluded ip address",
            SkipReason::ExcludedDestination => "excluded destination",
            SkipReason::InvalidIp => "invalid ip address",
            SkipReason::OutsideGateways => "ip address outside gateway networks",
            SkipReason::NoNextHop => "no next hop",
            SkipReason::InvalidDestination => "invalid destination",
        };
        f.write_str(text)
    }
}

/// Outcome of [`RouteFilter::accept`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Continue,
    Reject(SkipReason),
}

/// Applies the exclusion lists of a [`RouteConfig`] and the gateway test.
pub struct RouteFilter<'a> {
    config: &'a RouteConfig,
    pool: &'a GatewayPool,
}

impl<'a> RouteFilter<'a> {
    pub fn new(config: &'a RouteConfig, pool: &'a GatewayPool) -> RouteFilter<'a> {
        RouteFilter { config, pool }
    }

    pub fn accept(&self, row: &CandidateRow) -> Decision {
        if self.config.skipped_hostnames.contains(&row.hostname) {
            log::debug!("skipping row as hostname: {} is excluded", row.hostname);
            return Decision::Reject(SkipReason::ExcludedHostname);
        }

        if self.config.skipped_ips.contains(&row.ip_address) {
            log::debug!("skipping row as ip_address: {} is excluded", row.ip_address);
            return Decision::Reject(SkipReason::ExcludedIp);
        }

        if self
            .config
            .skipped_destinations
            .contains(row.destination.trim())
        {
            log::debug!("skipping row as route: {} is excluded", row.destination);
            return Decision::Reject(SkipReason::ExcludedDestination);
        }

        let ip = match parse_address(&row.ip_address) {
            Ok(ip) => ip,
            Err(e) => {
                log::warn!("skipping row {}:{}: {e}", row.source.display(), row.row);
                return Decision::Reject(SkipReason::InvalidIp);
            }
        };

        if !self.pool.contains(ip) {
            log::debug!("skipping row as IP: {ip} is not in any of the gateway networks");
            return Decision::Reject(SkipReason::OutsideGateways);
        }

        Decision::Continue
    }
}
