//! Row-by-row route generation.
//!
//! [`collect_routes`] folds rows into a [`ServerRegistry`] and the counters
//! of the run. Rows must be given in read order, routes for a server are
//! appended in that order.

use super::builder::build_route;
use super::filter::{Decision, RouteFilter, SkipReason};
use crate::config::RouteConfig;
use crate::models::{parse_address, CandidateRow, GatewayPool, ServerRegistry};
use std::collections::BTreeMap;
use std::fmt;

/// Counters collected while processing rows.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub rows: usize,
    pub routes: usize,
    /// Rows whose destination was already on the next hop's network.
    pub local: usize,
    pub skipped: BTreeMap<SkipReason, usize>,
}

impl RunStats {
    fn skip(&mut self, reason: SkipReason) {
        *self.skipped.entry(reason).or_insert(0) += 1;
    }

    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rows={} routes={} local={} skipped={}",
            self.rows,
            self.routes,
            self.local,
            self.skipped_total()
        )?;
        for (reason, count) in &self.skipped {
            write!(f, " [{reason}: {count}]")?;
        }
        Ok(())
    }
}

struct RoutePipeline<'a> {
    filter: RouteFilter<'a>,
    pool: &'a GatewayPool,
    registry: ServerRegistry,
    stats: RunStats,
}

impl<'a> RoutePipeline<'a> {
    /// The pool must already hold every gateway of the run.
    fn new(config: &'a RouteConfig, pool: &'a GatewayPool) -> RoutePipeline<'a> {
        RoutePipeline {
            filter: RouteFilter::new(config, pool),
            pool,
            registry: ServerRegistry::new(),
            stats: RunStats::default(),
        }
    }

    fn process_row(&mut self, row: &CandidateRow) {
        self.stats.rows += 1;
        log::info!("Parsing row {} of {}", row.row, row.source.display());

        if let Decision::Reject(reason) = self.filter.accept(row) {
            self.stats.skip(reason);
            return;
        }
        log::info!("Hostname: {}", row.hostname);

        // accept() already checked the address parses and is on a gateway network
        let pool = self.pool;
        let next_hop = parse_address(&row.ip_address)
            .ok()
            .and_then(|ip| pool.resolve(ip));
        let Some(next_hop) = next_hop else {
            log::error!("No valid next hop found for {row}");
            self.stats.skip(SkipReason::NoNextHop);
            return;
        };

        log::info!(
            "Building new configuration for route {}/{} via {next_hop}",
            row.destination,
            row.mask
        );
        match build_route(&row.destination, &row.mask, next_hop, &row.metric) {
            Ok(route) => {
                let entry = self.registry.entry(&row.hostname, &row.domain);
                match route {
                    Some(route) => {
                        entry.routes.push(route.to_string());
                        self.stats.routes += 1;
                    }
                    None => self.stats.local += 1,
                }
            }
            Err(e) => {
                log::warn!("skipping row {row}: {e}");
                self.stats.skip(SkipReason::InvalidDestination);
            }
        }
    }

    fn finish(self) -> (ServerRegistry, RunStats) {
        (self.registry, self.stats)
    }
}

/// Run every row through a fresh pipeline.
pub fn collect_routes<'r, I>(
    rows: I,
    config: &RouteConfig,
    pool: &GatewayPool,
) -> (ServerRegistry, RunStats)
where
    I: IntoIterator<Item = &'r CandidateRow>,
{
    let mut pipeline = RoutePipeline::new(config, pool);
    for row in rows {
        pipeline.process_row(row);
    }
    pipeline.finish()
}
