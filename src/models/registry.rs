//! Per-server accumulation of generated routes.

use std::collections::{BTreeMap, HashMap};

/// Routes collected for one server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerEntry {
    /// Domain of the first row that created the entry.
    pub domain: String,
    /// Route lines in the order their rows were read.
    pub routes: Vec<String>,
}

impl ServerEntry {
    pub fn new(domain: &str) -> ServerEntry {
        ServerEntry {
            domain: domain.to_string(),
            routes: vec![],
        }
    }
}

/// Servers keyed by hostname, kept in first-seen order.
#[derive(Debug, Default, Clone)]
pub struct ServerRegistry {
    servers: Vec<(String, ServerEntry)>,
    index: HashMap<String, usize>,
}

impl ServerRegistry {
    pub fn new() -> ServerRegistry {
        Self::default()
    }

    /// Entry for `hostname`, created with `domain` if it does not exist yet.
    ///
    /// An existing entry keeps its original domain.
    pub fn entry(&mut self, hostname: &str, domain: &str) -> &mut ServerEntry {
        let idx = match self.index.get(hostname) {
            Some(idx) => *idx,
            None => {
                log::debug!("New server {hostname} in domain {domain}");
                self.servers
                    .push((hostname.to_string(), ServerEntry::new(domain)));
                self.index
                    .insert(hostname.to_string(), self.servers.len() - 1);
                self.servers.len() - 1
            }
        };
        &mut self.servers[idx].1
    }

    pub fn get(&self, hostname: &str) -> Option<&ServerEntry> {
        self.index.get(hostname).map(|idx| &self.servers[*idx].1)
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    /// `(hostname, entry)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ServerEntry)> {
        self.servers.iter().map(|(h, e)| (h.as_str(), e))
    }

    /// Servers grouped by domain, domains sorted, servers in first-seen order.
    pub fn by_domain(&self) -> BTreeMap<&str, Vec<(&str, &ServerEntry)>> {
        let mut domains: BTreeMap<&str, Vec<(&str, &ServerEntry)>> = BTreeMap::new();
        for (hostname, entry) in self.iter() {
            domains
                .entry(entry.domain.as_str())
                .or_default()
                .push((hostname, entry));
        }
        domains
    }

    /// Total number of routes over all servers.
    pub fn route_count(&self) -> usize {
        self.servers.iter().map(|(_, e)| e.routes.len()).sum()
    }
}
