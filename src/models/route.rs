//! Static route definitions in Windows `route` syntax.

use std::fmt;
use std::net::Ipv4Addr;

/// A persistent static route, displayed as a `route -p add` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub destination: String,
    pub mask: String,
    pub next_hop: Ipv4Addr,
    pub metric: String,
}

impl fmt::Display for ResolvedRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "route -p add {} mask {} {} metric {}",
            self.destination, self.mask, self.next_hop, self.metric
        )
    }
}
