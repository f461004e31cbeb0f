//! Ordered pool of migration gateway interfaces.

use super::Interface;
use std::fmt;
use std::net::Ipv4Addr;

/// Next hop interfaces in insertion order.
///
/// Lookups scan linearly so that overlapping networks always resolve to the
/// interface that was added first.
#[derive(Debug, Default, Clone)]
pub struct GatewayPool {
    interfaces: Vec<Interface>,
}

impl GatewayPool {
    /// Create a pool holding `interfaces` in the given order.
    pub fn new(interfaces: Vec<Interface>) -> GatewayPool {
        GatewayPool { interfaces }
    }

    /// True if `addr` is on the network of any interface.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.interfaces.iter().any(|i| i.contains(addr))
    }

    /// First interface whose network contains `addr`.
    pub fn resolve(&self, addr: Ipv4Addr) -> Option<&Interface> {
        self.interfaces.iter().find(|i| i.contains(addr))
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }
}

impl FromIterator<Interface> for GatewayPool {
    fn from_iter<T: IntoIterator<Item = Interface>>(iter: T) -> Self {
        GatewayPool::new(iter.into_iter().collect())
    }
}

impl fmt::Display for GatewayPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list: Vec<String> = self.interfaces.iter().map(|i| i.to_string()).collect();
        write!(f, "[{}]", list.join(", "))
    }
}
