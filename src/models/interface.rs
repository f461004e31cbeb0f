//! IPv4 interface parsing and network membership.
//!
//! An [`Interface`] is a host address together with the prefix length of the
//! network it sits on, e.g. `10.0.0.1/24`.

use crate::error::{RouteError, RouteResult};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use migration_routes::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), Some(0xFFFFFF00));
/// assert_eq!(get_cidr_mask(33), None);
/// ```
pub fn get_cidr_mask(len: u8) -> Option<u32> {
    if len > MAX_LENGTH {
        None
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Some(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Option<Ipv4Addr> {
    get_cidr_mask(len).map(|mask| Ipv4Addr::from(u32::from(addr) & mask))
}

/// Prefix length of a dotted netmask, `None` unless the ones are contiguous.
pub fn netmask_to_prefix(mask: Ipv4Addr) -> Option<u8> {
    let bits = u32::from(mask);
    let ones = bits.leading_ones();
    if ones + bits.trailing_zeros() == u32::from(MAX_LENGTH) {
        Some(ones as u8)
    } else {
        None
    }
}

/// Parse a plain IPv4 address.
pub fn parse_address(text: &str) -> RouteResult<Ipv4Addr> {
    Ipv4Addr::from_str(text.trim()).map_err(|_| RouteError::invalid_address(text))
}

/// Parse `addr`, `addr/len`, `addr/netmask` or `addr/hostmask` into an
/// [`Interface`].
///
/// A bare address is a `/32` host interface. A dotted mask is read as a
/// netmask first, so `0.0.0.0` is `/0` and `255.255.255.255` is `/32`.
pub fn parse_interface(text: &str) -> RouteResult<Interface> {
    let trimmed = text.trim();
    let (addr_part, prefix_part) = match trimmed.split_once('/') {
        Some((addr, prefix)) => (addr, Some(prefix)),
        None => (trimmed, None),
    };

    let addr = parse_address(addr_part).map_err(|_| RouteError::invalid_address(text))?;
    let prefix = match prefix_part {
        None => MAX_LENGTH,
        Some(p) if !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()) => match p.parse::<u8>()
        {
            Ok(len) if len <= MAX_LENGTH => len,
            _ => return Err(RouteError::invalid_address(text)),
        },
        Some(p) => Ipv4Addr::from_str(p)
            .ok()
            .and_then(|mask| {
                netmask_to_prefix(mask)
                    .or_else(|| netmask_to_prefix(Ipv4Addr::from(!u32::from(mask))))
            })
            .ok_or_else(|| RouteError::invalid_address(text))?,
    };

    Ok(Interface { addr, prefix })
}

/// IPv4 host address on a network of a given prefix length.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Interface {
    addr: Ipv4Addr,
    prefix: u8,
}

impl Interface {
    /// Create an interface, `None` if the prefix is longer than 32 bits.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Option<Interface> {
        (prefix <= MAX_LENGTH).then_some(Interface { addr, prefix })
    }

    /// The host address of the interface.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length of the interface's network.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// The network base address.
    pub fn network(&self) -> Ipv4Addr {
        // prefix is validated on construction
        cut_addr(self.addr, self.prefix).unwrap_or(self.addr)
    }

    /// True if `addr` falls inside this interface's network.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        cut_addr(addr, self.prefix) == Some(self.network())
    }
}

impl FromStr for Interface {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_interface(s)
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
