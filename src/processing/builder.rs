//! Route construction for accepted rows.

use crate::error::RouteResult;
use crate::models::{parse_address, Interface, ResolvedRoute};

/// Build the route to `destination` through `next_hop`.
///
/// Returns `Ok(None)` when the destination already sits on the next hop's
/// network, since the server reaches it directly.
///
/// # Errors
/// * `RouteError::InvalidAddress` - if `destination` is not an IPv4 address
pub fn build_route(
    destination: &str,
    mask: &str,
    next_hop: &Interface,
    metric: &str,
) -> RouteResult<Option<ResolvedRoute>> {
    let destination_addr = parse_address(destination)?;

    if next_hop.contains(destination_addr) {
        log::info!(
            "Route {destination} is on the same network as the interface {next_hop} and will be skipped."
        );
        return Ok(None);
    }

    Ok(Some(ResolvedRoute {
        destination: destination.trim().to_string(),
        mask: mask.trim().to_string(),
        next_hop: next_hop.addr(),
        metric: metric.trim().to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hop(s: &str) -> Interface {
        s.parse().unwrap()
    }

    #[test]
    fn test_build_route_uses_interface_address() {
        let route = build_route("10.1.1.0", "255.255.255.0", &hop("192.168.1.1/24"), "10")
            .unwrap()
            .unwrap();
        assert_eq!(
            route.to_string(),
            "route -p add 10.1.1.0 mask 255.255.255.0 192.168.1.1 metric 10"
        );
        assert_eq!(route.next_hop, hop("192.168.1.1/24").addr());
    }

    #[test]
    fn test_build_route_same_network_is_suppressed() {
        let route = build_route("192.168.1.50", "255.255.255.255", &hop("192.168.1.1/24"), "1");
        assert_eq!(route.unwrap(), None);
    }

    #[test]
    fn test_build_route_edges_of_network() {
        let next_hop = hop("10.10.10.5/30");
        assert!(build_route("10.10.10.4", "m", &next_hop, "1").unwrap().is_none());
        assert!(build_route("10.10.10.7", "m", &next_hop, "1").unwrap().is_none());
        assert!(build_route("10.10.10.8", "m", &next_hop, "1").unwrap().is_some());
    }

    #[test]
    fn test_build_route_keeps_fields_verbatim() {
        let route = build_route("0.0.0.0", "0.0.0.0", &hop("10.0.0.1/24"), "256")
            .unwrap()
            .unwrap();
        assert_eq!(
            route.to_string(),
            "route -p add 0.0.0.0 mask 0.0.0.0 10.0.0.1 metric 256"
        );
    }

    #[test]
    fn test_build_route_trims_padding() {
        let route = build_route(" 10.1.1.0 ", "255.255.255.0 ", &hop("192.168.1.1/24"), " 10")
            .unwrap()
            .unwrap();
        assert_eq!(
            route.to_string(),
            "route -p add 10.1.1.0 mask 255.255.255.0 192.168.1.1 metric 10"
        );
    }

    #[test]
    fn test_build_route_invalid_destination() {
        assert!(build_route("not-an-ip", "255.0.0.0", &hop("10.0.0.1/24"), "1").is_err());
    }
}
