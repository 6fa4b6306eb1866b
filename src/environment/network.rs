//! Local IP lookup.

use std::net::{IpAddr, Ipv4Addr};

use local_ip_address::list_afinet_netifas;
use tracing::{debug, warn};

/// Value reported when no usable address is found.
pub const UNKNOWN_IP: &str = "unknown";

/// Find the first usable IPv4 address on this host.
///
/// Loopback (127.*), link-local (169.254.*) and unspecified addresses are
/// skipped. Interfaces are taken in the order the OS reports them.
pub fn probe_local_ipv4() -> Option<Ipv4Addr> {
    let interfaces = match list_afinet_netifas() {
        Ok(ifaces) => ifaces,
        Err(e) => {
            warn!(error = %e, "failed to enumerate network interfaces");
            return None;
        }
    };

    let found = first_usable_ipv4(interfaces.iter().map(|(_, ip)| *ip));
    match found {
        Some(ip) => debug!(%ip, "resolved local IP"),
        None => debug!("no usable local IPv4 address"),
    }
    found
}

/// First address in `addrs` that is a usable IPv4 address.
pub fn first_usable_ipv4<I>(addrs: I) -> Option<Ipv4Addr>
where
    I: IntoIterator<Item = IpAddr>,
{
    addrs.into_iter().find_map(|ip| match ip {
        IpAddr::V4(v4) if is_usable(v4) => Some(v4),
        _ => None,
    })
}

fn is_usable(ip: Ipv4Addr) -> bool {
    !(ip.is_loopback() || ip.is_link_local() || ip.is_unspecified())
}
