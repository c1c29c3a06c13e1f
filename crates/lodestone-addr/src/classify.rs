//! Address Classification
//!
//! Pure predicates over [`Multiaddr`] values: public routability of the
//! host component and presence of a target transport in the protocol code
//! sequence. No state, no I/O; addresses without a host fail closed.

use crate::multiaddr::{Host, Multiaddr};
use crate::protocol::Protocol;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Check whether an address's host is globally routable
///
/// Returns `false` for loopback, private-range, link-local, and reserved
/// hosts (IPv4 and IPv6), and for addresses with no host segment at all.
/// DNS-named hosts are considered routable; resolving them is the
/// dialer's concern.
#[must_use]
pub fn is_publicly_routable(addr: &Multiaddr) -> bool {
    match addr.host() {
        Some(Host::Ip(IpAddr::V4(ip))) => ipv4_is_public(ip),
        Some(Host::Ip(IpAddr::V6(ip))) => ipv6_is_public(ip),
        Some(Host::Name(_)) => true,
        None => false,
    }
}

/// Check whether an address uses the given transport
///
/// True iff the address's protocol code sequence contains at least one
/// code whose registered name matches `transport`.
#[must_use]
pub fn uses_transport(addr: &Multiaddr, transport: &str) -> bool {
    addr.protocol_codes()
        .into_iter()
        .any(|code| Protocol::lookup_name(code) == Some(transport))
}

/// Filter addresses down to public candidates of the given transport
///
/// Keeps the sublist for which both [`is_publicly_routable`] and
/// [`uses_transport`] hold, preserving input order. Idempotent.
#[must_use]
pub fn filter_public_addrs(addrs: &[Multiaddr], transport: &str) -> Vec<Multiaddr> {
    addrs
        .iter()
        .filter(|addr| is_publicly_routable(addr))
        .filter(|addr| uses_transport(addr, transport))
        .cloned()
        .collect()
}

fn ipv4_is_public(ip: Ipv4Addr) -> bool {
    let octets = ip.octets();

    // Ranges without stable std predicates checked by mask:
    // 100.64.0.0/10 shared/CGNAT, 192.0.0.0/24 protocol assignments,
    // 198.18.0.0/15 benchmarking, 240.0.0.0/4 reserved.
    let shared = octets[0] == 100 && (octets[1] & 0xC0) == 64;
    let proto_assign = octets[0] == 192 && octets[1] == 0 && octets[2] == 0;
    let benchmarking = octets[0] == 198 && (octets[1] & 0xFE) == 18;
    let reserved = (octets[0] & 0xF0) == 240;

    !(ip.is_unspecified()
        || ip.is_loopback()
        || ip.is_private()
        || ip.is_link_local()
        || ip.is_broadcast()
        || ip.is_documentation()
        || shared
        || proto_assign
        || benchmarking
        || reserved)
}

fn ipv6_is_public(ip: Ipv6Addr) -> bool {
    // v4-mapped addresses classify as their embedded IPv4
    if let Some(v4) = ip.to_ipv4_mapped() {
        return ipv4_is_public(v4);
    }

    let segments = ip.segments();
    let unique_local = (segments[0] & 0xFE00) == 0xFC00;
    let link_local = (segments[0] & 0xFFC0) == 0xFE80;
    let documentation = segments[0] == 0x2001 && segments[1] == 0x0DB8;

    !(ip.is_unspecified() || ip.is_loopback() || unique_local || link_local || documentation)
}
