//! Multiaddr
//!
//! An immutable, self-describing network address composed of nested
//! protocol segments. The canonical encoding is the `/`-delimited text
//! form; two addresses are equal iff their canonical encodings are equal,
//! which the segment representation preserves bijectively.

use crate::error::AddrError;
use crate::peer_id::PeerId;
use crate::protocol::Protocol;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// The host component of a multiaddr
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Host {
    /// Literal IP host
    Ip(IpAddr),
    /// DNS name host, not yet resolved
    Name(String),
}

/// A structured network address
///
/// Immutable once constructed; build via [`FromStr`] on the canonical text
/// form or [`Multiaddr::from_segments`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Multiaddr {
    segments: Vec<Protocol>,
}

impl Multiaddr {
    /// Build an address from pre-parsed segments
    ///
    /// # Errors
    ///
    /// Returns [`AddrError::Empty`] for an empty segment list.
    pub fn from_segments(segments: Vec<Protocol>) -> Result<Self, AddrError> {
        if segments.is_empty() {
            return Err(AddrError::Empty);
        }
        Ok(Self { segments })
    }

    /// Iterate over the protocol segments in order
    pub fn iter(&self) -> impl Iterator<Item = &Protocol> {
        self.segments.iter()
    }

    /// The segments of this address, outermost first
    #[must_use]
    pub fn segments(&self) -> &[Protocol] {
        &self.segments
    }

    /// The registered protocol code sequence of this address
    #[must_use]
    pub fn protocol_codes(&self) -> Vec<u32> {
        self.segments.iter().map(Protocol::code).collect()
    }

    /// The host component, taken from the first IP or DNS segment
    #[must_use]
    pub fn host(&self) -> Option<Host> {
        self.segments.iter().find_map(|segment| match segment {
            Protocol::Ip4(ip) => Some(Host::Ip(IpAddr::V4(*ip))),
            Protocol::Ip6(ip) => Some(Host::Ip(IpAddr::V6(*ip))),
            Protocol::Dns(name) | Protocol::Dns4(name) | Protocol::Dns6(name) => {
                Some(Host::Name(name.clone()))
            }
            _ => None,
        })
    }

    /// The peer identity layer, if the address carries one
    #[must_use]
    pub fn peer_id(&self) -> Option<PeerId> {
        self.segments.iter().rev().find_map(|segment| match segment {
            Protocol::P2p(peer) => Some(*peer),
            _ => None,
        })
    }
}

impl FromStr for Multiaddr {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(body) = s.strip_prefix('/') else {
            return Err(if s.is_empty() {
                AddrError::Empty
            } else {
                AddrError::MissingSlash(s.to_string())
            });
        };

        let mut parts = body.split('/');
        let mut segments = Vec::new();
        while let Some(name) = parts.next() {
            if name.is_empty() {
                // Trailing slash or `//`
                continue;
            }
            segments.push(Protocol::from_parts(name, &mut parts)?);
        }

        Self::from_segments(segments)
    }
}

impl fmt::Display for Multiaddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl Serialize for Multiaddr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Multiaddr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peer_hex() -> String {
        "ab".repeat(32)
    }

    #[test]
    fn test_parse_webtransport_addr() {
        let text = format!("/ip4/203.0.114.7/udp/443/quic-v1/webtransport/p2p/{}", peer_hex());
        let addr: Multiaddr = text.parse().unwrap();

        assert_eq!(addr.segments().len(), 5);
        assert_eq!(addr.protocol_codes(), vec![4, 273, 461, 465, 421]);
        assert_eq!(addr.to_string(), text);
    }

    #[test]
    fn test_parse_dns_addr() {
        let addr: Multiaddr = "/dns4/node0.example.org/tcp/443/wss".parse().unwrap();
        assert_eq!(
            addr.host(),
            Some(Host::Name("node0.example.org".to_string()))
        );
        assert_eq!(addr.peer_id(), None);
    }

    #[test]
    fn test_host_is_first_ip_segment() {
        let addr: Multiaddr = "/ip6/::1/tcp/8080".parse().unwrap();
        assert_eq!(addr.host(), Some(Host::Ip("::1".parse().unwrap())));
    }

    #[test]
    fn test_peer_id_extraction() {
        let text = format!("/ip4/1.2.3.4/udp/1/quic-v1/p2p/{}", peer_hex());
        let addr: Multiaddr = text.parse().unwrap();
        assert_eq!(addr.peer_id(), Some(PeerId::from_bytes([0xab; 32])));
    }

    #[test]
    fn test_rejects_empty_and_relative() {
        assert_eq!("".parse::<Multiaddr>(), Err(AddrError::Empty));
        assert_eq!("/".parse::<Multiaddr>(), Err(AddrError::Empty));
        assert!(matches!(
            "ip4/1.2.3.4".parse::<Multiaddr>(),
            Err(AddrError::MissingSlash(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_protocol() {
        assert!(matches!(
            "/ipfs-bitswap/zzz".parse::<Multiaddr>(),
            Err(AddrError::UnknownProtocol(_))
        ));
    }

    #[test]
    fn test_rejects_bad_segment_values() {
        assert!(matches!(
            "/ip4/999.0.0.1".parse::<Multiaddr>(),
            Err(AddrError::InvalidSegment { protocol: "ip4", .. })
        ));
        assert!(matches!(
            "/udp/notaport".parse::<Multiaddr>(),
            Err(AddrError::InvalidSegment { protocol: "udp", .. })
        ));
        assert!(matches!(
            "/tcp".parse::<Multiaddr>(),
            Err(AddrError::MissingValue("tcp"))
        ));
    }

    #[test]
    fn test_rejects_empty_segment_values() {
        for (text, protocol) in [
            ("/dns//tcp/1", "dns"),
            ("/dns4//tcp/1", "dns4"),
            ("/dns6//tcp/1", "dns6"),
            ("/ip4//udp/1", "ip4"),
            ("/p2p//", "p2p"),
            ("/certhash//", "certhash"),
        ] {
            match text.parse::<Multiaddr>() {
                Err(AddrError::InvalidSegment { protocol: p, .. }) => {
                    assert_eq!(p, protocol, "{text}");
                }
                other => panic!("expected InvalidSegment for {text}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_equality_follows_canonical_encoding() {
        let a: Multiaddr = "/ip4/1.2.3.4/udp/443/quic-v1".parse().unwrap();
        let b: Multiaddr = "/ip4/1.2.3.4/udp/443/quic-v1".parse().unwrap();
        let c: Multiaddr = "/ip4/1.2.3.4/udp/444/quic-v1".parse().unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_serde_as_canonical_string() {
        let addr: Multiaddr = "/dns/example.com/tcp/443/tls/ws".parse().unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"/dns/example.com/tcp/443/tls/ws\"");

        let back: Multiaddr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }
}
