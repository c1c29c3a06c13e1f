//! Protocol Segment Registry
//!
//! Each multiaddr segment is a protocol with a registered numeric code and
//! name, optionally carrying a value (an IP address, port, DNS name, or
//! peer identity). The codes follow the multiformats registry so that
//! `protocol_codes()` sequences are meaningful to other stacks.

use crate::error::AddrError;
use crate::peer_id::PeerId;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// A single multiaddr protocol segment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// IPv4 host segment
    Ip4(Ipv4Addr),
    /// IPv6 host segment
    Ip6(Ipv6Addr),
    /// DNS name resolving to either address family
    Dns(String),
    /// DNS name resolving to IPv4
    Dns4(String),
    /// DNS name resolving to IPv6
    Dns6(String),
    /// TCP port
    Tcp(u16),
    /// UDP port
    Udp(u16),
    /// TLS session layer
    Tls,
    /// QUIC version 1 transport
    QuicV1,
    /// WebTransport session over QUIC
    WebTransport,
    /// Certificate hash for WebTransport self-signed certs
    Certhash(String),
    /// WebSocket transport
    Ws,
    /// WebSocket-over-TLS transport
    Wss,
    /// Peer identity layer
    P2p(PeerId),
}

impl Protocol {
    /// Registered numeric code of this segment's protocol
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            Self::Ip4(_) => 4,
            Self::Tcp(_) => 6,
            Self::Ip6(_) => 41,
            Self::Dns(_) => 53,
            Self::Dns4(_) => 54,
            Self::Dns6(_) => 55,
            Self::Udp(_) => 273,
            Self::P2p(_) => 421,
            Self::Tls => 448,
            Self::QuicV1 => 461,
            Self::WebTransport => 465,
            Self::Certhash(_) => 466,
            Self::Ws => 477,
            Self::Wss => 478,
        }
    }

    /// Registered name of this segment's protocol
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ip4(_) => "ip4",
            Self::Tcp(_) => "tcp",
            Self::Ip6(_) => "ip6",
            Self::Dns(_) => "dns",
            Self::Dns4(_) => "dns4",
            Self::Dns6(_) => "dns6",
            Self::Udp(_) => "udp",
            Self::P2p(_) => "p2p",
            Self::Tls => "tls",
            Self::QuicV1 => "quic-v1",
            Self::WebTransport => "webtransport",
            Self::Certhash(_) => "certhash",
            Self::Ws => "ws",
            Self::Wss => "wss",
        }
    }

    /// Look up the registered name for a numeric protocol code
    ///
    /// Returns `None` for codes outside the supported registry.
    #[must_use]
    pub const fn lookup_name(code: u32) -> Option<&'static str> {
        match code {
            4 => Some("ip4"),
            6 => Some("tcp"),
            41 => Some("ip6"),
            53 => Some("dns"),
            54 => Some("dns4"),
            55 => Some("dns6"),
            273 => Some("udp"),
            421 => Some("p2p"),
            448 => Some("tls"),
            461 => Some("quic-v1"),
            465 => Some("webtransport"),
            466 => Some("certhash"),
            477 => Some("ws"),
            478 => Some("wss"),
            _ => None,
        }
    }

    /// Parse one segment from a name and a value iterator
    ///
    /// Value-carrying protocols pull their value from `values`; bare
    /// protocols consume nothing.
    pub(crate) fn from_parts<'a>(
        name: &str,
        values: &mut impl Iterator<Item = &'a str>,
    ) -> Result<Self, AddrError> {
        fn value<'a>(
            protocol: &'static str,
            values: &mut impl Iterator<Item = &'a str>,
        ) -> Result<&'a str, AddrError> {
            match values.next() {
                None => Err(AddrError::MissingValue(protocol)),
                // An empty value would produce a segment with no usable
                // host or identity; fail closed at parse time
                Some("") => Err(AddrError::InvalidSegment {
                    protocol,
                    value: String::new(),
                }),
                Some(v) => Ok(v),
            }
        }

        match name {
            "ip4" => {
                let v = value("ip4", values)?;
                v.parse()
                    .map(Self::Ip4)
                    .map_err(|_| AddrError::InvalidSegment {
                        protocol: "ip4",
                        value: v.to_string(),
                    })
            }
            "ip6" => {
                let v = value("ip6", values)?;
                v.parse()
                    .map(Self::Ip6)
                    .map_err(|_| AddrError::InvalidSegment {
                        protocol: "ip6",
                        value: v.to_string(),
                    })
            }
            "dns" => Ok(Self::Dns(value("dns", values)?.to_string())),
            "dns4" => Ok(Self::Dns4(value("dns4", values)?.to_string())),
            "dns6" => Ok(Self::Dns6(value("dns6", values)?.to_string())),
            "tcp" => {
                let v = value("tcp", values)?;
                v.parse()
                    .map(Self::Tcp)
                    .map_err(|_| AddrError::InvalidSegment {
                        protocol: "tcp",
                        value: v.to_string(),
                    })
            }
            "udp" => {
                let v = value("udp", values)?;
                v.parse()
                    .map(Self::Udp)
                    .map_err(|_| AddrError::InvalidSegment {
                        protocol: "udp",
                        value: v.to_string(),
                    })
            }
            "p2p" => {
                let v = value("p2p", values)?;
                v.parse()
                    .map(Self::P2p)
                    .map_err(|_| AddrError::InvalidSegment {
                        protocol: "p2p",
                        value: v.to_string(),
                    })
            }
            "certhash" => Ok(Self::Certhash(value("certhash", values)?.to_string())),
            "tls" => Ok(Self::Tls),
            "quic-v1" => Ok(Self::QuicV1),
            "webtransport" => Ok(Self::WebTransport),
            "ws" => Ok(Self::Ws),
            "wss" => Ok(Self::Wss),
            other => Err(AddrError::UnknownProtocol(other.to_string())),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ip4(ip) => write!(f, "/ip4/{ip}"),
            Self::Ip6(ip) => write!(f, "/ip6/{ip}"),
            Self::Dns(name) => write!(f, "/dns/{name}"),
            Self::Dns4(name) => write!(f, "/dns4/{name}"),
            Self::Dns6(name) => write!(f, "/dns6/{name}"),
            Self::Tcp(port) => write!(f, "/tcp/{port}"),
            Self::Udp(port) => write!(f, "/udp/{port}"),
            Self::P2p(peer) => write!(f, "/p2p/{peer}"),
            Self::Certhash(hash) => write!(f, "/certhash/{hash}"),
            Self::Tls | Self::QuicV1 | Self::WebTransport | Self::Ws | Self::Wss => {
                write!(f, "/{}", self.name())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_name_roundtrip() {
        let segments = [
            Protocol::Ip4(Ipv4Addr::LOCALHOST),
            Protocol::Ip6(Ipv6Addr::LOCALHOST),
            Protocol::Dns("example.com".to_string()),
            Protocol::Tcp(443),
            Protocol::Udp(443),
            Protocol::Tls,
            Protocol::QuicV1,
            Protocol::WebTransport,
            Protocol::Ws,
            Protocol::Wss,
            Protocol::P2p(PeerId::from_bytes([7u8; 32])),
        ];

        for segment in segments {
            assert_eq!(Protocol::lookup_name(segment.code()), Some(segment.name()));
        }
    }

    #[test]
    fn test_lookup_name_unknown_code() {
        assert_eq!(Protocol::lookup_name(0xFFFF_FFFF), None);
        assert_eq!(Protocol::lookup_name(0), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Protocol::Ip4("10.0.0.1".parse().unwrap()).to_string(),
            "/ip4/10.0.0.1"
        );
        assert_eq!(Protocol::Udp(4001).to_string(), "/udp/4001");
        assert_eq!(Protocol::WebTransport.to_string(), "/webtransport");
    }
}
