//! Error types for the discovery layer
//!
//! The taxonomy separates transient, single-attempt faults (absorbed by the
//! retry loop or accumulated into an aggregate) from terminal,
//! whole-operation failures (the only ones a caller ever sees).

use lodestone_addr::{AddrError, Multiaddr};
use std::fmt;
use thiserror::Error;

/// Fault during a single DHT lookup attempt
///
/// Never surfaced to callers directly; the resolver absorbs these, reports
/// them to the log, and retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupFault {
    /// Lookup attempt timed out
    #[error("lookup timed out")]
    Timeout,

    /// No route to any DHT peer
    #[error("no route to any DHT peer")]
    NoRoute,

    /// Network-level failure
    #[error("network error: {0}")]
    Network(String),

    /// Event stream ended without a terminal peer-found event
    #[error("lookup ended without finding the peer")]
    Exhausted,

    /// Terminal event arrived but carried no addresses
    #[error("peer record contained no addresses")]
    EmptyPeerRecord,
}

/// Fault during a single dial attempt
///
/// Recovered locally: a failed dial never aborts sibling attempts. The
/// orchestrator accumulates these and only surfaces them, in attempt order,
/// when every dial in a batch fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DialFault {
    /// Dial attempt timed out
    #[error("dial timed out")]
    Timeout,

    /// Address unreachable
    #[error("unreachable: {0}")]
    Unreachable(String),

    /// Remote peer rejected the connection
    #[error("connection refused: {0}")]
    Refused(String),

    /// Transport-level failure
    #[error("transport error: {0}")]
    Transport(String),
}

/// A dial fault tagged with the address that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialFailure {
    /// The address that was dialed
    pub addr: Multiaddr,
    /// The fault the dial produced
    pub fault: DialFault,
}

impl fmt::Display for DialFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.addr, self.fault)
    }
}

/// Terminal errors surfaced to discovery callers
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    /// Peer identifier string is malformed; fatal, never retried
    #[error("invalid peer id: {0}")]
    InvalidPeerId(#[from] AddrError),

    /// Zero addresses survived filtering; nothing suitable to try
    #[error("no public {transport} addresses among {total} candidates")]
    NoCandidates {
        /// Number of candidate addresses before filtering
        total: usize,
        /// The transport tag that was required
        transport: String,
    },

    /// Every dial attempt in the batch failed
    #[error("{message}: {} dial failures", failures.len())]
    AllDialsFailed {
        /// Human-readable summary of the original intent
        message: String,
        /// Per-address failures, in attempt order
        failures: Vec<DialFailure>,
    },

    /// Configured retry cap reached without finding the peer
    #[error("lookup retries exhausted after {attempts} attempts")]
    RetriesExhausted {
        /// Number of attempts made
        attempts: u32,
    },

    /// Operation cancelled by the caller
    #[error("operation cancelled")]
    Cancelled,
}

impl DiscoveryError {
    /// Build the aggregate error for a batch where zero dials succeeded
    #[must_use]
    pub fn all_dials_failed(failures: Vec<DialFailure>) -> Self {
        Self::AllDialsFailed {
            message: "failed to connect to peer".to_string(),
            failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(text: &str, fault: DialFault) -> DialFailure {
        DialFailure {
            addr: text.parse().unwrap(),
            fault,
        }
    }

    #[test]
    fn test_aggregate_display_includes_count() {
        let err = DiscoveryError::all_dials_failed(vec![
            failure(
                "/ip4/203.0.114.7/udp/443/quic-v1/webtransport",
                DialFault::Timeout,
            ),
            failure(
                "/ip4/203.0.114.8/udp/443/quic-v1/webtransport",
                DialFault::Refused("handshake rejected".to_string()),
            ),
        ]);

        let text = err.to_string();
        assert!(text.contains("failed to connect to peer"));
        assert!(text.contains("2 dial failures"));
    }

    #[test]
    fn test_aggregate_preserves_failure_order() {
        let first = failure("/ip4/8.8.8.8/udp/1/quic-v1/webtransport", DialFault::Timeout);
        let second = failure(
            "/ip4/8.8.4.4/udp/2/quic-v1/webtransport",
            DialFault::Unreachable("no path".to_string()),
        );

        let err = DiscoveryError::all_dials_failed(vec![first.clone(), second.clone()]);
        match err {
            DiscoveryError::AllDialsFailed { failures, .. } => {
                assert_eq!(failures, vec![first, second]);
            }
            other => panic!("expected AllDialsFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_dial_failure_display() {
        let f = failure(
            "/ip4/203.0.114.7/udp/443/quic-v1/webtransport",
            DialFault::Timeout,
        );
        assert_eq!(
            f.to_string(),
            "/ip4/203.0.114.7/udp/443/quic-v1/webtransport: dial timed out"
        );
    }

    #[test]
    fn test_invalid_peer_id_from_addr_error() {
        let parse_err = "zzz".parse::<lodestone_addr::PeerId>().unwrap_err();
        let err: DiscoveryError = parse_err.into();
        assert!(matches!(err, DiscoveryError::InvalidPeerId(_)));
    }

    #[test]
    fn test_no_candidates_display() {
        let err = DiscoveryError::NoCandidates {
            total: 4,
            transport: "webtransport".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no public webtransport addresses among 4 candidates"
        );
    }
}
