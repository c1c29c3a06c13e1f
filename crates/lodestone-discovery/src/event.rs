//! DHT Lookup Events
//!
//! A lookup produces a lazy sequence of these events. Only the terminal
//! [`LookupEvent::FinalPeer`] variant carries usable data; everything else
//! is query progress, logged and discarded by the resolver.

use lodestone_addr::{Multiaddr, PeerId};

/// An event produced during a DHT peer lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupEvent {
    /// A query was sent to a DHT peer
    SendingQuery {
        /// The peer being queried
        to: PeerId,
    },

    /// A DHT peer responded with closer peers
    PeerResponse {
        /// The responding peer
        from: PeerId,
        /// Peers closer to the target, to be queried next
        closer: Vec<PeerId>,
    },

    /// A query to one DHT peer failed; the lookup continues elsewhere
    QueryError {
        /// The peer whose query failed, if known
        from: Option<PeerId>,
        /// Failure description
        error: String,
    },

    /// Terminal event: the target peer was found
    FinalPeer {
        /// The resolved peer identity
        peer: PeerId,
        /// The peer's known addresses
        addrs: Vec<Multiaddr>,
    },
}

impl LookupEvent {
    /// Whether this event terminates the lookup
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::FinalPeer { .. })
    }

    /// Short name for logging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SendingQuery { .. } => "sending-query",
            Self::PeerResponse { .. } => "peer-response",
            Self::QueryError { .. } => "query-error",
            Self::FinalPeer { .. } => "final-peer",
        }
    }
}
