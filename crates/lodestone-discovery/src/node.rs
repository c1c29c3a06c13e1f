//! Network Node Capability
//!
//! The externally-owned networking stack this subsystem drives. A
//! [`NetworkNode`] owns the DHT routing table, the transports, and the
//! connection pool; discovery only issues lookups and dials against it.

use crate::error::{DialFault, LookupFault};
use crate::event::LookupEvent;
use async_trait::async_trait;
use lodestone_addr::{Multiaddr, PeerId};
use tokio::sync::mpsc;

/// A live connection to a peer
///
/// Opaque handle owned by the caller once returned; teardown is the
/// caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// Identity of the connected peer, if the address carried one
    pub peer: Option<PeerId>,
    /// The address the connection was established against
    pub remote_addr: Multiaddr,
    /// Node-local connection id
    pub id: u64,
}

/// Externally-provided network node capability
///
/// Implementations are expected to be cheap to share (`Arc`) and safe to
/// drive from multiple concurrent discovery calls.
#[async_trait]
pub trait NetworkNode: Send + Sync {
    /// Start a DHT lookup for a peer, producing a lazy event sequence
    ///
    /// The returned receiver yields [`LookupEvent`]s until the lookup
    /// finishes; the channel closing without a terminal event means the
    /// lookup exhausted its candidates. Dropping the receiver abandons the
    /// lookup.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupFault`] if the lookup cannot be started at all.
    async fn lookup_peer(&self, peer: &PeerId) -> Result<mpsc::Receiver<LookupEvent>, LookupFault>;

    /// Dial an address, producing a live connection on success
    ///
    /// # Errors
    ///
    /// Returns a [`DialFault`] on unreachability, timeout, or rejection.
    async fn dial(&self, addr: &Multiaddr) -> Result<Connection, DialFault>;
}
