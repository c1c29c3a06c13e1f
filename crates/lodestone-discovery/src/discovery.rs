//! Discovery service
//!
//! Holds the network node dependency and configuration; the resolve and
//! connect operations live in their own modules as impl blocks on
//! [`Discovery`].

use crate::cancel::{CancelHandle, CancelSignal};
use crate::config::DiscoveryConfig;
use crate::node::NetworkNode;
use std::sync::Arc;

/// Peer discovery and connection establishment service
///
/// Wraps an externally-owned [`NetworkNode`] and drives DHT address
/// resolution ([`Discovery::resolve_addrs`]) and dial orchestration
/// ([`Discovery::connect`]) against it. Holds no mutable state of its own
/// beyond per-call accumulators; cloning the node `Arc` is the only shared
/// resource.
pub struct Discovery<N: NetworkNode> {
    pub(crate) node: Arc<N>,
    pub(crate) config: DiscoveryConfig,
    pub(crate) cancel: CancelSignal,
}

impl<N: NetworkNode> Discovery<N> {
    /// Create a discovery service and its cancellation handle
    ///
    /// The handle bounds otherwise-unbounded operations: cancelling it
    /// terminates in-flight resolution within one attempt cycle and stops
    /// a dial batch before its next candidate.
    #[must_use]
    pub fn new(node: Arc<N>, config: DiscoveryConfig) -> (Self, CancelHandle) {
        let (handle, signal) = CancelSignal::pair();
        (
            Self {
                node,
                config,
                cancel: signal,
            },
            handle,
        )
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DialFault, LookupFault};
    use crate::event::LookupEvent;
    use crate::node::Connection;
    use async_trait::async_trait;
    use lodestone_addr::{Multiaddr, PeerId};
    use tokio::sync::mpsc;

    struct NullNode;

    #[async_trait]
    impl NetworkNode for NullNode {
        async fn lookup_peer(
            &self,
            _peer: &PeerId,
        ) -> Result<mpsc::Receiver<LookupEvent>, LookupFault> {
            Err(LookupFault::NoRoute)
        }

        async fn dial(&self, _addr: &Multiaddr) -> Result<Connection, DialFault> {
            Err(DialFault::Timeout)
        }
    }

    #[test]
    fn test_construction_exposes_config() {
        let config = DiscoveryConfig::default().with_transport("wss");
        let (discovery, handle) = Discovery::new(Arc::new(NullNode), config.clone());

        assert_eq!(discovery.config(), &config);
        assert!(!handle.is_cancelled());
    }
}
