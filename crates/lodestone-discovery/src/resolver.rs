//! Peer Resolver
//!
//! Drives a DHT lookup for a peer identifier until addresses are found.
//! Each attempt consumes a fresh lookup event stream; a stream that ends
//! without a terminal peer-found event, or faults, counts as a failed
//! attempt and is retried after the configured delay. Retries are
//! unbounded unless the configuration caps them, so the loop runs as an
//! explicit state machine with cancellation checked at every boundary.

use crate::cancel::CancelSignal;
use crate::discovery::Discovery;
use crate::error::{DiscoveryError, LookupFault};
use crate::event::LookupEvent;
use crate::node::NetworkNode;
use lodestone_addr::{Multiaddr, PeerId};

/// Retry loop states
#[derive(Debug)]
enum ResolveState {
    /// Driving one lookup attempt
    Attempting { attempt: u32 },
    /// Waiting out the delay before the next attempt
    BackoffWait { attempt: u32 },
    /// Terminal: addresses found
    Succeeded(Vec<Multiaddr>),
    /// Terminal: caller cancelled
    Cancelled,
}

/// How a single attempt ended short of success
enum AttemptEnd {
    Fault(LookupFault),
    Cancelled,
}

impl<N: NetworkNode> Discovery<N> {
    /// Resolve a peer's known addresses via DHT lookup
    ///
    /// Blocks until at least one address is found, the caller cancels, or
    /// a configured attempt cap is reached. A successful return never
    /// carries an empty list. Transient lookup faults are logged and
    /// retried, never surfaced.
    ///
    /// # Errors
    ///
    /// - [`DiscoveryError::InvalidPeerId`] for a malformed identifier
    ///   (surfaced immediately, never retried)
    /// - [`DiscoveryError::Cancelled`] if the caller cancels
    /// - [`DiscoveryError::RetriesExhausted`] if `max_attempts` is set and
    ///   reached
    pub async fn resolve_addrs(&self, peer_id: &str) -> Result<Vec<Multiaddr>, DiscoveryError> {
        let peer: PeerId = peer_id.parse()?;
        let mut cancel = self.cancel.clone();
        let mut state = ResolveState::Attempting { attempt: 1 };

        loop {
            state = match state {
                ResolveState::Attempting { attempt } => {
                    if cancel.is_cancelled() {
                        ResolveState::Cancelled
                    } else {
                        match self.lookup_once(&peer, &mut cancel).await {
                            Ok(addrs) => ResolveState::Succeeded(addrs),
                            Err(AttemptEnd::Cancelled) => ResolveState::Cancelled,
                            Err(AttemptEnd::Fault(fault)) => {
                                tracing::warn!(
                                    peer = %peer,
                                    attempt,
                                    error = %fault,
                                    "dht lookup attempt failed"
                                );
                                if self.config.max_attempts.is_some_and(|cap| attempt >= cap) {
                                    return Err(DiscoveryError::RetriesExhausted {
                                        attempts: attempt,
                                    });
                                }
                                ResolveState::BackoffWait { attempt }
                            }
                        }
                    }
                }

                ResolveState::BackoffWait { attempt } => {
                    tracing::debug!(
                        peer = %peer,
                        delay_ms = self.config.retry_delay.as_millis() as u64,
                        "waiting before next dht lookup"
                    );
                    tokio::select! {
                        () = tokio::time::sleep(self.config.retry_delay) => {
                            ResolveState::Attempting { attempt: attempt + 1 }
                        }
                        () = cancel.cancelled() => ResolveState::Cancelled,
                    }
                }

                ResolveState::Succeeded(addrs) => {
                    tracing::debug!(peer = %peer, count = addrs.len(), "peer addresses resolved");
                    return Ok(addrs);
                }

                ResolveState::Cancelled => return Err(DiscoveryError::Cancelled),
            };
        }
    }

    /// Drive one lookup attempt to completion
    ///
    /// Consumes the event stream until a terminal event or exhaustion. A
    /// terminal event with no addresses counts as a fault so the caller
    /// never receives an empty list.
    async fn lookup_once(
        &self,
        peer: &PeerId,
        cancel: &mut CancelSignal,
    ) -> Result<Vec<Multiaddr>, AttemptEnd> {
        let mut events = tokio::select! {
            result = self.node.lookup_peer(peer) => result.map_err(AttemptEnd::Fault)?,
            () = cancel.cancelled() => return Err(AttemptEnd::Cancelled),
        };

        loop {
            let event = tokio::select! {
                event = events.recv() => event,
                () = cancel.cancelled() => return Err(AttemptEnd::Cancelled),
            };

            match event {
                Some(LookupEvent::FinalPeer { peer: found, addrs }) => {
                    if addrs.is_empty() {
                        return Err(AttemptEnd::Fault(LookupFault::EmptyPeerRecord));
                    }
                    tracing::trace!(peer = %found, count = addrs.len(), "final peer event");
                    return Ok(addrs);
                }
                Some(event) => {
                    tracing::trace!(peer = %peer, event = event.name(), "lookup event");
                }
                None => return Err(AttemptEnd::Fault(LookupFault::Exhausted)),
            }
        }
    }
}
