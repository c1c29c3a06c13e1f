//! Connection Orchestrator
//!
//! Filters candidate addresses down to public candidates of the preferred
//! transport and dials each survivor in order. A peer may be multi-homed:
//! dialing every public candidate and accepting whatever succeeds
//! maximizes connectivity odds under NAT and firewall variance, while
//! full-failure aggregation keeps the diagnostic detail of every attempt.

use crate::discovery::Discovery;
use crate::error::{DialFailure, DiscoveryError};
use crate::node::{Connection, NetworkNode};
use lodestone_addr::{filter_public_addrs, Multiaddr};

impl<N: NetworkNode> Discovery<N> {
    /// Dial the public candidates among `addrs`, collecting every success
    ///
    /// Candidates are filtered for public reachability and the configured
    /// transport, then dialed sequentially in their original relative
    /// order. A failed dial never aborts the remaining attempts. Partial
    /// success is success: if at least one dial succeeds the failures are
    /// only logged.
    ///
    /// # Errors
    ///
    /// - [`DiscoveryError::NoCandidates`] if zero addresses survive
    ///   filtering (nothing suitable to try; no dial is attempted)
    /// - [`DiscoveryError::AllDialsFailed`] if every dial fails, carrying
    ///   the per-address failures in attempt order
    /// - [`DiscoveryError::Cancelled`] if the caller cancels before any
    ///   dial succeeded; completed successes are returned instead
    pub async fn connect(&self, addrs: &[Multiaddr]) -> Result<Vec<Connection>, DiscoveryError> {
        let candidates = filter_public_addrs(addrs, &self.config.transport);
        if candidates.is_empty() {
            return Err(DiscoveryError::NoCandidates {
                total: addrs.len(),
                transport: self.config.transport.clone(),
            });
        }

        tracing::debug!(
            total = addrs.len(),
            candidates = candidates.len(),
            transport = %self.config.transport,
            "dialing public candidates"
        );

        let mut cancel = self.cancel.clone();
        let mut connections = Vec::new();
        let mut failures = Vec::new();

        for addr in &candidates {
            // Cancellation aborts untried candidates; completed outcomes stand
            let outcome = tokio::select! {
                result = self.node.dial(addr) => Some(result),
                () = cancel.cancelled() => None,
            };

            match outcome {
                Some(Ok(connection)) => {
                    tracing::debug!(addr = %addr, id = connection.id, "dial succeeded");
                    connections.push(connection);
                }
                Some(Err(fault)) => {
                    tracing::warn!(addr = %addr, error = %fault, "dial failed");
                    failures.push(DialFailure {
                        addr: addr.clone(),
                        fault,
                    });
                }
                None => {
                    tracing::debug!(
                        established = connections.len(),
                        untried = candidates.len() - connections.len() - failures.len(),
                        "dial batch cancelled"
                    );
                    return if connections.is_empty() {
                        Err(DiscoveryError::Cancelled)
                    } else {
                        Ok(connections)
                    };
                }
            }
        }

        if connections.is_empty() {
            return Err(DiscoveryError::all_dials_failed(failures));
        }

        if !failures.is_empty() {
            tracing::debug!(
                established = connections.len(),
                failed = failures.len(),
                "partial dial success"
            );
        }

        Ok(connections)
    }

    /// Resolve a peer's addresses and connect in one step
    ///
    /// Convenience composition of [`Discovery::resolve_addrs`] and
    /// [`Discovery::connect`].
    ///
    /// # Errors
    ///
    /// Propagates the errors of both steps.
    pub async fn connect_to_peer(&self, peer_id: &str) -> Result<Vec<Connection>, DiscoveryError> {
        let addrs = self.resolve_addrs(peer_id).await?;
        self.connect(&addrs).await
    }
}
