//! # Lodestone Discovery
//!
//! Peer discovery and connection establishment for a peer-to-peer node.
//!
//! Given a target peer's identity, this crate resolves its
//! network-reachable addresses through a DHT lookup driven against an
//! externally-owned [`NetworkNode`], filters them down to publicly
//! dialable candidates of a preferred transport, and dials each candidate
//! with partial-failure aggregation.
//!
//! This crate does not implement the DHT protocol, the transport stack, or
//! bootstrap management; those live behind the [`NetworkNode`] capability
//! trait.
//!
//! ## Example
//!
//! ```rust,no_run
//! use lodestone_discovery::{Discovery, DiscoveryConfig, NetworkNode};
//! use std::sync::Arc;
//!
//! async fn establish<N: NetworkNode>(node: Arc<N>, peer_id: &str) {
//!     let (discovery, _cancel) = Discovery::new(node, DiscoveryConfig::default());
//!
//!     let addrs = discovery.resolve_addrs(peer_id).await.unwrap();
//!     let connections = discovery.connect(&addrs).await.unwrap();
//!     assert!(!connections.is_empty());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod cancel;
mod config;
mod connector;
mod discovery;
mod error;
mod event;
mod node;
mod resolver;

pub use cancel::CancelHandle;
pub use config::{DiscoveryConfig, DEFAULT_RETRY_DELAY, DEFAULT_TRANSPORT};
pub use discovery::Discovery;
pub use error::{DialFailure, DialFault, DiscoveryError, LookupFault};
pub use event::LookupEvent;
pub use node::{Connection, NetworkNode};

// Re-export the address types callers hold across the API boundary
pub use lodestone_addr::{filter_public_addrs, Multiaddr, PeerId};
