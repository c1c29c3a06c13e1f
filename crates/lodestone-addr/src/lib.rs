//! # Lodestone Address Model
//!
//! Structured, self-describing network addresses for the Lodestone
//! discovery layer.
//!
//! This crate provides:
//! - [`Multiaddr`]: an immutable sequence of nested protocol segments
//!   (e.g. `/ip4/1.2.3.4/udp/443/quic-v1/webtransport/p2p/<id>`)
//! - [`Protocol`]: the segment registry with its numeric protocol codes
//! - [`PeerId`]: 256-bit peer identity, hex-encoded in text form
//! - [`classify`]: pure reachability and transport predicates used to
//!   select publicly dialable candidates
//!
//! ## Example
//!
//! ```rust
//! use lodestone_addr::{classify, Multiaddr};
//!
//! let addr: Multiaddr = "/ip4/203.0.114.7/udp/443/quic-v1/webtransport"
//!     .parse()
//!     .unwrap();
//!
//! assert!(classify::is_publicly_routable(&addr));
//! assert!(classify::uses_transport(&addr, "webtransport"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
mod error;
mod multiaddr;
mod peer_id;
mod protocol;

pub use classify::filter_public_addrs;
pub use error::AddrError;
pub use multiaddr::{Host, Multiaddr};
pub use peer_id::PeerId;
pub use protocol::Protocol;
