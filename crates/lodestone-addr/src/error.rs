//! Error types for address parsing and validation.

use thiserror::Error;

/// Errors produced while parsing addresses or peer identities
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddrError {
    /// Address string contained no segments
    #[error("empty multiaddr")]
    Empty,

    /// Address did not start with `/`
    #[error("multiaddr must start with '/': {0}")]
    MissingSlash(String),

    /// Segment name is not in the protocol registry
    #[error("unknown protocol: /{0}")]
    UnknownProtocol(String),

    /// Segment value failed to parse for its protocol
    #[error("invalid value for /{protocol}: {value}")]
    InvalidSegment {
        /// Registered protocol name
        protocol: &'static str,
        /// The offending value text
        value: String,
    },

    /// Segment requires a value but none was present
    #[error("/{0} requires a value")]
    MissingValue(&'static str),

    /// Peer identity string is not a valid 64-character hex encoding
    #[error("invalid peer id: {0}")]
    InvalidPeerId(String),
}
