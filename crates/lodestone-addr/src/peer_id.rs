//! Peer Identity
//!
//! 256-bit peer identifier. The text encoding is 64 lowercase hex
//! characters; malformed encodings are rejected at parse time, before any
//! lookup or dial is attempted.

use crate::error::AddrError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 256-bit peer identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PeerId([u8; 32]);

impl PeerId {
    /// Create a peer id from raw bytes
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes of the peer id
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Generate a random peer id
    ///
    /// Useful for tests and ephemeral identities.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill(&mut bytes[..]);
        Self(bytes)
    }

    /// Render as a 64-character lowercase hex string
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for PeerId {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(AddrError::InvalidPeerId(s.to_string()));
        }
        let decoded = hex::decode(s).map_err(|_| AddrError::InvalidPeerId(s.to_string()))?;
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&decoded);
        Ok(Self(bytes))
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // First 8 bytes are enough to tell peers apart in logs
        write!(f, "PeerId({}..)", hex::encode(&self.0[..8]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_hex() {
        let id = PeerId::random();
        let text = id.to_string();
        assert_eq!(text.len(), 64);

        let parsed: PeerId = text.parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_rejects_short_encoding() {
        let result = "abcd".parse::<PeerId>();
        assert!(matches!(result, Err(AddrError::InvalidPeerId(_))));
    }

    #[test]
    fn test_rejects_non_hex() {
        let bad = "zz".repeat(32);
        let result = bad.parse::<PeerId>();
        assert!(matches!(result, Err(AddrError::InvalidPeerId(_))));
    }

    #[test]
    fn test_random_ids_differ() {
        assert_ne!(PeerId::random(), PeerId::random());
    }

    #[test]
    fn test_debug_is_shortened() {
        let id = PeerId::from_bytes([0xab; 32]);
        let debug = format!("{id:?}");
        assert!(debug.starts_with("PeerId(abababab"));
        assert!(debug.len() < 40);
    }
}
