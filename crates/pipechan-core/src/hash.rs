//! Stable content hashing (blake3 over canonical JSON).

use std::fmt;

use serde::Serialize;

use crate::channel::Channel;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash256(pub [u8; 32]);

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

/// Hash any serializable value through its JSON encoding.
pub fn hash_serde<T: Serialize>(value: &T) -> Result<Hash256> {
    let bytes = serde_json::to_vec(value)?;
    Ok(Hash256(*blake3::hash(&bytes).as_bytes()))
}

impl Channel {
    /// Content digest of the rows; equal channels always share a digest.
    pub fn digest(&self) -> Result<Hash256> {
        hash_serde(self)
    }
}
