//! Path parameter DTOs
//!
//! Missing segments deserialize to empty strings so handlers can answer with a
//! 400 instead of the router rejecting the request.

use serde::Deserialize;

use crate::error::{KvError, Result};

/// Path parameters for `/get/{key}` and `/delete/{key}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeyParams {
    /// The requested key
    #[serde(default)]
    pub key: String,
}

impl KeyParams {
    /// Returns the key, or `KeyRequired` if it is empty.
    pub fn require(self) -> Result<String> {
        if self.key.is_empty() {
            return Err(KvError::KeyRequired);
        }
        Ok(self.key)
    }
}

/// Path parameters for `/set/{key}/{value}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetParams {
    /// The key to store under
    #[serde(default)]
    pub key: String,
    /// The value to store
    #[serde(default)]
    pub value: String,
}

impl SetParams {
    /// Returns `(key, value)`, or `KeyValueRequired` if either is empty.
    pub fn require(self) -> Result<(String, String)> {
        if self.key.is_empty() || self.value.is_empty() {
            return Err(KvError::KeyValueRequired);
        }
        Ok((self.key, self.value))
    }
}
