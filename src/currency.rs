//! Currency tags
//!
//! A currency is an opaque runtime identifier for a monetary denomination.
//! Any string is a legal tag; no registry of known currencies ships with this
//! crate. Tags are compared by their code, and cloning is cheap since the
//! code is held in a shared buffer.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// An opaque currency tag (e.g. `"USD"`, `"EUR"`, `"XAU"`)
///
/// Values tagged with different currencies never combine implicitly; every
/// arithmetic operation checks the tags and reports a mismatch. Minting a
/// tag is total, so untrusted currency names can always be turned into a tag
/// and validated against an expected one afterwards.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Currency(Arc<str>);

impl Currency {
    /// Create a currency tag from its code
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(Arc::from(code.as_ref()))
    }

    /// Get the code of this currency
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(Self::new(code))
    }
}
