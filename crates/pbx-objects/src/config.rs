//! Codec configuration
//!
//! Knobs that callers may want to flip without touching the object model.

use serde::{Deserialize, Serialize};

/// Which fields take part in target equality
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EqualityPolicy {
    /// Every field except `productName`; what `==` implements
    #[default]
    Legacy,
    /// Every field, `productName` included
    AllFields,
}

impl EqualityPolicy {
    /// The policy comparing more fields; symmetric in its arguments
    #[inline]
    #[must_use]
    pub fn stricter(self, other: Self) -> Self {
        match (self, other) {
            (Self::Legacy, Self::Legacy) => Self::Legacy,
            _ => Self::AllFields,
        }
    }
}

/// Configuration for graph-level encoding and comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodecConfig {
    /// Equality used when comparing graphs
    pub equality: EqualityPolicy,
    /// Report comment lookup misses at `debug` instead of `trace`
    pub report_lookup_misses: bool,
}

impl CodecConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With equality policy
    #[inline]
    #[must_use]
    pub fn with_equality(mut self, equality: EqualityPolicy) -> Self {
        self.equality = equality;
        self
    }

    /// With lookup-miss reporting
    #[inline]
    #[must_use]
    pub fn with_lookup_miss_reporting(mut self, enabled: bool) -> Self {
        self.report_lookup_misses = enabled;
        self
    }

    /// Parse from JSON; missing keys take their defaults
    ///
    /// # Errors
    /// Returns error if JSON is invalid or a value has the wrong shape
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            equality: EqualityPolicy::Legacy,
            report_lookup_misses: false,
        }
    }
}
