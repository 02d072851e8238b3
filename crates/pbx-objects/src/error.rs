//! Error types for the object graph
//!
//! Decoding fails loudly with [`DecodeError`]; encoding never fails. Graph
//! assembly reports [`GraphError`].

use crate::identifier::Identifier;

/// Failure to turn a property mapping into a typed object
///
/// Decoding never yields a partially-built object.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Required key absent (or holding the null marker)
    #[error("missing field `{0}`")]
    MissingField(String),

    /// Key present with a value of the wrong shape
    #[error("field `{key}` has the wrong type: expected {expected}")]
    TypeMismatch {
        /// Offending key
        key: String,
        /// Description of the accepted shape
        expected: &'static str,
    },
}

impl DecodeError {
    /// Missing required key
    #[inline]
    #[must_use]
    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingField(key.into())
    }

    /// Wrong value shape under `key`
    #[inline]
    #[must_use]
    pub fn mismatch(key: impl Into<String>, expected: &'static str) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            expected,
        }
    }

    /// Key the error refers to
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::MissingField(key) | Self::TypeMismatch { key, .. } => key,
        }
    }
}

/// Errors while assembling a [`ProjectGraph`](crate::ProjectGraph)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Reference already names another live object
    #[error("duplicate object reference: {0}")]
    DuplicateReference(Identifier),

    /// An entry of the `objects` dictionary failed to decode
    #[error("failed to decode object {reference}: {source}")]
    Decode {
        /// Key of the failing entry
        reference: String,
        /// Underlying decode failure
        #[source]
        source: DecodeError,
    },
}
