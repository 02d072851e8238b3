//! Typed field access over a property mapping
//!
//! Every decoder reads its keys through [`Fields`] so that missing keys,
//! null markers and shape errors are reported the same way everywhere.

use pbx_plist::{PlistDictionary, PlistValue};

use crate::error::DecodeError;
use crate::identifier::Identifier;

/// Read-only view of one object's property mapping
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields<'a> {
    mapping: &'a PlistDictionary,
}

impl<'a> Fields<'a> {
    #[inline]
    pub(crate) fn new(mapping: &'a PlistDictionary) -> Self {
        Self { mapping }
    }

    /// Present, non-null value under `key`
    fn present(&self, key: &str) -> Option<&'a PlistValue> {
        self.mapping.get(key).filter(|value| !value.is_null())
    }

    /// Required string
    pub(crate) fn string(&self, key: &str) -> Result<&'a str, DecodeError> {
        match self.present(key) {
            None => Err(DecodeError::missing(key)),
            Some(value) => value
                .as_str()
                .ok_or_else(|| DecodeError::mismatch(key, "string")),
        }
    }

    /// Required identifier
    pub(crate) fn identifier(&self, key: &str) -> Result<Identifier, DecodeError> {
        self.string(key).map(Identifier::from)
    }

    /// Required array of identifiers, order preserved
    pub(crate) fn identifiers(&self, key: &str) -> Result<Vec<Identifier>, DecodeError> {
        let values = self
            .present(key)
            .ok_or_else(|| DecodeError::missing(key))?
            .as_array()
            .ok_or_else(|| DecodeError::mismatch(key, "array of strings"))?;

        values
            .iter()
            .map(|value| {
                value
                    .as_str()
                    .map(Identifier::from)
                    .ok_or_else(|| DecodeError::mismatch(key, "array of strings"))
            })
            .collect()
    }

    /// Optional string; a missing key and the null marker both read as `None`
    pub(crate) fn optional_string(&self, key: &str) -> Result<Option<&'a str>, DecodeError> {
        self.present(key)
            .map(|value| {
                value
                    .as_str()
                    .ok_or_else(|| DecodeError::mismatch(key, "string"))
            })
            .transpose()
    }
}
