//! JSON bridge
//!
//! Project files converted to JSON by external tools carry the same tree with
//! explicit nulls. The legacy format has no scalar besides the string, so a
//! JSON boolean or number has no faithful counterpart and is rejected.

use serde_json::Value as JsonValue;

use crate::value::{PlistDictionary, PlistValue};

/// Errors converting JSON into a property-list tree
#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    /// Text is not valid JSON
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Scalar other than a string or null
    #[error("unsupported JSON {kind} at {path}")]
    UnsupportedScalar {
        /// Location of the scalar, `$` being the root
        path: String,
        /// `"boolean"` or `"number"`
        kind: &'static str,
    },
}

impl JsonError {
    fn scalar(path: &str, kind: &'static str) -> Self {
        Self::UnsupportedScalar {
            path: path.to_owned(),
            kind,
        }
    }
}

impl PlistValue {
    /// Convert a JSON tree into a property-list tree
    ///
    /// `null` maps to [`PlistValue::Null`].
    ///
    /// # Errors
    /// Returns [`JsonError::UnsupportedScalar`] for the first boolean or number
    pub fn from_json(value: JsonValue) -> Result<Self, JsonError> {
        Self::from_json_at(value, "$")
    }

    fn from_json_at(value: JsonValue, path: &str) -> Result<Self, JsonError> {
        match value {
            JsonValue::Null => Ok(Self::Null),
            JsonValue::String(string) => Ok(Self::string(string)),
            JsonValue::Bool(_) => Err(JsonError::scalar(path, "boolean")),
            JsonValue::Number(_) => Err(JsonError::scalar(path, "number")),
            JsonValue::Array(values) => values
                .into_iter()
                .enumerate()
                .map(|(index, value)| Self::from_json_at(value, &format!("{path}[{index}]")))
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Array),
            JsonValue::Object(entries) => entries
                .into_iter()
                .map(|(key, value)| {
                    let value = Self::from_json_at(value, &format!("{path}.{key}"))?;
                    Ok::<_, JsonError>((key, value))
                })
                .collect::<Result<PlistDictionary, JsonError>>()
                .map(Self::Dictionary),
        }
    }

    /// Parse JSON text into a property-list tree
    ///
    /// # Errors
    /// Returns error if the text is not valid JSON or holds a boolean or number
    pub fn from_json_str(json: &str) -> Result<Self, JsonError> {
        let value = serde_json::from_str::<JsonValue>(json)?;
        Self::from_json(value)
    }

    /// Convert to a JSON tree, dropping comments
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::String(string) => JsonValue::String(string.as_str().to_owned()),
            Self::Array(values) => JsonValue::Array(values.iter().map(Self::to_json).collect()),
            Self::Dictionary(dictionary) => JsonValue::Object(
                dictionary
                    .iter()
                    .map(|(key, value)| (key.as_str().to_owned(), value.to_json()))
                    .collect(),
            ),
            Self::Null => JsonValue::Null,
        }
    }
}

impl TryFrom<JsonValue> for PlistValue {
    type Error = JsonError;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        Self::from_json(value)
    }
}
