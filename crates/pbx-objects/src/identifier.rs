//! Object identifiers
//!
//! Provides [`Identifier`], the opaque reference naming a node of the project
//! graph.

use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};

/// Opaque reference to a graph object
///
/// Identifiers carry no meaning beyond value equality. They are unique within
/// a graph and double as the object's key in the serialized `objects`
/// dictionary.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Create identifier from any string
    #[inline]
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw identifier text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the raw string
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn equality_is_by_value() {
        assert_eq!(Identifier::new("T1"), Identifier::from("T1"));
        assert_ne!(Identifier::new("T1"), Identifier::new("t1"));
    }

    #[test]
    fn borrowed_lookup() {
        let mut names = HashMap::new();
        names.insert(Identifier::new("F1"), "App.app");
        assert_eq!(names.get("F1"), Some(&"App.app"));
    }

    #[test]
    fn display_is_raw_text() {
        let id = Identifier::new("13B07F861A680F5B00A75B9A");
        assert_eq!(id.to_string(), "13B07F861A680F5B00A75B9A");
        assert_eq!(id.into_string(), "13B07F861A680F5B00A75B9A");
    }
}
