//! Property-list values
//!
//! Provides [`PlistValue`] and the insertion-ordered [`PlistDictionary`].

use indexmap::IndexMap;
use serde::Serialize;

use crate::commented::CommentedString;

/// A node of the property-list value tree
///
/// Old-style project property lists only know strings, arrays and
/// dictionaries. [`PlistValue::Null`] exists for upstream converters that
/// represent a missing optional explicitly; encoders never produce it.
///
/// Equality compares comments too, on values and on dictionary keys. Use
/// [`PlistValue::without_comments`] on both sides to compare data alone.
#[derive(Debug, Clone)]
pub enum PlistValue {
    /// Scalar string with optional comment
    String(CommentedString),
    /// Ordered array
    Array(Vec<PlistValue>),
    /// Ordered dictionary
    Dictionary(PlistDictionary),
    /// Explicit null marker
    Null,
}

impl PlistValue {
    /// Uncommented string value
    #[inline]
    #[must_use]
    pub fn string(string: impl Into<String>) -> Self {
        Self::String(CommentedString::new(string))
    }

    /// Commented string value
    #[inline]
    #[must_use]
    pub fn commented(string: impl Into<String>, comment: impl Into<String>) -> Self {
        Self::String(CommentedString::commented(string, comment))
    }

    /// String contents, if this is a string
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(string) => Some(string.as_str()),
            _ => None,
        }
    }

    /// The commented string, if this is a string
    #[inline]
    #[must_use]
    pub fn as_commented(&self) -> Option<&CommentedString> {
        match self {
            Self::String(string) => Some(string),
            _ => None,
        }
    }

    /// Comment of a string value
    #[inline]
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.as_commented().and_then(CommentedString::comment)
    }

    /// Elements, if this is an array
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[PlistValue]> {
        match self {
            Self::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Entries, if this is a dictionary
    #[inline]
    #[must_use]
    pub fn as_dictionary(&self) -> Option<&PlistDictionary> {
        match self {
            Self::Dictionary(dictionary) => Some(dictionary),
            _ => None,
        }
    }

    /// Whether this is the explicit null marker
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Copy of the tree with every comment removed, keys included
    #[must_use]
    pub fn without_comments(&self) -> Self {
        match self {
            Self::String(string) => Self::String(string.without_comment()),
            Self::Array(values) => Self::Array(values.iter().map(Self::without_comments).collect()),
            Self::Dictionary(dictionary) => Self::Dictionary(dictionary.without_comments()),
            Self::Null => Self::Null,
        }
    }

    /// Short name of the variant, used in diagnostics
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Dictionary(_) => "dictionary",
            Self::Null => "null",
        }
    }
}

impl PartialEq for PlistValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a.eq_with_comment(b),
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Dictionary(a), Self::Dictionary(b)) => a == b,
            (Self::Null, Self::Null) => true,
            _ => false,
        }
    }
}

impl Eq for PlistValue {}

impl From<CommentedString> for PlistValue {
    fn from(string: CommentedString) -> Self {
        Self::String(string)
    }
}

impl From<&str> for PlistValue {
    fn from(string: &str) -> Self {
        Self::string(string)
    }
}

impl From<String> for PlistValue {
    fn from(string: String) -> Self {
        Self::string(string)
    }
}

impl From<Vec<PlistValue>> for PlistValue {
    fn from(values: Vec<PlistValue>) -> Self {
        Self::Array(values)
    }
}

impl From<PlistDictionary> for PlistValue {
    fn from(dictionary: PlistDictionary) -> Self {
        Self::Dictionary(dictionary)
    }
}

/// Comments are dropped; null becomes a unit value
impl Serialize for PlistValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String(string) => string.serialize(serializer),
            Self::Array(values) => serializer.collect_seq(values),
            Self::Dictionary(dictionary) => dictionary.serialize(serializer),
            Self::Null => serializer.serialize_unit(),
        }
    }
}

/// Insertion-ordered dictionary of property-list values
///
/// Key order is part of the format, so iteration always follows insertion
/// order and equality is order-sensitive. Lookups take plain `&str` keys;
/// equality also compares key comments.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct PlistDictionary(IndexMap<CommentedString, PlistValue>);

impl PlistDictionary {
    /// Create empty dictionary
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Insert or replace an entry
    ///
    /// A replaced entry keeps its original position.
    pub fn insert(
        &mut self,
        key: impl Into<CommentedString>,
        value: impl Into<PlistValue>,
    ) -> Option<PlistValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Value stored under `key`
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PlistValue> {
        self.0.get(key)
    }

    /// Key and value stored under `key`
    #[inline]
    #[must_use]
    pub fn get_entry(&self, key: &str) -> Option<(&CommentedString, &PlistValue)> {
        self.0.get_key_value(key)
    }

    /// Whether `key` is present (a null value counts as present)
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Remove an entry, preserving the order of the others
    pub fn remove(&mut self, key: &str) -> Option<PlistValue> {
        self.0.shift_remove(key)
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &CommentedString> {
        self.0.keys()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&CommentedString, &PlistValue)> {
        self.0.iter()
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the dictionary has no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy with every comment removed
    #[must_use]
    pub fn without_comments(&self) -> Self {
        self.0
            .iter()
            .map(|(key, value)| (key.without_comment(), value.without_comments()))
            .collect()
    }
}

impl PartialEq for PlistDictionary {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(other.0.iter())
                .all(|((key, value), (their_key, their_value))| {
                    key.eq_with_comment(their_key) && value == their_value
                })
    }
}

impl Eq for PlistDictionary {}

impl<K: Into<CommentedString>, V: Into<PlistValue>> FromIterator<(K, V)> for PlistDictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl IntoIterator for PlistDictionary {
    type Item = (CommentedString, PlistValue);
    type IntoIter = indexmap::map::IntoIter<CommentedString, PlistValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlistDictionary {
    type Item = (&'a CommentedString, &'a PlistValue);
    type IntoIter = indexmap::map::Iter<'a, CommentedString, PlistValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
