//! Strings with inline comments
//!
//! Provides [`CommentedString`], the scalar of the project property list.

use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};

/// A string value with an optional inline comment
///
/// As a dictionary key the comment is presentation only: `==` and hashing look
/// at the string alone, so a commented key still finds its entry in a
/// [`PlistDictionary`]. [`CommentedString::eq_with_comment`] compares both.
///
/// # Example
/// ```
/// use pbx_plist::CommentedString;
///
/// let key = CommentedString::commented("T1", "App");
/// assert_eq!(key, CommentedString::new("T1"));
/// assert_eq!(key.to_string(), "T1 /* App */");
/// ```
///
/// [`PlistDictionary`]: crate::PlistDictionary
#[derive(Debug, Clone)]
pub struct CommentedString {
    string: String,
    comment: Option<String>,
}

impl CommentedString {
    /// Create an uncommented string
    #[inline]
    #[must_use]
    pub fn new(string: impl Into<String>) -> Self {
        Self {
            string: string.into(),
            comment: None,
        }
    }

    /// Create a string with a comment
    #[inline]
    #[must_use]
    pub fn commented(string: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            string: string.into(),
            comment: Some(comment.into()),
        }
    }

    /// Replace the comment; `None` removes it
    #[inline]
    #[must_use]
    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    /// The string value
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.string
    }

    /// The comment, if any
    #[inline]
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Same string, comment dropped
    #[inline]
    #[must_use]
    pub fn without_comment(&self) -> Self {
        Self::new(self.string.clone())
    }

    /// Same string and same comment
    #[inline]
    #[must_use]
    pub fn eq_with_comment(&self, other: &Self) -> bool {
        self.string == other.string && self.comment == other.comment
    }

    /// Split into string and comment
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (String, Option<String>) {
        (self.string, self.comment)
    }
}

impl PartialEq for CommentedString {
    fn eq(&self, other: &Self) -> bool {
        self.string == other.string
    }
}

impl Eq for CommentedString {}

// Must agree with `Borrow<str>`: hash exactly what `str` hashes.
impl Hash for CommentedString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.string.hash(state);
    }
}

impl Borrow<str> for CommentedString {
    fn borrow(&self) -> &str {
        &self.string
    }
}

impl From<&str> for CommentedString {
    fn from(string: &str) -> Self {
        Self::new(string)
    }
}

impl From<String> for CommentedString {
    fn from(string: String) -> Self {
        Self::new(string)
    }
}

/// Renders the legacy textual form: `value /* comment */`
impl Display for CommentedString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.comment {
            Some(comment) => write!(f, "{} /* {} */", self.string, comment),
            None => f.write_str(&self.string),
        }
    }
}

impl serde::Serialize for CommentedString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_ignores_comment() {
        let plain = CommentedString::new("P1");
        let commented = CommentedString::commented("P1", "Sources");

        assert_eq!(plain, commented);
        assert_ne!(plain, CommentedString::new("P2"));
    }

    #[test]
    fn eq_with_comment_sees_comment() {
        let sources = CommentedString::commented("P1", "Sources");

        assert!(sources.eq_with_comment(&sources.clone()));
        assert!(!sources.eq_with_comment(&CommentedString::new("P1")));
        assert!(!sources.eq_with_comment(&CommentedString::commented("P1", "Headers")));
        assert!(!sources.eq_with_comment(&CommentedString::commented("P2", "Sources")));
    }

    #[test]
    fn hash_matches_str_lookup() {
        let mut set = HashSet::new();
        set.insert(CommentedString::commented("T1", "App"));

        assert!(set.contains("T1"));
        assert!(!set.contains("T2"));
    }

    #[test]
    fn with_comment_replaces_and_clears() {
        let value = CommentedString::commented("F1", "old");

        let replaced = value.clone().with_comment(Some("new".to_string()));
        assert_eq!(replaced.comment(), Some("new"));

        let cleared = value.with_comment(None);
        assert_eq!(cleared.comment(), None);
        assert_eq!(cleared.as_str(), "F1");
    }

    #[test]
    fn display_renders_inline_comment() {
        assert_eq!(CommentedString::new("name").to_string(), "name");
        assert_eq!(
            CommentedString::commented("P1", "Sources").to_string(),
            "P1 /* Sources */"
        );
    }

    #[test]
    fn empty_comment_is_still_a_comment() {
        let value = CommentedString::commented("X", "");
        assert_eq!(value.comment(), Some(""));
        assert_eq!(value.without_comment().comment(), None);
    }

    #[test]
    fn into_parts_returns_both() {
        let (string, comment) = CommentedString::commented("C1", "list").into_parts();
        assert_eq!(string, "C1");
        assert_eq!(comment.as_deref(), Some("list"));
    }
}
