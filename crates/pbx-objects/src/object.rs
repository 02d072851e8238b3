//! Graph object contracts
//!
//! Shared identity ([`GraphObject`]) and the traits every concrete entity
//! implements to take part in the `objects` dictionary:
//! - [`Isa`]: the type discriminator written under `isa`
//! - [`PlistDecode`]: property mapping → typed object
//! - [`PlistEncode`]: typed object + [`NameLookup`] → `(key, value)` entry

use pbx_plist::{CommentedString, PlistDictionary, PlistValue};

use crate::error::DecodeError;
use crate::identifier::Identifier;

/// `isa` of target dependency objects, used as the comment on `dependencies`
pub const TARGET_DEPENDENCY_ISA: &str = "PBXTargetDependency";

/// Identity shared by every node of the graph
///
/// The reference is fixed at construction; there is no way to change it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GraphObject {
    reference: Identifier,
}

impl GraphObject {
    /// Create identity
    #[inline]
    #[must_use]
    pub fn new(reference: impl Into<Identifier>) -> Self {
        Self {
            reference: reference.into(),
        }
    }

    /// Object reference
    #[inline]
    #[must_use]
    pub fn reference(&self) -> &Identifier {
        &self.reference
    }
}

/// Read-only name resolution used to synthesize comments
///
/// Implementations must not fail: an unresolvable identifier yields `None`,
/// and the caller emits the value without a comment.
pub trait NameLookup {
    /// Display label of a build phase
    fn build_phase_name(&self, reference: &Identifier) -> Option<String>;

    /// Display label of a file or product
    fn file_name(&self, reference: &Identifier) -> Option<String>;
}

impl<T: NameLookup + ?Sized> NameLookup for &T {
    fn build_phase_name(&self, reference: &Identifier) -> Option<String> {
        (**self).build_phase_name(reference)
    }

    fn file_name(&self, reference: &Identifier) -> Option<String> {
        (**self).file_name(reference)
    }
}

/// Type discriminator of a concrete object kind
pub trait Isa {
    /// Value written under the `isa` key
    const ISA: &'static str;
}

/// Decoding from a property mapping
pub trait PlistDecode: Sized {
    /// Build the object from its mapping, `reference` included
    ///
    /// # Errors
    /// Returns [`DecodeError`] if a required key is missing or malformed
    fn from_plist(mapping: &PlistDictionary) -> Result<Self, DecodeError>;
}

/// Encoding into an `objects` dictionary entry
pub trait PlistEncode {
    /// Key (reference with comment) and value of the entry
    ///
    /// Never fails; unresolved lookups only drop comments.
    fn plist_values<L: NameLookup + ?Sized>(&self, lookup: &L) -> (CommentedString, PlistValue);
}

/// Mapping an object decodes from, built from an `objects` entry
///
/// The entry key becomes `reference`; comments are stripped everywhere.
///
/// # Errors
/// Returns [`DecodeError::TypeMismatch`] if the entry value is not a dictionary
pub fn entry_mapping(
    key: &CommentedString,
    value: &PlistValue,
) -> Result<PlistDictionary, DecodeError> {
    let mut mapping = value
        .as_dictionary()
        .ok_or_else(|| DecodeError::mismatch(key.as_str(), "dictionary"))?
        .without_comments();
    mapping.insert("reference", key.as_str());
    Ok(mapping)
}
