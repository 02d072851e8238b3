//! Property-list value model
//!
//! The in-memory shape of a legacy project property list, where string values
//! may carry an inline human-readable comment.
//!
//! # Core Concepts
//!
//! - [`CommentedString`]: a string plus an optional `/* comment */`
//! - [`PlistValue`]: string, array, ordered dictionary or explicit null
//! - [`PlistDictionary`]: insertion-ordered dictionary keyed by [`CommentedString`]
//!
//! Tokenizing and writing the textual form are left to other layers; this crate
//! only shapes the value tree.
//!
//! # Example
//!
//! ```rust
//! use pbx_plist::{CommentedString, PlistDictionary, PlistValue};
//!
//! let mut dictionary = PlistDictionary::new();
//! dictionary.insert("isa", PlistValue::string("PBXNativeTarget"));
//! dictionary.insert(
//!     "buildConfigurationList",
//!     PlistValue::commented("C1", "Build configuration list for PBXNativeTarget \"App\""),
//! );
//!
//! assert_eq!(dictionary.get("isa").and_then(PlistValue::as_str), Some("PBXNativeTarget"));
//! assert_eq!(dictionary.keys().next().map(CommentedString::as_str), Some("isa"));
//! ```

mod commented;
mod json;
mod value;

pub use commented::CommentedString;
pub use json::JsonError;
pub use value::{PlistDictionary, PlistValue};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
