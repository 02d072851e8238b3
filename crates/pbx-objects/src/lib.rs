//! Project Object Graph
//!
//! Typed, reference-identified project objects and their comment-aware
//! property-list codec.
//!
//! # Overview
//!
//! - **Identifier**: opaque reference naming a graph node
//! - **BuildTarget**: fields and codec shared by every target kind
//! - **Target**: native, aggregate and legacy targets, dispatched by `isa`
//! - **ProjectGraph**: node storage and the [`NameLookup`] used for comments
//!
//! Decoding is pure: a property mapping becomes a typed object without touching
//! the graph. Encoding takes a [`NameLookup`] to synthesize the inline comments
//! next to references, and never fails.
//!
//! # Example
//!
//! ```rust
//! use pbx_objects::prelude::*;
//!
//! let mut graph = ProjectGraph::new();
//! graph.insert_build_phase("P1", BuildPhase::new(BuildPhaseKind::Sources)).unwrap();
//!
//! let target = NativeTarget::new(BuildTarget::new("T1", "C1", vec!["P1".into()], vec![], vec![], "Core"));
//! let (key, value) = target.plist_values(&graph);
//!
//! assert_eq!(key.to_string(), "T1 /* Core */");
//! let phases = value.as_dictionary().unwrap().get("buildPhases").unwrap();
//! assert_eq!(phases.as_array().unwrap()[0].comment(), Some("Sources"));
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod identifier;
pub mod kinds;
pub mod object;
pub mod product_type;
pub mod target;

mod fields;

// Re-exports
pub use config::{CodecConfig, EqualityPolicy};
pub use error::{DecodeError, GraphError};
pub use graph::{BuildPhase, BuildPhaseKind, FileReference, ProjectGraph, FILE_REFERENCE_ISA};
pub use identifier::Identifier;
pub use kinds::{AggregateTarget, LegacyTarget, NativeTarget, Target};
pub use object::{
    entry_mapping, GraphObject, Isa, NameLookup, PlistDecode, PlistEncode, TARGET_DEPENDENCY_ISA,
};
pub use product_type::ProductType;
pub use target::BuildTarget;

pub use pbx_plist;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for encoding and decoding objects
    pub use crate::{
        AggregateTarget, BuildPhase, BuildPhaseKind, BuildTarget, CodecConfig, DecodeError,
        EqualityPolicy, FileReference, Identifier, Isa, LegacyTarget, NameLookup, NativeTarget,
        PlistDecode, PlistEncode, ProductType, ProjectGraph, Target,
    };
    pub use pbx_plist::{CommentedString, PlistDictionary, PlistValue};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
