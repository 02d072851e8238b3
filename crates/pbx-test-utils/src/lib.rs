//! Testing utilities for the pbxproj workspace
//!
//! Shared fixtures, a stub name lookup, and helpers that turn encoded entries
//! back into decodable mappings.

#![allow(missing_docs)]

use std::collections::HashMap;

use pbx_objects::{entry_mapping, BuildTarget, Identifier, NameLookup};
use pbx_plist::{CommentedString, PlistDictionary, PlistValue};

/// In-memory [`NameLookup`] with explicit entries
#[derive(Debug, Clone, Default)]
pub struct StubLookup {
    build_phases: HashMap<Identifier, String>,
    files: HashMap<Identifier, String>,
}

impl StubLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_build_phase(mut self, reference: &str, name: &str) -> Self {
        self.build_phases.insert(reference.into(), name.to_string());
        self
    }

    pub fn with_file(mut self, reference: &str, name: &str) -> Self {
        self.files.insert(reference.into(), name.to_string());
        self
    }
}

impl NameLookup for StubLookup {
    fn build_phase_name(&self, reference: &Identifier) -> Option<String> {
        self.build_phases.get(reference).cloned()
    }

    fn file_name(&self, reference: &Identifier) -> Option<String> {
        self.files.get(reference).cloned()
    }
}

pub fn ids(values: &[&str]) -> Vec<Identifier> {
    values.iter().copied().map(Identifier::from).collect()
}

/// `T1` / `C1` / `[P1]` / `Core`, no optionals
pub fn core_target() -> BuildTarget {
    BuildTarget::new("T1", "C1", ids(&["P1"]), vec![], vec![], "Core")
}

pub fn named_target(reference: &str, name: &str) -> BuildTarget {
    BuildTarget::new(reference, format!("{reference}-list"), vec![], vec![], vec![], name)
}

/// Encoded entry turned back into the mapping decoders read
pub fn encode_as_mapping(key: &CommentedString, value: &PlistValue) -> PlistDictionary {
    entry_mapping(key, value).unwrap()
}

/// Keys of a dictionary value, in order
pub fn keys(value: &PlistValue) -> Vec<String> {
    value
        .as_dictionary()
        .unwrap()
        .keys()
        .map(|key| key.as_str().to_owned())
        .collect()
}

/// Route `tracing` output to the test harness; safe to call repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
