//! Project object graph
//!
//! Provides [`ProjectGraph`], the owner of every node and the name resolver
//! used while encoding.
//!
//! The graph is filled first (programmatically or from an `objects`
//! dictionary) and only read afterwards. Lookups take `&self`, so one graph
//! can serve any number of encoders at once.

use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use pbx_plist::{PlistDictionary, PlistValue};
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

use crate::config::CodecConfig;
use crate::error::{DecodeError, GraphError};
use crate::fields::Fields;
use crate::identifier::Identifier;
use crate::kinds::Target;
use crate::object::{entry_mapping, NameLookup, PlistDecode, PlistEncode};

/// `isa` of file reference objects
pub const FILE_REFERENCE_ISA: &str = "PBXFileReference";

/// Kind of build phase, named by its `isa`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr)]
pub enum BuildPhaseKind {
    /// Compile sources
    #[strum(serialize = "PBXSourcesBuildPhase")]
    Sources,
    /// Link frameworks and libraries
    #[strum(serialize = "PBXFrameworksBuildPhase")]
    Frameworks,
    /// Copy bundle resources
    #[strum(serialize = "PBXResourcesBuildPhase")]
    Resources,
    /// Install headers
    #[strum(serialize = "PBXHeadersBuildPhase")]
    Headers,
    /// Copy files to a destination
    #[strum(serialize = "PBXCopyFilesBuildPhase")]
    CopyFiles,
    /// Run a script
    #[strum(serialize = "PBXShellScriptBuildPhase")]
    ShellScript,
    /// Build Carbon resources
    #[strum(serialize = "PBXRezBuildPhase")]
    Rez,
}

impl BuildPhaseKind {
    /// `isa` of the phase object
    #[inline]
    #[must_use]
    pub fn isa(self) -> &'static str {
        self.into()
    }

    /// Label shown when the phase has no explicit name
    #[inline]
    #[must_use]
    pub fn default_name(self) -> &'static str {
        match self {
            Self::Sources => "Sources",
            Self::Frameworks => "Frameworks",
            Self::Resources => "Resources",
            Self::Headers => "Headers",
            Self::CopyFiles => "CopyFiles",
            Self::ShellScript => "ShellScript",
            Self::Rez => "Rez",
        }
    }
}

/// Label-bearing part of a build phase node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPhase {
    kind: BuildPhaseKind,
    name: Option<String>,
}

impl BuildPhase {
    /// Phase without explicit name
    #[inline]
    #[must_use]
    pub fn new(kind: BuildPhaseKind) -> Self {
        Self { kind, name: None }
    }

    /// Phase with explicit name
    #[inline]
    #[must_use]
    pub fn named(kind: BuildPhaseKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
        }
    }

    /// Kind of phase
    #[inline]
    #[must_use]
    pub fn kind(&self) -> BuildPhaseKind {
        self.kind
    }

    /// Explicit name, else the kind's default label
    #[inline]
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.kind.default_name())
    }
}

/// Label-bearing part of a file reference node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReference {
    name: Option<String>,
    path: Option<String>,
}

impl FileReference {
    /// File known by name and/or path
    #[inline]
    #[must_use]
    pub fn new(name: Option<String>, path: Option<String>) -> Self {
        Self { name, path }
    }

    /// File known only by its path
    #[inline]
    #[must_use]
    pub fn with_path(path: impl Into<String>) -> Self {
        Self::new(None, Some(path.into()))
    }

    /// `name`, else the last component of `path`
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or_else(|| {
            self.path.as_deref().map(|path| {
                Path::new(path)
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or(path)
            })
        })
    }
}

/// Every node of a project, keyed by reference
#[derive(Debug, Clone, Default)]
pub struct ProjectGraph {
    config: CodecConfig,
    targets: IndexMap<Identifier, Target>,
    build_phases: IndexMap<Identifier, BuildPhase>,
    files: IndexMap<Identifier, FileReference>,
}

impl ProjectGraph {
    /// Create empty graph with default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create empty graph
    #[inline]
    #[must_use]
    pub fn with_config(config: CodecConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Whether any node uses `reference`
    #[must_use]
    pub fn contains(&self, reference: &Identifier) -> bool {
        self.targets.contains_key(reference)
            || self.build_phases.contains_key(reference)
            || self.files.contains_key(reference)
    }

    fn claim(&self, reference: &Identifier) -> Result<(), GraphError> {
        if self.contains(reference) {
            tracing::warn!(%reference, "duplicate object reference");
            return Err(GraphError::DuplicateReference(reference.clone()));
        }
        Ok(())
    }

    /// Add a target
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateReference`] if the reference is taken
    pub fn insert_target(&mut self, target: impl Into<Target>) -> Result<(), GraphError> {
        let target = target.into();
        self.claim(target.reference())?;
        self.targets.insert(target.reference().clone(), target);
        Ok(())
    }

    /// Add a build phase
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateReference`] if the reference is taken
    pub fn insert_build_phase(
        &mut self,
        reference: impl Into<Identifier>,
        phase: BuildPhase,
    ) -> Result<(), GraphError> {
        let reference = reference.into();
        self.claim(&reference)?;
        self.build_phases.insert(reference, phase);
        Ok(())
    }

    /// Add a file reference
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateReference`] if the reference is taken
    pub fn insert_file_reference(
        &mut self,
        reference: impl Into<Identifier>,
        file: FileReference,
    ) -> Result<(), GraphError> {
        let reference = reference.into();
        self.claim(&reference)?;
        self.files.insert(reference, file);
        Ok(())
    }

    /// Target by reference
    #[inline]
    #[must_use]
    pub fn target(&self, reference: &Identifier) -> Option<&Target> {
        self.targets.get(reference)
    }

    /// Targets in insertion order
    pub fn targets(&self) -> impl Iterator<Item = &Target> {
        self.targets.values()
    }

    /// Build phase by reference
    #[inline]
    #[must_use]
    pub fn build_phase(&self, reference: &Identifier) -> Option<&BuildPhase> {
        self.build_phases.get(reference)
    }

    /// File reference by reference
    #[inline]
    #[must_use]
    pub fn file_reference(&self, reference: &Identifier) -> Option<&FileReference> {
        self.files.get(reference)
    }

    /// Number of nodes of every kind
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len() + self.build_phases.len() + self.files.len()
    }

    /// Whether the graph has no nodes
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build a graph from an `objects` dictionary
    ///
    /// Targets, build phases and file references are ingested; entries with
    /// any other `isa` are skipped.
    ///
    /// # Errors
    /// Returns [`GraphError::Decode`] for the first malformed entry
    pub fn decode_objects(
        objects: &PlistDictionary,
        config: CodecConfig,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::with_config(config);
        tracing::debug!(entries = objects.len(), "decoding objects");

        for (key, value) in objects {
            let decode_error = |source: DecodeError| GraphError::Decode {
                reference: key.as_str().to_owned(),
                source,
            };
            let mapping = entry_mapping(key, value).map_err(decode_error)?;
            let fields = Fields::new(&mapping);
            let isa = fields.string("isa").map_err(decode_error)?;

            if Target::is_target_isa(isa) {
                let target = Target::from_plist(&mapping).map_err(decode_error)?;
                graph.insert_target(target)?;
            } else if let Ok(kind) = BuildPhaseKind::from_str(isa) {
                let phase = BuildPhase {
                    kind,
                    name: fields
                        .optional_string("name")
                        .map_err(decode_error)?
                        .map(str::to_owned),
                };
                graph.insert_build_phase(key.as_str(), phase)?;
            } else if isa == FILE_REFERENCE_ISA {
                let file = FileReference::new(
                    fields
                        .optional_string("name")
                        .map_err(decode_error)?
                        .map(str::to_owned),
                    fields
                        .optional_string("path")
                        .map_err(decode_error)?
                        .map(str::to_owned),
                );
                graph.insert_file_reference(key.as_str(), file)?;
            } else {
                tracing::debug!(reference = key.as_str(), isa, "skipping object");
            }
        }

        Ok(graph)
    }

    /// Encode every target, grouped by `isa` and ordered by reference
    #[must_use]
    pub fn targets_section(&self) -> PlistDictionary {
        let mut targets: Vec<&Target> = self.targets.values().collect();
        targets.sort_by(|a, b| {
            a.isa()
                .cmp(b.isa())
                .then_with(|| a.reference().cmp(b.reference()))
        });

        targets
            .into_iter()
            .map(|target| target.plist_values(self))
            .collect()
    }

    /// Encode targets as a complete `objects` value
    #[inline]
    #[must_use]
    pub fn targets_value(&self) -> PlistValue {
        PlistValue::Dictionary(self.targets_section())
    }

    /// Whether both graphs hold equal targets
    ///
    /// Compares under the stricter of the two configured policies, so the
    /// result does not depend on argument order.
    #[must_use]
    pub fn same_targets(&self, other: &Self) -> bool {
        let policy = self.config.equality.stricter(other.config.equality);
        self.targets.len() == other.targets.len()
            && self.targets.iter().all(|(reference, target)| {
                other
                    .targets
                    .get(reference)
                    .is_some_and(|theirs| target.eq_with(theirs, policy))
            })
    }

    fn lookup_miss(&self, what: &'static str, reference: &Identifier) {
        if self.config.report_lookup_misses {
            tracing::debug!(%reference, what, "unresolved comment lookup");
        } else {
            tracing::trace!(%reference, what, "unresolved comment lookup");
        }
    }
}

impl NameLookup for ProjectGraph {
    fn build_phase_name(&self, reference: &Identifier) -> Option<String> {
        let name = self
            .build_phases
            .get(reference)
            .map(|phase| phase.display_name().to_owned());
        if name.is_none() {
            self.lookup_miss("build phase", reference);
        }
        name
    }

    fn file_name(&self, reference: &Identifier) -> Option<String> {
        let name = self
            .files
            .get(reference)
            .and_then(FileReference::display_name)
            .map(str::to_owned);
        if name.is_none() {
            self.lookup_miss("file", reference);
        }
        name
    }
}
