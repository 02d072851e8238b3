//! Build targets
//!
//! Provides [`BuildTarget`], the fields and codec shared by every concrete
//! target kind. Concrete kinds embed it and pass their `isa` into
//! [`BuildTarget::plist_values`].

use pbx_plist::{CommentedString, PlistDictionary, PlistValue};

use crate::config::EqualityPolicy;
use crate::error::DecodeError;
use crate::fields::Fields;
use crate::identifier::Identifier;
use crate::object::{GraphObject, NameLookup, PlistDecode, TARGET_DEPENDENCY_ISA};
use crate::product_type::ProductType;

/// One buildable unit of a project
///
/// `build_phases`, `build_rules` and `dependencies` keep their order exactly
/// as given; the order of phases is their execution order.
///
/// # Equality
/// `==` follows the legacy contract and ignores `product_name`. Use
/// [`BuildTarget::eq_with`] with [`EqualityPolicy::AllFields`] to include it.
///
/// # Example
/// ```
/// use pbx_objects::{BuildTarget, ProductType};
///
/// let target = BuildTarget::new("T1", "C1", vec!["P1".into()], vec![], vec![], "App")
///     .with_product_type(ProductType::Application);
///
/// assert_eq!(target.name(), "App");
/// assert!(target.product_name().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct BuildTarget {
    object: GraphObject,
    build_configuration_list: Identifier,
    build_phases: Vec<Identifier>,
    build_rules: Vec<Identifier>,
    dependencies: Vec<Identifier>,
    name: String,
    product_name: Option<String>,
    product_reference: Option<Identifier>,
    product_type: Option<ProductType>,
}

impl BuildTarget {
    /// Create target with required fields; optional product fields start absent
    #[must_use]
    pub fn new(
        reference: impl Into<Identifier>,
        build_configuration_list: impl Into<Identifier>,
        build_phases: Vec<Identifier>,
        build_rules: Vec<Identifier>,
        dependencies: Vec<Identifier>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            object: GraphObject::new(reference),
            build_configuration_list: build_configuration_list.into(),
            build_phases,
            build_rules,
            dependencies,
            name: name.into(),
            product_name: None,
            product_reference: None,
            product_type: None,
        }
    }

    /// With product name
    #[inline]
    #[must_use]
    pub fn with_product_name(mut self, product_name: impl Into<String>) -> Self {
        self.product_name = Some(product_name.into());
        self
    }

    /// With product reference
    #[inline]
    #[must_use]
    pub fn with_product_reference(mut self, product_reference: impl Into<Identifier>) -> Self {
        self.product_reference = Some(product_reference.into());
        self
    }

    /// With product type
    #[inline]
    #[must_use]
    pub fn with_product_type(mut self, product_type: ProductType) -> Self {
        self.product_type = Some(product_type);
        self
    }

    /// Shared graph identity
    #[inline]
    #[must_use]
    pub fn object(&self) -> &GraphObject {
        &self.object
    }

    /// Object reference
    #[inline]
    #[must_use]
    pub fn reference(&self) -> &Identifier {
        self.object.reference()
    }

    /// Configuration list reference
    #[inline]
    #[must_use]
    pub fn build_configuration_list(&self) -> &Identifier {
        &self.build_configuration_list
    }

    /// Build phases in execution order
    #[inline]
    #[must_use]
    pub fn build_phases(&self) -> &[Identifier] {
        &self.build_phases
    }

    /// Build rules in declared order
    #[inline]
    #[must_use]
    pub fn build_rules(&self) -> &[Identifier] {
        &self.build_rules
    }

    /// Target dependencies in declared order
    #[inline]
    #[must_use]
    pub fn dependencies(&self) -> &[Identifier] {
        &self.dependencies
    }

    /// Target name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Product name, if set
    #[inline]
    #[must_use]
    pub fn product_name(&self) -> Option<&str> {
        self.product_name.as_deref()
    }

    /// Product file reference, if set
    #[inline]
    #[must_use]
    pub fn product_reference(&self) -> Option<&Identifier> {
        self.product_reference.as_ref()
    }

    /// Product type, if set
    #[inline]
    #[must_use]
    pub fn product_type(&self) -> Option<ProductType> {
        self.product_type
    }

    /// Compare under an explicit equality policy
    #[must_use]
    pub fn eq_with(&self, other: &Self, policy: EqualityPolicy) -> bool {
        match policy {
            EqualityPolicy::Legacy => self == other,
            EqualityPolicy::AllFields => self == other && self.product_name == other.product_name,
        }
    }

    /// Encode as an `objects` entry tagged with `isa`
    ///
    /// Keys are emitted in a fixed order; `productName`, `productType` and
    /// `productReference` appear only when present. Comments come from
    /// `lookup`; a miss leaves the value uncommented.
    pub fn plist_values<L: NameLookup + ?Sized>(
        &self,
        lookup: &L,
        isa: &str,
    ) -> (CommentedString, PlistValue) {
        let mut dictionary = PlistDictionary::new();
        dictionary.insert("isa", isa);

        let configuration_list_comment =
            format!("Build configuration list for {isa} \"{}\"", self.name);
        dictionary.insert(
            "buildConfigurationList",
            PlistValue::commented(self.build_configuration_list.as_str(), configuration_list_comment),
        );

        dictionary.insert(
            "buildPhases",
            PlistValue::Array(
                self.build_phases
                    .iter()
                    .map(|phase| {
                        CommentedString::new(phase.as_str())
                            .with_comment(lookup.build_phase_name(phase))
                            .into()
                    })
                    .collect(),
            ),
        );
        dictionary.insert(
            "buildRules",
            PlistValue::Array(
                self.build_rules
                    .iter()
                    .map(|rule| PlistValue::string(rule.as_str()))
                    .collect(),
            ),
        );
        dictionary.insert(
            "dependencies",
            PlistValue::Array(
                self.dependencies
                    .iter()
                    .map(|dependency| PlistValue::commented(dependency.as_str(), TARGET_DEPENDENCY_ISA))
                    .collect(),
            ),
        );
        dictionary.insert("name", self.name.as_str());

        if let Some(product_name) = &self.product_name {
            dictionary.insert("productName", product_name.as_str());
        }
        if let Some(product_type) = self.product_type {
            dictionary.insert("productType", format!("\"{}\"", product_type.raw_value()));
        }
        if let Some(product_reference) = &self.product_reference {
            dictionary.insert(
                "productReference",
                CommentedString::new(product_reference.as_str())
                    .with_comment(lookup.file_name(product_reference)),
            );
        }

        (
            CommentedString::commented(self.reference().as_str(), self.name.as_str()),
            PlistValue::Dictionary(dictionary),
        )
    }
}

impl PlistDecode for BuildTarget {
    fn from_plist(mapping: &PlistDictionary) -> Result<Self, DecodeError> {
        let fields = Fields::new(mapping);
        let reference = fields.identifier("reference")?;
        tracing::trace!(%reference, "decoding build target");

        let product_type = fields
            .optional_string("productType")?
            .map(|raw| {
                ProductType::from_raw_value(unquote(raw))
                    .ok_or_else(|| DecodeError::mismatch("productType", "product type identifier"))
            })
            .transpose()?;

        Ok(Self {
            build_configuration_list: fields.identifier("buildConfigurationList")?,
            build_phases: fields.identifiers("buildPhases")?,
            build_rules: fields.identifiers("buildRules")?,
            dependencies: fields.identifiers("dependencies")?,
            name: fields.string("name")?.to_owned(),
            product_name: fields.optional_string("productName")?.map(str::to_owned),
            product_reference: fields.optional_string("productReference")?.map(Identifier::from),
            product_type,
            object: GraphObject::new(reference),
        })
    }
}

/// Legacy equality: `product_name` does not take part
impl PartialEq for BuildTarget {
    fn eq(&self, other: &Self) -> bool {
        self.object == other.object
            && self.build_configuration_list == other.build_configuration_list
            && self.build_phases == other.build_phases
            && self.build_rules == other.build_rules
            && self.dependencies == other.dependencies
            && self.name == other.name
            && self.product_reference == other.product_reference
            && self.product_type == other.product_type
    }
}

impl Eq for BuildTarget {}

/// Strip the quotes the encoder wraps product types in
fn unquote(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[derive(Default)]
    struct Names {
        phases: HashMap<&'static str, &'static str>,
        files: HashMap<&'static str, &'static str>,
    }

    impl NameLookup for Names {
        fn build_phase_name(&self, reference: &Identifier) -> Option<String> {
            self.phases.get(reference.as_str()).map(|name| (*name).to_string())
        }

        fn file_name(&self, reference: &Identifier) -> Option<String> {
            self.files.get(reference.as_str()).map(|name| (*name).to_string())
        }
    }

    fn ids(values: &[&str]) -> Vec<Identifier> {
        values.iter().copied().map(Identifier::from).collect()
    }

    fn core_target() -> BuildTarget {
        BuildTarget::new("T1", "C1", ids(&["P1"]), vec![], vec![], "Core")
    }

    fn keys(value: &PlistValue) -> Vec<&str> {
        value
            .as_dictionary()
            .unwrap()
            .keys()
            .map(CommentedString::as_str)
            .collect()
    }

    fn encoded_mapping(target: &BuildTarget) -> PlistDictionary {
        let (key, value) = target.plist_values(&Names::default(), "PBXNativeTarget");
        crate::object::entry_mapping(&key, &value).unwrap()
    }

    #[test]
    fn encodes_minimal_target_with_six_keys() {
        let names = Names {
            phases: HashMap::from([("P1", "Sources")]),
            ..Names::default()
        };
        let (key, value) = core_target().plist_values(&names, "PBXNativeTarget");

        assert_eq!(key.as_str(), "T1");
        assert_eq!(key.comment(), Some("Core"));
        assert_eq!(
            keys(&value),
            vec!["isa", "buildConfigurationList", "buildPhases", "buildRules", "dependencies", "name"]
        );

        let phases = value.as_dictionary().unwrap().get("buildPhases").unwrap();
        let phase = phases.as_array().unwrap()[0].as_commented().unwrap();
        assert_eq!(phase.as_str(), "P1");
        assert_eq!(phase.comment(), Some("Sources"));
    }

    #[test]
    fn configuration_list_comment() {
        let target = BuildTarget::new("T1", "C1", vec![], vec![], vec![], "App");
        let (_, value) = target.plist_values(&Names::default(), "PBXNativeTarget");

        let list = value.as_dictionary().unwrap().get("buildConfigurationList").unwrap();
        assert_eq!(list.as_str(), Some("C1"));
        assert_eq!(
            list.comment(),
            Some("Build configuration list for PBXNativeTarget \"App\"")
        );
    }

    #[test]
    fn lookup_miss_leaves_value_uncommented() {
        let (_, value) = core_target().plist_values(&Names::default(), "PBXNativeTarget");

        let phases = value.as_dictionary().unwrap().get("buildPhases").unwrap();
        assert_eq!(phases.as_array().unwrap()[0].as_str(), Some("P1"));
        assert_eq!(phases.as_array().unwrap()[0].comment(), None);
    }

    #[test]
    fn rules_uncommented_dependencies_commented() {
        let target = BuildTarget::new("T1", "C1", vec![], ids(&["R1"]), ids(&["D1", "D2"]), "App");
        let (_, value) = target.plist_values(&Names::default(), "PBXNativeTarget");
        let dictionary = value.as_dictionary().unwrap();

        let rules = dictionary.get("buildRules").unwrap().as_array().unwrap();
        assert_eq!(rules[0].comment(), None);

        let dependencies = dictionary.get("dependencies").unwrap().as_array().unwrap();
        assert!(dependencies
            .iter()
            .all(|dependency| dependency.comment() == Some("PBXTargetDependency")));
    }

    #[test]
    fn optional_fields_in_fixed_order() {
        let names = Names {
            files: HashMap::from([("F1", "App.app")]),
            ..Names::default()
        };
        let target = core_target()
            .with_product_reference("F1")
            .with_product_type(ProductType::Application)
            .with_product_name("App");
        let (_, value) = target.plist_values(&names, "PBXNativeTarget");
        let dictionary = value.as_dictionary().unwrap();

        assert_eq!(
            keys(&value)[6..].to_vec(),
            vec!["productName", "productType", "productReference"]
        );
        assert_eq!(
            dictionary.get("productType").and_then(PlistValue::as_str),
            Some("\"com.apple.product-type.application\"")
        );
        assert_eq!(dictionary.get("productReference").unwrap().comment(), Some("App.app"));
    }

    #[test]
    fn product_type_presence_only_changes_its_key() {
        let without = core_target();
        let with = core_target().with_product_type(ProductType::Framework);

        let (_, a) = without.plist_values(&Names::default(), "PBXNativeTarget");
        let (_, b) = with.plist_values(&Names::default(), "PBXNativeTarget");

        let mut b_keys = keys(&b);
        b_keys.retain(|key| *key != "productType");
        assert_eq!(keys(&a), b_keys);
    }

    #[test]
    fn decodes_encoded_mapping() {
        let target = BuildTarget::new("T1", "C1", ids(&["P2", "P1", "P2"]), ids(&["R1"]), ids(&["D1"]), "App")
            .with_product_name("")
            .with_product_reference("F1")
            .with_product_type(ProductType::UnitTestBundle);

        let decoded = BuildTarget::from_plist(&encoded_mapping(&target)).unwrap();

        assert_eq!(decoded, target);
        assert!(decoded.eq_with(&target, EqualityPolicy::AllFields));
        assert_eq!(decoded.build_phases(), ids(&["P2", "P1", "P2"]).as_slice());
    }

    #[test]
    fn absent_null_and_empty_product_name() {
        let mut absent = encoded_mapping(&core_target());
        absent.remove("productName");

        let mut null = absent.clone();
        null.insert("productName", PlistValue::Null);

        let mut empty = absent.clone();
        empty.insert("productName", "");

        assert_eq!(BuildTarget::from_plist(&absent).unwrap().product_name(), None);
        assert_eq!(BuildTarget::from_plist(&null).unwrap().product_name(), None);
        assert_eq!(BuildTarget::from_plist(&empty).unwrap().product_name(), Some(""));
    }

    #[test]
    fn null_optionals_decode_as_absent() {
        let mut mapping = encoded_mapping(&core_target());
        mapping.insert("productReference", PlistValue::Null);
        mapping.insert("productType", PlistValue::Null);

        let decoded = BuildTarget::from_plist(&mapping).unwrap();
        assert_eq!(decoded.product_reference(), None);
        assert_eq!(decoded.product_type(), None);
    }

    #[test]
    fn missing_required_field() {
        for key in ["reference", "buildConfigurationList", "buildPhases", "buildRules", "dependencies", "name"] {
            let mut mapping = encoded_mapping(&core_target());
            mapping.remove(key);

            assert_eq!(
                BuildTarget::from_plist(&mapping),
                Err(DecodeError::missing(key)),
                "removing {key}"
            );
        }
    }

    #[test]
    fn wrong_shapes_are_type_mismatches() {
        let mut mapping = encoded_mapping(&core_target());
        mapping.insert("buildPhases", "P1");
        assert_eq!(
            BuildTarget::from_plist(&mapping),
            Err(DecodeError::mismatch("buildPhases", "array of strings"))
        );

        let mut mapping = encoded_mapping(&core_target());
        mapping.insert("name", PlistValue::Array(vec![]));
        assert_eq!(
            BuildTarget::from_plist(&mapping),
            Err(DecodeError::mismatch("name", "string"))
        );
    }

    #[test]
    fn unknown_product_type_is_rejected() {
        let mut mapping = encoded_mapping(&core_target());
        mapping.insert("productType", "\"com.example.gadget\"");

        assert_eq!(
            BuildTarget::from_plist(&mapping),
            Err(DecodeError::mismatch("productType", "product type identifier"))
        );
    }

    #[test]
    fn product_type_accepts_unquoted_value() {
        let mut mapping = encoded_mapping(&core_target());
        mapping.insert("productType", "com.apple.product-type.tool");

        let decoded = BuildTarget::from_plist(&mapping).unwrap();
        assert_eq!(decoded.product_type(), Some(ProductType::CommandLineTool));
    }

    #[test]
    fn legacy_equality_ignores_product_name() {
        let a = core_target().with_product_name("A");
        let b = core_target().with_product_name("B");

        assert_eq!(a, b);
        assert!(a.eq_with(&b, EqualityPolicy::Legacy));
        assert!(!a.eq_with(&b, EqualityPolicy::AllFields));
    }

    #[test]
    fn equality_covers_other_fields() {
        let base = core_target();

        assert_ne!(base, core_target().with_product_type(ProductType::Bundle));
        assert_ne!(base, core_target().with_product_reference("F1"));
        assert_ne!(
            base,
            BuildTarget::new("T1", "C1", ids(&["P1", "P2"]), vec![], vec![], "Core")
        );
        assert_ne!(
            base,
            BuildTarget::new("T2", "C1", ids(&["P1"]), vec![], vec![], "Core")
        );
    }

    #[test]
    fn unquote_only_strips_matching_pair() {
        assert_eq!(unquote("\"x\""), "x");
        assert_eq!(unquote("x"), "x");
        assert_eq!(unquote("\"x"), "\"x");
        assert_eq!(unquote("\""), "\"");
    }
}
