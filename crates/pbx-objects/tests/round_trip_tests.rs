use pbx_objects::{
    BuildTarget, EqualityPolicy, Identifier, NativeTarget, PlistDecode, PlistEncode, ProductType,
};
use pbx_test_utils::{encode_as_mapping, keys, StubLookup};
use proptest::option;
use proptest::prelude::*;

const FIXED_KEYS: [&str; 6] = [
    "isa",
    "buildConfigurationList",
    "buildPhases",
    "buildRules",
    "dependencies",
    "name",
];

fn identifier() -> impl Strategy<Value = Identifier> {
    "[0-9A-F]{24}".prop_map(Identifier::from)
}

// Small alphabet so duplicates show up often
fn identifiers() -> impl Strategy<Value = Vec<Identifier>> {
    proptest::collection::vec("[A-C][0-9]".prop_map(Identifier::from), 0..8)
}

fn product_type() -> impl Strategy<Value = ProductType> {
    proptest::sample::select(ProductType::all().collect::<Vec<_>>())
}

fn build_target() -> impl Strategy<Value = BuildTarget> {
    (
        identifier(),
        identifier(),
        identifiers(),
        identifiers(),
        identifiers(),
        "[A-Za-z0-9 _-]{1,16}",
        option::of("[A-Za-z ]{0,8}"),
        option::of(identifier()),
        option::of(product_type()),
    )
        .prop_map(
            |(reference, list, phases, rules, dependencies, name, product_name, product_reference, product_type)| {
                let mut target = BuildTarget::new(reference, list, phases, rules, dependencies, name);
                if let Some(product_name) = product_name {
                    target = target.with_product_name(product_name);
                }
                if let Some(product_reference) = product_reference {
                    target = target.with_product_reference(product_reference);
                }
                if let Some(product_type) = product_type {
                    target = target.with_product_type(product_type);
                }
                target
            },
        )
}

fn lookup() -> StubLookup {
    StubLookup::new()
        .with_build_phase("A1", "Sources")
        .with_build_phase("B2", "Frameworks")
        .with_file("C3", "App.app")
}

proptest! {
    #[test]
    fn prop_decode_inverts_encode(target in build_target()) {
        let (key, value) = target.plist_values(&lookup(), "PBXNativeTarget");
        let decoded = BuildTarget::from_plist(&encode_as_mapping(&key, &value)).unwrap();

        prop_assert_eq!(&decoded, &target);
        prop_assert!(decoded.eq_with(&target, EqualityPolicy::AllFields));
    }

    #[test]
    fn prop_sequences_keep_order(target in build_target()) {
        let native = NativeTarget::new(target.clone());
        let (key, value) = native.plist_values(&lookup());
        let decoded = NativeTarget::from_plist(&encode_as_mapping(&key, &value)).unwrap();

        prop_assert_eq!(decoded.target().build_phases(), target.build_phases());
        prop_assert_eq!(decoded.target().build_rules(), target.build_rules());
        prop_assert_eq!(decoded.target().dependencies(), target.dependencies());
    }

    #[test]
    fn prop_fixed_keys_then_present_optionals(target in build_target()) {
        let (_, value) = target.plist_values(&lookup(), "PBXNativeTarget");
        let keys = keys(&value);

        prop_assert_eq!(&keys[..6], &FIXED_KEYS.map(String::from)[..]);

        let expected_optionals: Vec<&str> = [
            target.product_name().map(|_| "productName"),
            target.product_type().map(|_| "productType"),
            target.product_reference().map(|_| "productReference"),
        ]
        .into_iter()
        .flatten()
        .collect();
        prop_assert_eq!(&keys[6..], expected_optionals.as_slice());
    }

    #[test]
    fn prop_product_type_only_toggles_its_key(target in build_target(), product_type in product_type()) {
        let (_, with) = target.clone().with_product_type(product_type).plist_values(&lookup(), "PBXNativeTarget");
        let without = BuildTarget::new(
            target.reference().clone(),
            target.build_configuration_list().clone(),
            target.build_phases().to_vec(),
            target.build_rules().to_vec(),
            target.dependencies().to_vec(),
            target.name(),
        );
        let without = match (target.product_name(), target.product_reference()) {
            (Some(name), Some(reference)) => without.with_product_name(name).with_product_reference(reference.clone()),
            (Some(name), None) => without.with_product_name(name),
            (None, Some(reference)) => without.with_product_reference(reference.clone()),
            (None, None) => without,
        };
        let (_, without) = without.plist_values(&lookup(), "PBXNativeTarget");

        let mut with_keys = keys(&with);
        with_keys.retain(|key| key != "productType");
        prop_assert_eq!(with_keys, keys(&without));
    }
}
