//! End-to-end registry scenarios through the public API.

use std::sync::Arc;

use fieldcheck_registry::keys::{BOOL, INT, LONG, STRING, TEXT};
use fieldcheck_registry::{
	DuplicatePolicy, NonEmptyText, NonNegative, RegistryError, RuntimeRegistry, TypeKey,
	Validator, ValidatorRegistry, register_builtins,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn text_and_integer_validators() {
	let mut registry = ValidatorRegistry::new();
	registry.register(TEXT, NonEmptyText).unwrap();
	registry.register(INT, NonNegative).unwrap();

	assert!(registry.lookup(TEXT).unwrap().validate("Kotlin"));
	assert!(registry.lookup(INT).unwrap().validate(&42));
	assert!(!registry.lookup(INT).unwrap().validate(&-1));

	let err = registry.lookup(BOOL).err().expect("bool has no validator");
	assert_eq!(err, RegistryError::NotFound { key: TypeKey::of::<bool>() });
}

#[test]
fn builtins_cover_text_and_integers() {
	let mut registry = ValidatorRegistry::new();
	register_builtins(&mut registry).unwrap();

	let names: Vec<_> = registry.keys().iter().map(TypeKey::name).collect();
	assert_eq!(names, vec!["alloc::string::String", "i32", "i64", "str"]);
	assert!(!registry.validate(STRING, &String::new()).unwrap());
	assert!(registry.validate(LONG, &0).unwrap());
	assert!(!registry.contains(&BOOL.erased()));
}

#[test]
fn builtins_rejected_when_keys_taken() {
	let mut registry = ValidatorRegistry::with_policy(DuplicatePolicy::Reject);
	registry.register(INT, |n: &i32| *n != 0).unwrap();

	let err = register_builtins(&mut registry).unwrap_err();
	assert_eq!(err, RegistryError::Duplicate { key: INT.erased() });
	assert!(!registry.validate(INT, &0).unwrap());
}

/// Startup-built registry published for shared use, then extended at runtime.
#[test]
fn runtime_registry_extends_startup_registry() {
	let mut startup = ValidatorRegistry::new();
	register_builtins(&mut startup).unwrap();
	let registry = Arc::new(RuntimeRegistry::new(startup));

	let reader = {
		let registry = Arc::clone(&registry);
		std::thread::spawn(move || registry.validate(TEXT, "shared").unwrap())
	};
	registry.register(BOOL, |b: &bool| *b).unwrap();

	assert!(reader.join().unwrap());
	assert!(registry.validate(BOOL, &true).unwrap());
	assert_eq!(registry.len(), 5);
}

proptest! {
	/// Registry-mediated validation agrees with the validator itself.
	#[test]
	fn prop_lookup_matches_direct_validation(n in any::<i64>(), s in ".*") {
		let mut registry = ValidatorRegistry::new();
		register_builtins(&mut registry).unwrap();

		prop_assert_eq!(registry.validate(LONG, &n).unwrap(), n >= 0);
		prop_assert_eq!(registry.validate(TEXT, s.as_str()).unwrap(), !s.is_empty());
	}
}
