//! Type-keyed validator storage.
//!
//! # Role
//!
//! Owns the mapping from [`TypeKey`] to the validator responsible for values of that
//! type. Validators of different value types share one map; each entry stores an
//! `Arc<dyn Validator<T>>` behind `dyn Any`, and the checked downcast back to the
//! typed validator happens only in [`ValidatorRegistry::lookup`].
//!
//! # Invariants
//!
//! - An entry stored under `TypeKey::of::<T>()` always wraps an `Arc<dyn Validator<T>>`.
//!   Registration only accepts a [`TypedKey<T>`] together with a `Validator<T>`.
//! - At most one validator per key. Re-registration follows the [`DuplicatePolicy`].

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use fieldcheck_primitives::Validator;
use rustc_hash::FxHashMap;

use crate::{DuplicatePolicy, InsertAction, RegistryError, TypeKey, TypedKey};

/// Type-erased registry entry.
#[derive(Clone)]
struct Entry {
	/// Always an `Arc<dyn Validator<T>>` for the `T` the entry is keyed by.
	validator: Arc<dyn Any + Send + Sync>,
	validator_name: &'static str,
}

impl Entry {
	fn new<T: ?Sized + 'static>(validator: Arc<dyn Validator<T>>) -> Self {
		Self {
			validator_name: validator.name(),
			validator: Arc::new(validator),
		}
	}

	fn downcast<T: ?Sized + 'static>(&self) -> Option<Arc<dyn Validator<T>>> {
		self.validator
			.downcast_ref::<Arc<dyn Validator<T>>>()
			.cloned()
	}
}

/// Mapping from type descriptor to the validator for values of that type.
///
/// Registration takes `&mut self`; once populated the registry can be shared by
/// reference across threads for lookups, or published through
/// [`crate::RuntimeRegistry`] when registrations continue at runtime.
#[derive(Clone, Default)]
pub struct ValidatorRegistry {
	entries: FxHashMap<TypeKey, Entry>,
	policy: DuplicatePolicy,
}

impl ValidatorRegistry {
	/// Creates an empty registry that overwrites on duplicate registration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty registry with the given duplicate policy.
	pub fn with_policy(policy: DuplicatePolicy) -> Self {
		Self {
			entries: FxHashMap::default(),
			policy,
		}
	}

	/// Returns the duplicate policy.
	pub fn policy(&self) -> DuplicatePolicy {
		self.policy
	}

	/// Registers `validator` for values of type `T`.
	pub fn register<T, V>(
		&mut self,
		key: TypedKey<T>,
		validator: V,
	) -> Result<InsertAction, RegistryError>
	where
		T: ?Sized + 'static,
		V: Validator<T> + 'static,
	{
		self.register_shared(key, Arc::new(validator))
	}

	/// Registers an already shared validator for values of type `T`.
	///
	/// [`lookup`](Self::lookup) hands back this same `Arc`.
	pub fn register_shared<T: ?Sized + 'static>(
		&mut self,
		key: TypedKey<T>,
		validator: Arc<dyn Validator<T>>,
	) -> Result<InsertAction, RegistryError> {
		let key = key.erased();
		let entry = Entry::new(validator);

		let Some(existing) = self.entries.get(&key) else {
			tracing::debug!(key = %key, validator = entry.validator_name, "registered validator");
			self.entries.insert(key, entry);
			return Ok(InsertAction::InsertedNew);
		};

		match self.policy {
			DuplicatePolicy::Reject => {
				tracing::warn!(
					key = %key,
					existing = existing.validator_name,
					incoming = entry.validator_name,
					"duplicate validator rejected"
				);
				Err(RegistryError::Duplicate { key })
			}
			policy if policy.incoming_wins() => {
				tracing::debug!(
					key = %key,
					existing = existing.validator_name,
					incoming = entry.validator_name,
					"replaced validator"
				);
				self.entries.insert(key, entry);
				Ok(InsertAction::ReplacedExisting)
			}
			_ => {
				tracing::debug!(
					key = %key,
					existing = existing.validator_name,
					incoming = entry.validator_name,
					"kept existing validator"
				);
				Ok(InsertAction::KeptExisting)
			}
		}
	}

	/// Returns the validator registered for values of type `T`.
	pub fn lookup<T: ?Sized + 'static>(
		&self,
		key: TypedKey<T>,
	) -> Result<Arc<dyn Validator<T>>, RegistryError> {
		let key = key.erased();
		let found = self.entries.get(&key).and_then(Entry::downcast::<T>);
		debug_assert!(
			found.is_some() || !self.entries.contains_key(&key),
			"entry for {key} holds a validator of another type"
		);
		found.ok_or_else(|| {
			tracing::debug!(key = %key, "no validator registered");
			RegistryError::NotFound { key }
		})
	}

	/// Looks up the validator for `T` and runs it on `input`.
	pub fn validate<T: ?Sized + 'static>(
		&self,
		key: TypedKey<T>,
		input: &T,
	) -> Result<bool, RegistryError> {
		Ok(self.lookup(key)?.validate(input))
	}

	/// Returns true if a validator is registered for `key`.
	pub fn contains(&self, key: &TypeKey) -> bool {
		self.entries.contains_key(key)
	}

	/// Returns the registered descriptors, sorted by type name.
	pub fn keys(&self) -> Vec<TypeKey> {
		let mut keys: Vec<_> = self.entries.keys().copied().collect();
		keys.sort_by(|a, b| a.name().cmp(b.name()));
		keys
	}

	/// Returns the name of the validator registered for `key`.
	pub fn validator_name(&self, key: &TypeKey) -> Option<&'static str> {
		self.entries.get(key).map(|entry| entry.validator_name)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl fmt::Debug for ValidatorRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut map = f.debug_map();
		for key in self.keys() {
			map.entry(&key.name(), &self.entries[&key].validator_name);
		}
		map.finish()
	}
}
