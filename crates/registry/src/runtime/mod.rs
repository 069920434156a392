//! Runtime registry container with atomic publication.
//!
//! # Role
//!
//! Publishes a [`ValidatorRegistry`] for concurrent readers while still accepting
//! registrations. Readers load the current snapshot without locking; writers clone
//! the snapshot, register into the clone, and publish it with a compare-and-swap.
//!
//! # Invariants
//!
//! - Concurrent registrations are linearizable: none is lost (see
//!   `tests::concurrent_registrations_all_land`).
//! - A snapshot loaded before a registration never observes it.

use std::sync::Arc;

use arc_swap::ArcSwap;
use fieldcheck_primitives::Validator;

use crate::{InsertAction, RegistryError, TypeKey, TypedKey, ValidatorRegistry};

/// Registry wrapper for runtime-extensible validator registries.
pub struct RuntimeRegistry {
	snap: ArcSwap<ValidatorRegistry>,
}

impl RuntimeRegistry {
	/// Publishes a registry populated during startup.
	pub fn new(registry: ValidatorRegistry) -> Self {
		Self {
			snap: ArcSwap::from_pointee(registry),
		}
	}

	/// Returns the current snapshot.
	pub fn snapshot(&self) -> Arc<ValidatorRegistry> {
		self.snap.load_full()
	}

	#[inline]
	pub fn lookup<T: ?Sized + 'static>(
		&self,
		key: TypedKey<T>,
	) -> Result<Arc<dyn Validator<T>>, RegistryError> {
		self.snap.load().lookup(key)
	}

	#[inline]
	pub fn validate<T: ?Sized + 'static>(
		&self,
		key: TypedKey<T>,
		input: &T,
	) -> Result<bool, RegistryError> {
		self.snap.load().validate(key, input)
	}

	pub fn contains(&self, key: &TypeKey) -> bool {
		self.snap.load().contains(key)
	}

	pub fn len(&self) -> usize {
		self.snap.load().len()
	}

	pub fn is_empty(&self) -> bool {
		self.snap.load().is_empty()
	}

	/// Registers `validator` at runtime with linearizable semantics.
	pub fn register<T, V>(
		&self,
		key: TypedKey<T>,
		validator: V,
	) -> Result<InsertAction, RegistryError>
	where
		T: ?Sized + 'static,
		V: Validator<T> + 'static,
	{
		self.register_shared(key, Arc::new(validator))
	}

	/// Registers an already shared validator at runtime.
	pub fn register_shared<T: ?Sized + 'static>(
		&self,
		key: TypedKey<T>,
		validator: Arc<dyn Validator<T>>,
	) -> Result<InsertAction, RegistryError> {
		loop {
			let cur = self.snap.load_full();
			let mut next = (*cur).clone();
			let action = next.register_shared(key, validator.clone())?;
			if action == InsertAction::KeptExisting {
				return Ok(action);
			}

			let prev = self.snap.compare_and_swap(&cur, Arc::new(next));
			if Arc::ptr_eq(&*prev, &cur) {
				return Ok(action);
			}
			tracing::trace!(
				key = %key.erased(),
				"registry changed during registration, retrying"
			);
		}
	}
}

impl From<ValidatorRegistry> for RuntimeRegistry {
	fn from(registry: ValidatorRegistry) -> Self {
		Self::new(registry)
	}
}

impl Default for RuntimeRegistry {
	fn default() -> Self {
		Self::new(ValidatorRegistry::default())
	}
}
