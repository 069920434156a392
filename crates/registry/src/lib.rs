//! Type-keyed validator registry.
//!
//! Maps a runtime type descriptor to the validator responsible for values of that
//! type, and hands validators back with their static type intact.
//!
//! # Mental Model
//!
//! 1. **Startup:** the application builds a [`ValidatorRegistry`] and registers
//!    validators with [`TypedKey`]s (see [`keys`] and [`register_builtins`]).
//! 2. **Consumption:** callers [`lookup`](ValidatorRegistry::lookup) a key and receive
//!    an `Arc<dyn Validator<T>>` that accepts exactly `T`, or
//!    [`RegistryError::NotFound`] naming the missing type.
//! 3. **Extension:** when registrations must continue alongside readers, publish the
//!    registry through a [`RuntimeRegistry`].
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`ValidatorRegistry`] | Owned map from descriptor to validator. |
//! | [`RuntimeRegistry`] | Atomically published registry for concurrent use. |
//! | [`TypeKey`] | Untyped runtime type descriptor. |
//! | [`TypedKey`] | Descriptor handle carrying its type at compile time. |
//! | [`DuplicatePolicy`] | Rule for re-registering an existing descriptor. |
//!
//! ```
//! use fieldcheck_registry::keys::{BOOL, INT, TEXT};
//! use fieldcheck_registry::{
//! 	NonEmptyText, NonNegative, RegistryError, Validator, ValidatorRegistry,
//! };
//!
//! let mut registry = ValidatorRegistry::new();
//! registry.register(TEXT, NonEmptyText)?;
//! registry.register(INT, NonNegative)?;
//!
//! assert!(registry.lookup(TEXT)?.validate("Kotlin"));
//! assert!(!registry.lookup(INT)?.validate(&-1));
//! assert!(matches!(registry.lookup(BOOL), Err(RegistryError::NotFound { .. })));
//! # Ok::<(), RegistryError>(())
//! ```

mod builtins;
mod error;
mod key;
mod policy;
mod registry;
mod runtime;

pub use builtins::register_builtins;
pub use error::{InsertAction, RegistryError};
// Re-exported so registry users need a single dependency.
pub use fieldcheck_primitives::{
	NON_EMPTY_TEXT, NON_NEGATIVE, NonEmptyText, NonNegative, Validator,
};
pub use key::{TypeKey, TypedKey, keys};
pub use policy::DuplicatePolicy;
pub use registry::ValidatorRegistry;
pub use runtime::RuntimeRegistry;
