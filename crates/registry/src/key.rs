use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Runtime descriptor of a type, used as a registry lookup key.
///
/// Equality and hashing use the [`TypeId`] alone. The type name is carried for
/// diagnostics only.
#[derive(Clone, Copy)]
pub struct TypeKey {
	id: TypeId,
	name: &'static str,
}

impl TypeKey {
	/// Returns the descriptor of `T`.
	pub fn of<T: ?Sized + 'static>() -> Self {
		Self {
			id: TypeId::of::<T>(),
			name: std::any::type_name::<T>(),
		}
	}

	/// Returns the underlying [`TypeId`].
	pub fn id(&self) -> TypeId {
		self.id
	}

	/// Returns the type name, as reported by [`std::any::type_name`].
	pub fn name(&self) -> &'static str {
		self.name
	}
}

impl PartialEq for TypeKey {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl fmt::Debug for TypeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TypeKey({})", self.name)
	}
}

impl fmt::Display for TypeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

/// Typed handle to the descriptor of `T` with compile-time type information.
///
/// The registry takes typed keys so the descriptor and the validator's value type
/// cannot disagree.
pub struct TypedKey<T: ?Sized + 'static> {
	_marker: PhantomData<fn(&T)>,
}

impl<T: ?Sized + 'static> Clone for TypedKey<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T: ?Sized + 'static> Copy for TypedKey<T> {}

impl<T: ?Sized + 'static> Default for TypedKey<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: ?Sized + 'static> fmt::Debug for TypedKey<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TypedKey<{}>", std::any::type_name::<T>())
	}
}

impl<T: ?Sized + 'static> TypedKey<T> {
	/// Creates the typed key for `T`.
	pub const fn new() -> Self {
		Self {
			_marker: PhantomData,
		}
	}

	/// Returns the untyped descriptor.
	pub fn erased(self) -> TypeKey {
		TypeKey::of::<T>()
	}
}

impl<T: ?Sized + 'static> From<TypedKey<T>> for TypeKey {
	fn from(key: TypedKey<T>) -> Self {
		key.erased()
	}
}

/// Well-known keys.
pub mod keys {
	use super::TypedKey;

	/// Borrowed text.
	pub const TEXT: TypedKey<str> = TypedKey::new();
	/// Owned text.
	pub const STRING: TypedKey<String> = TypedKey::new();
	/// 32-bit signed integer.
	pub const INT: TypedKey<i32> = TypedKey::new();
	/// 64-bit signed integer.
	pub const LONG: TypedKey<i64> = TypedKey::new();
	pub const BOOL: TypedKey<bool> = TypedKey::new();
}
