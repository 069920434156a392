use crate::TypeKey;

/// Result of a successful registration.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InsertAction {
	/// Key was new; validator inserted.
	InsertedNew,
	/// Key existed; kept the existing validator (policy chose existing).
	KeptExisting,
	/// Key existed; replaced with the new validator (policy chose new).
	ReplacedExisting,
}

/// Registry error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// Nothing is registered for the descriptor.
	#[error("no validator for {key}")]
	NotFound { key: TypeKey },

	/// The descriptor is already registered and the policy rejects duplicates.
	#[error("validator for {key} already registered")]
	Duplicate { key: TypeKey },
}
