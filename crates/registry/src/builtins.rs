use fieldcheck_primitives::{NON_EMPTY_TEXT, NON_NEGATIVE};

use crate::keys::{INT, LONG, STRING, TEXT};
use crate::{RegistryError, ValidatorRegistry};

/// Registers the built-in validators with the provided registry.
///
/// Text keys get [`fieldcheck_primitives::NonEmptyText`]; integer keys get
/// [`fieldcheck_primitives::NonNegative`]. Errors only under
/// [`crate::DuplicatePolicy::Reject`] when one of these keys is already taken.
pub fn register_builtins(registry: &mut ValidatorRegistry) -> Result<(), RegistryError> {
	registry.register(TEXT, NON_EMPTY_TEXT)?;
	registry.register(STRING, NON_EMPTY_TEXT)?;
	registry.register(INT, NON_NEGATIVE)?;
	registry.register(LONG, NON_NEGATIVE)?;
	Ok(())
}
