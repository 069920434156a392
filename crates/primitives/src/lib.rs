//! Validation primitives: the validator capability and the built-in validators.

/// Built-in stateless validators.
pub mod builtins;
/// The validator capability trait.
pub mod validator;

pub use builtins::{NON_EMPTY_TEXT, NON_NEGATIVE, NonEmptyText, NonNegative};
pub use validator::Validator;
