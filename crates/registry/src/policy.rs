/// Rule applied when a descriptor that already has a validator is registered again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Overwrite with the last validator seen.
	#[default]
	LastWins,
	/// Keep the first validator seen for a key.
	FirstWins,
	/// Keep the first validator and report [`crate::RegistryError::Duplicate`].
	Reject,
}

impl DuplicatePolicy {
	/// Returns true if an incoming registration should replace the existing one.
	#[inline]
	pub(crate) fn incoming_wins(self) -> bool {
		matches!(self, DuplicatePolicy::LastWins)
	}
}
