/// Judges whether a value of one fixed type is valid.
///
/// Implementations are stateless and total over their input type: they must not
/// panic and must not have side effects. The `Send + Sync` bound lets a single
/// instance be shared between any number of callers without coordination.
///
/// Values are borrowed so unsized targets such as `str` can be validated directly.
///
/// Any `Fn(&T) -> bool + Send + Sync` is also a validator:
///
/// ```
/// use fieldcheck_primitives::Validator;
///
/// let even = |n: &i32| n % 2 == 0;
/// assert!(even.validate(&4));
/// assert!(!even.validate(&3));
/// ```
pub trait Validator<T: ?Sized>: Send + Sync {
	/// Returns `true` if `input` is valid.
	fn validate(&self, input: &T) -> bool;

	/// Human-readable name used in diagnostics.
	fn name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}
}

impl<T, F> Validator<T> for F
where
	T: ?Sized,
	F: Fn(&T) -> bool + Send + Sync,
{
	#[inline]
	fn validate(&self, input: &T) -> bool {
		self(input)
	}
}
