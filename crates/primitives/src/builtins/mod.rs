use crate::Validator;

/// Accepts text with at least one byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NonEmptyText;

/// Shared instance of [`NonEmptyText`].
pub const NON_EMPTY_TEXT: NonEmptyText = NonEmptyText;

impl Validator<str> for NonEmptyText {
	#[inline]
	fn validate(&self, input: &str) -> bool {
		!input.is_empty()
	}

	fn name(&self) -> &'static str {
		"non_empty_text"
	}
}

impl Validator<String> for NonEmptyText {
	#[inline]
	fn validate(&self, input: &String) -> bool {
		<Self as Validator<str>>::validate(self, input)
	}

	fn name(&self) -> &'static str {
		"non_empty_text"
	}
}

/// Accepts numbers greater than or equal to zero.
///
/// Unsigned integers are always valid. For floats, `NaN` is rejected and `-0.0` is
/// accepted, matching `>= 0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NonNegative;

/// Shared instance of [`NonNegative`].
pub const NON_NEGATIVE: NonNegative = NonNegative;

macro_rules! impl_non_negative {
	($zero:expr => $($ty:ty),+ $(,)?) => {
		$(
			impl Validator<$ty> for NonNegative {
				#[inline]
				#[allow(unused_comparisons)]
				fn validate(&self, input: &$ty) -> bool {
					*input >= $zero
				}

				fn name(&self) -> &'static str {
					"non_negative"
				}
			}
		)+
	};
}

impl_non_negative!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_non_negative!(0.0 => f32, f64);
