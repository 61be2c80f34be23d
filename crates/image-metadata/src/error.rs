use std::fmt;

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("invalid value for field `{field}`: expected {expected}, found {actual}")]
	Validation {
		field: &'static str,
		expected: ValueKind,
		actual: ValueKind,
	},
	#[error("metadata must be a JSON object, found {0}")]
	NotAnObject(ValueKind),

	#[error("serde error {0}")]
	Serde(#[from] serde_json::Error),
}

impl Error {
	pub(crate) fn invalid_field(field: &'static str, expected: ValueKind, value: &Value) -> Self {
		Self::Validation {
			field,
			expected,
			actual: ValueKind::of(value),
		}
	}
}

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of a JSON value, used for validation
/// diagnostics.
///
/// Integer vs. float follows the number's stored representation, so `7`
/// and `7.0` classify differently. Integers that don't fit `i64` are
/// `BigInt`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
	Null,
	Bool,
	Integer,
	BigInt,
	Float,
	String,
	Array,
	Object,
}

impl ValueKind {
	#[must_use]
	pub fn of(value: &Value) -> Self {
		match value {
			Value::Null => Self::Null,
			Value::Bool(_) => Self::Bool,
			Value::Number(n) if n.is_i64() => Self::Integer,
			Value::Number(n) if n.is_f64() => Self::Float,
			Value::Number(_) => Self::BigInt,
			Value::String(_) => Self::String,
			Value::Array(_) => Self::Array,
			Value::Object(_) => Self::Object,
		}
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Null => "null",
			Self::Bool => "a boolean",
			Self::Integer => "an integer",
			Self::BigInt => "an out-of-range integer",
			Self::Float => "a float",
			Self::String => "a string",
			Self::Array => "an array",
			Self::Object => "an object",
		})
	}
}
