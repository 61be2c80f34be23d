use serde_json::{Map, Value};

use crate::{Error, Result, ValueKind};

// Field extraction shared by the metadata constructors. A missing key
// and an explicit `null` both read as unset; anything else must match
// the declared kind exactly, never coerced.

pub(crate) fn strict_str(map: &Map<String, Value>, field: &'static str) -> Result<Option<String>> {
	match map.get(field) {
		None | Some(Value::Null) => Ok(None),
		Some(Value::String(s)) => Ok(Some(s.clone())),
		Some(value) => Err(Error::invalid_field(field, ValueKind::String, value)),
	}
}

pub(crate) fn strict_int(map: &Map<String, Value>, field: &'static str) -> Result<Option<i64>> {
	match map.get(field) {
		None | Some(Value::Null) => Ok(None),
		Some(Value::Number(n)) if n.is_i64() => Ok(n.as_i64()),
		Some(value) => Err(Error::invalid_field(field, ValueKind::Integer, value)),
	}
}

pub(crate) fn strict_float(map: &Map<String, Value>, field: &'static str) -> Result<Option<f64>> {
	match map.get(field) {
		None | Some(Value::Null) => Ok(None),
		Some(Value::Number(n)) if n.is_f64() => Ok(n.as_f64()),
		Some(value) => Err(Error::invalid_field(field, ValueKind::Float, value)),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn map_of(value: Value) -> Map<String, Value> {
		match value {
			Value::Object(map) => map,
			_ => panic!("fixture must be an object"),
		}
	}

	#[test]
	fn integers_do_not_coerce_to_floats() {
		let map = map_of(json!({ "scale": 7 }));
		let err = strict_float(&map, "scale").expect_err("integer must not pass as float");
		assert!(matches!(
			err,
			Error::Validation {
				field: "scale",
				expected: ValueKind::Float,
				actual: ValueKind::Integer,
			}
		));
	}

	#[test]
	fn floats_do_not_truncate_to_integers() {
		let map = map_of(json!({ "count": 1.5 }));
		let err = strict_int(&map, "count").expect_err("float must not pass as integer");
		assert!(matches!(
			err,
			Error::Validation {
				field: "count",
				expected: ValueKind::Integer,
				actual: ValueKind::Float,
			}
		));
	}

	#[test]
	fn integers_beyond_i64_are_flagged_as_big() {
		let map = map_of(json!({ "seed": u64::MAX }));
		let err = strict_int(&map, "seed").expect_err("u64::MAX does not fit i64");
		assert!(matches!(
			err,
			Error::Validation {
				actual: ValueKind::BigInt,
				..
			}
		));
	}

	#[test]
	fn null_and_missing_both_read_as_unset() {
		let map = map_of(json!({ "scheduler": null }));
		assert_eq!(strict_str(&map, "scheduler").expect("null is unset"), None);
		assert_eq!(strict_str(&map, "model").expect("missing is unset"), None);
	}
}
