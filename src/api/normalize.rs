//! Turns raw endpoint payloads into typed records.
//!
//! Each endpoint answers either with the bare payload or with the payload
//! wrapped as `{"data": ...}`. Nothing else is accepted.

use serde_json::Value;

use crate::error::ApiError;
use crate::tree::{DetailRecord, PersonNode};

fn unwrap_data(value: Value) -> Value {
	match value {
		Value::Object(mut map) if map.contains_key("data") => map.remove("data").unwrap_or(Value::Null),
		other => other,
	}
}

pub fn tree_list(value: Value) -> Result<Vec<PersonNode>, ApiError> {
	match unwrap_data(value) {
		list @ Value::Array(_) => Ok(serde_json::from_value(list)?),
		_ => Err(ApiError::UnexpectedShape("family tree must be a list of people")),
	}
}

pub fn member_detail(value: Value) -> Result<DetailRecord, ApiError> {
	match unwrap_data(value) {
		record @ Value::Object(_) => Ok(serde_json::from_value(record)?),
		_ => Err(ApiError::UnexpectedShape("member detail must be an object")),
	}
}
