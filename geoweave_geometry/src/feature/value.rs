use geoweave_core::json::JsonValue;
use std::fmt::{Debug, Display};

/// A scalar attribute value.
#[derive(Clone, PartialEq)]
pub enum AttrValue {
	Bool(bool),
	Double(f64),
	Float(f32),
	Int(i64),
	Null,
	String(String),
	UInt(u64),
}

impl AttrValue {
	/// Maps a JSON number to `UInt`/`Int` when it is integral and in range, `Double` otherwise.
	#[must_use]
	pub fn from_json_number(value: f64) -> AttrValue {
		const LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53
		if value.fract() == 0.0 && value.abs() <= LIMIT {
			if value >= 0.0 {
				AttrValue::UInt(value as u64)
			} else {
				AttrValue::Int(value as i64)
			}
		} else {
			AttrValue::Double(value)
		}
	}

	/// Scalars map directly; nested arrays and objects are kept as their compact JSON text.
	#[must_use]
	pub fn from_json(value: &JsonValue) -> AttrValue {
		match value {
			JsonValue::Boolean(b) => AttrValue::Bool(*b),
			JsonValue::Null => AttrValue::Null,
			JsonValue::Number(n) => AttrValue::from_json_number(*n),
			JsonValue::String(s) => AttrValue::String(s.clone()),
			JsonValue::Array(_) | JsonValue::Object(_) => AttrValue::String(value.stringify()),
		}
	}

	#[must_use]
	pub fn to_json(&self) -> JsonValue {
		match self {
			AttrValue::Bool(v) => JsonValue::Boolean(*v),
			AttrValue::Double(v) => JsonValue::Number(*v),
			AttrValue::Float(v) => JsonValue::Number(f64::from(*v)),
			AttrValue::Int(v) => JsonValue::Number(*v as f64),
			AttrValue::Null => JsonValue::Null,
			AttrValue::String(v) => JsonValue::String(v.clone()),
			AttrValue::UInt(v) => JsonValue::Number(*v as f64),
		}
	}

	#[must_use]
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			AttrValue::Double(v) => Some(*v),
			AttrValue::Float(v) => Some(f64::from(*v)),
			AttrValue::Int(v) => Some(*v as f64),
			AttrValue::UInt(v) => Some(*v as f64),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_str(&self) -> Option<&str> {
		match self {
			AttrValue::String(v) => Some(v),
			_ => None,
		}
	}
}

impl Debug for AttrValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::String(v) => f.debug_tuple("String").field(v).finish(),
			Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
			Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
			Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
			Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Self::Null => f.write_str("Null"),
		}
	}
}

impl Display for AttrValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			AttrValue::Bool(v) => write!(f, "{v}"),
			AttrValue::Double(v) => write!(f, "{v}"),
			AttrValue::Float(v) => write!(f, "{v}"),
			AttrValue::Int(v) => write!(f, "{v}"),
			AttrValue::Null => f.write_str("null"),
			AttrValue::String(v) => f.write_str(v),
			AttrValue::UInt(v) => write!(f, "{v}"),
		}
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		AttrValue::String(value.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		AttrValue::String(value)
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		AttrValue::Bool(value)
	}
}

impl From<f32> for AttrValue {
	fn from(value: f32) -> Self {
		AttrValue::Float(value)
	}
}

impl From<f64> for AttrValue {
	fn from(value: f64) -> Self {
		AttrValue::Double(value)
	}
}

impl From<i32> for AttrValue {
	fn from(value: i32) -> Self {
		if value < 0 {
			AttrValue::Int(i64::from(value))
		} else {
			AttrValue::UInt(value as u64)
		}
	}
}

impl From<i64> for AttrValue {
	fn from(value: i64) -> Self {
		AttrValue::Int(value)
	}
}

impl From<u32> for AttrValue {
	fn from(value: u32) -> Self {
		AttrValue::UInt(u64::from(value))
	}
}

impl From<u64> for AttrValue {
	fn from(value: u64) -> Self {
		AttrValue::UInt(value)
	}
}
