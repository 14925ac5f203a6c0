use super::{JsonArray, JsonObject, stringify};
use anyhow::{Result, bail};

#[derive(Clone, Debug, PartialEq)]
pub enum JsonValue {
	Array(JsonArray),
	Boolean(bool),
	Null,
	Number(f64),
	Object(JsonObject),
	String(String),
}

impl JsonValue {
	#[must_use]
	pub fn type_as_str(&self) -> &'static str {
		match self {
			JsonValue::Array(_) => "array",
			JsonValue::Boolean(_) => "boolean",
			JsonValue::Null => "null",
			JsonValue::Number(_) => "number",
			JsonValue::Object(_) => "object",
			JsonValue::String(_) => "string",
		}
	}

	#[must_use]
	pub fn stringify(&self) -> String {
		stringify(self)
	}

	pub fn as_array(&self) -> Result<&JsonArray> {
		match self {
			JsonValue::Array(array) => Ok(array),
			_ => bail!("expected an array, found a {}", self.type_as_str()),
		}
	}

	pub fn as_str(&self) -> Result<&str> {
		match self {
			JsonValue::String(text) => Ok(text),
			_ => bail!("expected a string, found a {}", self.type_as_str()),
		}
	}

	pub fn as_number(&self) -> Result<f64> {
		match self {
			JsonValue::Number(value) => Ok(*value),
			_ => bail!("expected a number, found a {}", self.type_as_str()),
		}
	}
}

impl From<&str> for JsonValue {
	fn from(input: &str) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<String> for JsonValue {
	fn from(input: String) -> Self {
		JsonValue::String(input)
	}
}

impl From<bool> for JsonValue {
	fn from(input: bool) -> Self {
		JsonValue::Boolean(input)
	}
}

impl From<JsonArray> for JsonValue {
	fn from(input: JsonArray) -> Self {
		JsonValue::Array(input)
	}
}

impl From<JsonObject> for JsonValue {
	fn from(input: JsonObject) -> Self {
		JsonValue::Object(input)
	}
}

impl<T> From<Vec<T>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		JsonValue::Array(JsonArray::from(input))
	}
}

impl<T> From<Option<T>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Option<T>) -> Self {
		input.map_or(JsonValue::Null, JsonValue::from)
	}
}

macro_rules! impl_from_number {
	($($t:ty),+) => {
		$(
			impl From<$t> for JsonValue {
				fn from(input: $t) -> Self {
					JsonValue::Number(input as f64)
				}
			}
		)+
	};
}

impl_from_number!(f32, f64, u8, u16, u32, u64, usize, i8, i16, i32, i64);
