use super::{JsonValue, escape_json_string, stringify};
use std::{collections::BTreeMap, fmt::Debug};

/// JSON object with members sorted by key.
#[derive(Clone, Default, PartialEq)]
pub struct JsonObject(pub BTreeMap<String, JsonValue>);

impl JsonObject {
	#[must_use]
	pub fn new() -> Self {
		Self(BTreeMap::new())
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.get(key)
	}

	pub fn set<T>(&mut self, key: &str, value: T)
	where
		JsonValue: From<T>,
	{
		self.0.insert(key.to_owned(), JsonValue::from(value));
	}

	pub fn iter(&self) -> std::collections::btree_map::Iter<'_, String, JsonValue> {
		self.0.iter()
	}

	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self
			.0
			.iter()
			.map(|(key, value)| format!("\"{}\":{}", escape_json_string(key), stringify(value)))
			.collect::<Vec<_>>();
		format!("{{{}}}", items.join(","))
	}
}

impl Debug for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.0.iter()).finish()
	}
}

impl<T> From<Vec<(&str, T)>> for JsonObject
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonObject(
			input
				.into_iter()
				.map(|(key, value)| (key.to_string(), JsonValue::from(value)))
				.collect(),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn set_replaces_members() {
		let mut object = JsonObject::new();
		object.set("type", "Feature");
		object.set("id", 7);
		object.set("id", "seven");

		assert_eq!(object.get("type"), Some(&JsonValue::from("Feature")));
		assert_eq!(object.get("id"), Some(&JsonValue::from("seven")));
		assert_eq!(object.get("missing"), None);
		assert_eq!(object.iter().count(), 2);
	}

	#[test]
	fn stringify_sorts_keys() {
		let object = JsonObject::from(vec![("b", 2), ("a", 1)]);
		assert_eq!(object.stringify(), r#"{"a":1,"b":2}"#);
		assert_eq!(format!("{object:?}"), r#"{"a": Number(1.0), "b": Number(2.0)}"#);
	}
}
