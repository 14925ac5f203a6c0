use super::AttrValue;
use geoweave_core::json::JsonObject;
use std::{
	collections::{BTreeMap, btree_map},
	fmt::Debug,
};

/// String-keyed attribute map of a sub-feature.
#[derive(Clone, Default, PartialEq)]
pub struct Attributes(BTreeMap<String, AttrValue>);

impl Attributes {
	#[must_use]
	pub const fn new() -> Attributes {
		Attributes(BTreeMap::new())
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
		self.0.insert(key.into(), value.into());
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&AttrValue> {
		self.0.get(key)
	}

	pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
		self.0.remove(key)
	}

	pub fn iter(&self) -> btree_map::Iter<'_, String, AttrValue> {
		self.0.iter()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		JsonObject(self.0.iter().map(|(k, v)| (k.clone(), v.to_json())).collect())
	}
}

impl Debug for Attributes {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.0.iter()).finish()
	}
}

impl IntoIterator for Attributes {
	type Item = (String, AttrValue);
	type IntoIter = btree_map::IntoIter<String, AttrValue>;
	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a Attributes {
	type Item = (&'a String, &'a AttrValue);
	type IntoIter = btree_map::Iter<'a, String, AttrValue>;
	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl FromIterator<(String, AttrValue)> for Attributes {
	fn from_iter<T: IntoIterator<Item = (String, AttrValue)>>(iter: T) -> Self {
		Attributes(iter.into_iter().collect())
	}
}

impl From<Vec<(&str, AttrValue)>> for Attributes {
	fn from(value: Vec<(&str, AttrValue)>) -> Self {
		value.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn insert_get_remove() {
		let mut attrs = Attributes::new();
		attrs.insert("name", "Spree");
		attrs.insert("length", 400u32);
		assert_eq!(attrs.len(), 2);
		assert_eq!(attrs.get("name"), Some(&AttrValue::from("Spree")));
		assert_eq!(attrs.remove("length"), Some(AttrValue::UInt(400)));
		assert!(attrs.get("length").is_none());
	}

	#[test]
	fn to_json_and_debug() {
		let attrs = Attributes::from(vec![("b", AttrValue::Bool(false)), ("a", AttrValue::Int(-1))]);
		assert_eq!(attrs.to_json().stringify(), r#"{"a":-1,"b":false}"#);
		assert_eq!(format!("{attrs:?}"), r#"{"a": Int(-1), "b": Bool(false)}"#);
	}
}
