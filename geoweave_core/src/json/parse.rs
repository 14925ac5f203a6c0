use super::{JsonArray, JsonObject, JsonValue};
use crate::byte_iterator::{
	ByteIterator, parse_array_entries, parse_number_as, parse_object_entries, parse_quoted_json_string, parse_tag,
};
use anyhow::Result;
use geoweave_derive::context;
use std::collections::BTreeMap;

/// Parses a complete JSON document. Trailing non-whitespace content is an error.
#[context("while parsing JSON '{}'", abbreviate(json))]
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	let mut iter = ByteIterator::from_str(json);
	let value = parse_json_iter(&mut iter)?;
	iter.skip_whitespace();
	if !iter.is_at_end() {
		return Err(iter.format_error("unexpected content after JSON value"));
	}
	Ok(value)
}

/// Parses one JSON value and leaves the iterator behind it.
pub fn parse_json_iter(iter: &mut ByteIterator) -> Result<JsonValue> {
	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'[' => parse_array_entries(iter, parse_json_iter).map(|values| JsonValue::Array(JsonArray(values))),
		b'{' => parse_json_object(iter),
		b'"' => parse_quoted_json_string(iter).map(JsonValue::String),
		b'-' | b'0'..=b'9' => parse_number_as::<f64>(iter).map(JsonValue::Number),
		b't' => parse_tag(iter, "true").map(|()| JsonValue::Boolean(true)),
		b'f' => parse_tag(iter, "false").map(|()| JsonValue::Boolean(false)),
		b'n' => parse_tag(iter, "null").map(|()| JsonValue::Null),
		c => Err(iter.format_error(&format!("unexpected character '{}'", c as char))),
	}
}

fn parse_json_object(iter: &mut ByteIterator) -> Result<JsonValue> {
	let mut members = BTreeMap::new();
	parse_object_entries(iter, |key, iter| {
		members.insert(key, parse_json_iter(iter)?);
		Ok(())
	})?;
	Ok(JsonValue::Object(JsonObject(members)))
}

fn abbreviate(json: &str) -> String {
	const MAX_CHARS: usize = 40;
	if json.chars().count() <= MAX_CHARS {
		json.to_string()
	} else {
		let head: String = json.chars().take(MAX_CHARS).collect();
		format!("{head}...")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn nested_document() {
		let json = parse_json_str(r#"{"type":"Point","coordinates":[13.4, 52.5],"id":null,"ok":true}"#).unwrap();
		let JsonValue::Object(object) = json else {
			panic!("expected an object, got {json:?}");
		};
		assert_eq!(object.get("type").unwrap().as_str().unwrap(), "Point");
		assert_eq!(
			object.get("coordinates").unwrap().as_array().unwrap().as_number_vec().unwrap(),
			vec![13.4, 52.5]
		);
		assert_eq!(object.get("id"), Some(&JsonValue::Null));
		assert_eq!(object.get("ok"), Some(&JsonValue::Boolean(true)));
	}

	#[test]
	fn scalars() {
		assert_eq!(parse_json_str(" 42 ").unwrap(), JsonValue::Number(42.0));
		assert_eq!(parse_json_str("-1e2").unwrap(), JsonValue::Number(-100.0));
		assert_eq!(parse_json_str(r#""x""#).unwrap(), JsonValue::from("x"));
		assert_eq!(parse_json_str("false").unwrap(), JsonValue::Boolean(false));
	}

	#[test]
	fn duplicate_keys_keep_last() {
		let json = parse_json_str(r#"{"a":1,"a":2}"#).unwrap();
		assert_eq!(json.stringify(), r#"{"a":2}"#);
	}

	#[test]
	fn errors() {
		assert!(parse_json_str("").is_err());
		assert!(parse_json_str("[1,2").is_err());
		assert!(parse_json_str("{\"a\":}").is_err());
		assert!(parse_json_str("nope").is_err());
		assert!(parse_json_str("1 2").is_err());
		assert!(parse_json_str("{} x").is_err());
	}

	#[test]
	fn error_context_is_abbreviated() {
		let text = format!("[{}", "1,".repeat(50));
		let err = parse_json_str(&text).unwrap_err();
		let top = err.to_string();
		assert!(top.starts_with("while parsing JSON '[1,1,"), "{top}");
		assert!(top.ends_with("...'"), "{top}");
	}
}
