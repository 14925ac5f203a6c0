use super::JsonValue;

/// Compact JSON text. Non-finite numbers have no JSON form and are written as `null`.
#[must_use]
pub fn stringify(json: &JsonValue) -> String {
	match json {
		JsonValue::String(s) => format!("\"{}\"", escape_json_string(s)),
		JsonValue::Number(n) if n.is_finite() => n.to_string(),
		JsonValue::Number(_) => String::from("null"),
		JsonValue::Boolean(b) => b.to_string(),
		JsonValue::Null => String::from("null"),
		JsonValue::Array(arr) => arr.stringify(),
		JsonValue::Object(obj) => obj.stringify(),
	}
}

#[must_use]
pub fn escape_json_string(input: &str) -> String {
	let mut output = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'"' => output.push_str("\\\""),
			'\\' => output.push_str("\\\\"),
			'\n' => output.push_str("\\n"),
			'\r' => output.push_str("\\r"),
			'\t' => output.push_str("\\t"),
			'\u{08}' => output.push_str("\\b"),
			'\u{0c}' => output.push_str("\\f"),
			c if c.is_control() => output.push_str(&format!("\\u{:04x}", c as u32)),
			c => output.push(c),
		}
	}
	output
}
