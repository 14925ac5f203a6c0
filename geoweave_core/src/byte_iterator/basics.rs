//! Parsing primitives on top of [`ByteIterator`]: literal tags, JSON strings and numbers, and
//! callbacks over object members and array elements.
//!
//! Each function leaves the iterator directly behind the token it parsed.

use super::iterator::ByteIterator;
use anyhow::{Result, bail};
use geoweave_derive::context;
use std::str::FromStr;

#[context("while parsing tag '{}'", tag)]
pub fn parse_tag(iter: &mut ByteIterator, tag: &str) -> Result<()> {
	for expected in tag.bytes() {
		if iter.expect_next_byte()? != expected {
			return Err(iter.format_error(&format!("unexpected character while parsing tag '{tag}'")));
		}
	}
	Ok(())
}

fn parse_hex4(iter: &mut ByteIterator) -> Result<u16> {
	let mut code = 0u16;
	for _ in 0..4 {
		let byte = iter.expect_next_byte()?;
		let digit = (byte as char)
			.to_digit(16)
			.ok_or_else(|| iter.format_error("invalid hex digit in unicode escape"))?;
		code = (code << 4) | digit as u16;
	}
	Ok(code)
}

#[context("while parsing a quoted JSON string")]
pub fn parse_quoted_json_string(iter: &mut ByteIterator) -> Result<String> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'"' {
		bail!(iter.format_error("expected '\"' while parsing a string"));
	}

	let mut bytes = Vec::with_capacity(32);
	loop {
		match iter.expect_next_byte()? {
			b'"' => break,
			b'\\' => match iter.expect_next_byte()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(b'\x08'),
				b'f' => bytes.push(b'\x0C'),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				b'u' => {
					let mut units = vec![parse_hex4(iter)?];
					// high surrogate: the low half follows as a second escape
					if (0xD800..0xDC00).contains(&units[0]) {
						parse_tag(iter, "\\u")?;
						units.push(parse_hex4(iter)?);
					}
					let text = String::from_utf16(&units).map_err(|_| iter.format_error("invalid unicode code point"))?;
					bytes.extend_from_slice(text.as_bytes());
				}
				_ => return Err(iter.format_error("invalid escape sequence")),
			},
			c => bytes.push(c),
		}
	}
	String::from_utf8(bytes).map_err(|_| iter.format_error("string is not valid UTF-8"))
}

#[context("while parsing a number")]
pub fn parse_number_as_string(iter: &mut ByteIterator) -> Result<String> {
	let mut number = Vec::with_capacity(16);

	if let Some(b'-') = iter.peek() {
		number.push(iter.expect_next_byte()?);
	}

	let mut has_digits = false;
	while let Some(b'0'..=b'9') = iter.peek() {
		has_digits = true;
		number.push(iter.expect_next_byte()?);
	}
	if !has_digits {
		return Err(iter.format_error("expected digits in number"));
	}

	if let Some(b'.') = iter.peek() {
		number.push(iter.expect_next_byte()?);
		let mut fractional_digits = false;
		while let Some(b'0'..=b'9') = iter.peek() {
			fractional_digits = true;
			number.push(iter.expect_next_byte()?);
		}
		if !fractional_digits {
			return Err(iter.format_error("expected digits after decimal point"));
		}
	}

	if let Some(b'e' | b'E') = iter.peek() {
		number.push(iter.expect_next_byte()?);
		if let Some(b'+' | b'-') = iter.peek() {
			number.push(iter.expect_next_byte()?);
		}
		let mut exponent_digits = false;
		while let Some(b'0'..=b'9') = iter.peek() {
			exponent_digits = true;
			number.push(iter.expect_next_byte()?);
		}
		if !exponent_digits {
			return Err(iter.format_error("expected digits after exponent"));
		}
	}

	// only ASCII digits and signs were collected
	Ok(number.into_iter().map(char::from).collect())
}

pub fn parse_number_as<R: FromStr>(iter: &mut ByteIterator) -> Result<R> {
	parse_number_as_string(iter)?
		.parse::<R>()
		.map_err(|_| iter.format_error("invalid number"))
}

/// Calls `parse_value` with each member key while the iterator sits on the member's value.
#[context("while parsing object entries")]
pub fn parse_object_entries(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(String, &mut ByteIterator) -> Result<()>,
) -> Result<()> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'{' {
		bail!(iter.format_error("expected '{' while parsing an object"));
	}

	iter.skip_whitespace();
	if let Some(b'}') = iter.peek() {
		iter.advance();
		return Ok(());
	}

	loop {
		iter.skip_whitespace();
		if iter.expect_peeked_byte()? != b'"' {
			return Err(iter.format_error("parsing object, expected '\"'"));
		}
		let key = parse_quoted_json_string(iter)?;

		iter.skip_whitespace();
		if iter.expect_next_byte()? != b':' {
			return Err(iter.format_error("expected ':'"));
		}

		iter.skip_whitespace();
		parse_value(key, iter)?;

		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => {}
			b'}' => break,
			_ => return Err(iter.format_error("expected ',' or '}'")),
		}
	}
	Ok(())
}

#[context("while parsing array entries")]
pub fn parse_array_entries<R>(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(&mut ByteIterator) -> Result<R>,
) -> Result<Vec<R>> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'[' {
		bail!(iter.format_error("expected '[' while parsing an array"));
	}

	let mut result = Vec::new();
	iter.skip_whitespace();
	if let Some(b']') = iter.peek() {
		iter.advance();
		return Ok(result);
	}

	loop {
		iter.skip_whitespace();
		result.push(parse_value(iter)?);
		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => {}
			b']' => break,
			_ => return Err(iter.format_error("parsing array, expected ',' or ']'")),
		}
	}
	Ok(result)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn error_chain(err: &anyhow::Error) -> String {
		err.chain().map(ToString::to_string).collect::<Vec<_>>().join(" | ")
	}

	#[rstest]
	#[case("null", "null", true)]
	#[case("nul", "null", false)]
	#[case("nulx", "null", false)]
	#[case("true", "true", true)]
	fn tags(#[case] text: &str, #[case] tag: &str, #[case] ok: bool) {
		assert_eq!(parse_tag(&mut ByteIterator::from_str(text), tag).is_ok(), ok);
	}

	#[rstest]
	#[case(r#""plain""#, "plain")]
	#[case(r#"  "spaced""#, "spaced")]
	#[case(r#""a\"b\\c\/d""#, "a\"b\\c/d")]
	#[case(r#""\n\r\t\b\f""#, "\n\r\t\u{8}\u{c}")]
	#[case(r#""été""#, "été")]
	#[case(r#""🌍""#, "🌍")]
	#[case("\"Xylofön\"", "Xylofön")]
	fn quoted_strings(#[case] text: &str, #[case] expected: &str) {
		assert_eq!(parse_quoted_json_string(&mut ByteIterator::from_str(text)).unwrap(), expected);
	}

	#[rstest]
	#[case("abc\"")]
	#[case("\"unterminated")]
	#[case(r#""\x""#)]
	#[case(r#""\u12G4""#)]
	#[case(r#""\ud83c""#)]
	fn invalid_strings(#[case] text: &str) {
		assert!(parse_quoted_json_string(&mut ByteIterator::from_str(text)).is_err());
	}

	#[rstest]
	#[case("0", "0")]
	#[case("-12.5", "-12.5")]
	#[case("3e8", "3e8")]
	#[case("1.25E-3,", "1.25E-3")]
	fn numbers(#[case] text: &str, #[case] expected: &str) {
		assert_eq!(parse_number_as_string(&mut ByteIterator::from_str(text)).unwrap(), expected);
	}

	#[rstest]
	#[case("-")]
	#[case("1.")]
	#[case("2e")]
	#[case("+1")]
	fn invalid_numbers(#[case] text: &str) {
		assert!(parse_number_as_string(&mut ByteIterator::from_str(text)).is_err());
	}

	#[test]
	fn typed_numbers() {
		assert_eq!(parse_number_as::<f64>(&mut ByteIterator::from_str("-0.5")).unwrap(), -0.5);
		assert_eq!(parse_number_as::<u8>(&mut ByteIterator::from_str("200")).unwrap(), 200);
		assert!(parse_number_as::<u8>(&mut ByteIterator::from_str("300")).is_err());
	}

	#[test]
	fn object_entries() {
		let mut iter = ByteIterator::from_str(r#" { "a" : 1 , "b":2 } tail"#);
		let mut seen = Vec::new();
		parse_object_entries(&mut iter, |key, iter| {
			seen.push((key, parse_number_as::<u32>(iter)?));
			Ok(())
		})
		.unwrap();
		assert_eq!(seen, vec![("a".to_string(), 1), ("b".to_string(), 2)]);
		iter.skip_whitespace();
		assert_eq!(iter.peek(), Some(b't'));

		let mut iter = ByteIterator::from_str("{}");
		parse_object_entries(&mut iter, |_, _| unreachable!()).unwrap();
	}

	#[test]
	fn object_errors_carry_context() {
		let mut iter = ByteIterator::from_str(r#"{"a" 1}"#);
		let err = parse_object_entries(&mut iter, |_, _| Ok(())).unwrap_err();
		assert_eq!(
			error_chain(&err),
			"while parsing object entries | expected ':' at line 1, column 7: {\"a\" 1}<EOF>"
		);
	}

	#[test]
	fn array_entries() {
		let values = parse_array_entries(&mut ByteIterator::from_str("[1, 2,3 ]"), parse_number_as::<i32>).unwrap();
		assert_eq!(values, vec![1, 2, 3]);
		let empty = parse_array_entries(&mut ByteIterator::from_str("[ ]"), parse_number_as::<i32>).unwrap();
		assert!(empty.is_empty());
		assert!(parse_array_entries(&mut ByteIterator::from_str("[1 2]"), parse_number_as::<i32>).is_err());
		assert!(parse_array_entries(&mut ByteIterator::from_str("[1,]"), parse_number_as::<i32>).is_err());
	}
}
