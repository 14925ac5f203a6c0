//! A cursor over an in-memory byte slice with one byte of lookahead.
//!
//! Errors produced through [`ByteIterator::format_error`] report the line and column of the
//! current byte and a short excerpt of the surrounding input, which keeps messages for large
//! GeoJSON documents readable.

use anyhow::{Error, Result, anyhow};

const EXCERPT_RADIUS: usize = 12;

pub struct ByteIterator<'a> {
	bytes: &'a [u8],
	position: usize,
	line: usize,
	column: usize,
}

impl<'a> ByteIterator<'a> {
	#[must_use]
	pub fn from_slice(bytes: &'a [u8]) -> Self {
		ByteIterator {
			bytes,
			position: 0,
			line: 1,
			column: 1,
		}
	}

	#[must_use]
	#[allow(clippy::should_implement_trait)]
	pub fn from_str(text: &'a str) -> Self {
		Self::from_slice(text.as_bytes())
	}

	/// Builds an error annotated with the current line, column and an input excerpt.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		let start = self.position.saturating_sub(EXCERPT_RADIUS);
		let end = (self.position + EXCERPT_RADIUS).min(self.bytes.len());
		let mut excerpt = String::from_utf8_lossy(&self.bytes[start..end]).replace(['\n', '\r', '\t'], " ");
		if end == self.bytes.len() {
			excerpt.push_str("<EOF>");
		}
		anyhow!("{msg} at line {}, column {}: {excerpt}", self.line, self.column)
	}

	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.bytes.get(self.position).copied()
	}

	#[inline]
	pub fn advance(&mut self) {
		if let Some(byte) = self.peek() {
			self.position += 1;
			if byte == b'\n' {
				self.line += 1;
				self.column = 1;
			} else {
				self.column += 1;
			}
		}
	}

	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let byte = self.peek();
		self.advance();
		byte
	}

	#[inline]
	pub fn expect_next_byte(&mut self) -> Result<u8> {
		self.consume().ok_or_else(|| self.format_error("unexpected end"))
	}

	#[inline]
	pub fn expect_peeked_byte(&self) -> Result<u8> {
		self.peek().ok_or_else(|| self.format_error("unexpected end"))
	}

	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peek() {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.advance();
		}
	}

	#[must_use]
	pub fn is_at_end(&self) -> bool {
		self.position >= self.bytes.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn peek_and_consume() {
		let mut iter = ByteIterator::from_str("12");
		assert_eq!(iter.peek(), Some(b'1'));
		assert_eq!(iter.consume(), Some(b'1'));
		assert_eq!(iter.position(), 1);
		assert_eq!(iter.consume(), Some(b'2'));
		assert_eq!(iter.consume(), None);
		assert!(iter.is_at_end());
		assert!(iter.expect_next_byte().is_err());
		assert!(iter.expect_peeked_byte().is_err());
	}

	#[test]
	fn skip_whitespace() {
		let mut iter = ByteIterator::from_str(" \n\t x");
		iter.skip_whitespace();
		assert_eq!(iter.peek(), Some(b'x'));
	}

	#[test]
	fn error_reports_line_and_column() {
		let mut iter = ByteIterator::from_str("[1,\n  2,\n  ?]");
		while iter.peek() != Some(b'?') {
			iter.advance();
		}
		let message = iter.format_error("unexpected character").to_string();
		assert_eq!(message, "unexpected character at line 3, column 3: [1,   2,   ?]<EOF>");
	}

	#[test]
	fn error_excerpt_is_bounded() {
		let text = "a".repeat(100);
		let mut iter = ByteIterator::from_str(&text);
		for _ in 0..50 {
			iter.advance();
		}
		let message = iter.format_error("oops").to_string();
		assert_eq!(message, format!("oops at line 1, column 51: {}", "a".repeat(24)));
	}
}
