//! [`Blob`] is an owned byte buffer used for serialized feature stores and raw JSON text.
//!
//! ```rust
//! use geoweave_core::Blob;
//!
//! let blob = Blob::from("GWVF");
//! assert_eq!(blob.len(), 4);
//! assert_eq!(blob.as_slice(), b"GWVF");
//! ```

use anyhow::{Context, Result};
use std::fmt::Debug;
use std::path::Path;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Blob(Vec<u8>);

impl Blob {
	/// Zero-filled buffer of `length` bytes.
	#[must_use]
	pub fn new_sized(length: usize) -> Blob {
		Blob(vec![0u8; length])
	}

	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		&self.0
	}

	pub fn as_mut_slice(&mut self) -> &mut [u8] {
		&mut self.0
	}

	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	/// Interprets the bytes as UTF-8.
	pub fn as_str(&self) -> Result<&str> {
		std::str::from_utf8(&self.0).context("blob is not valid UTF-8")
	}

	#[must_use]
	pub fn len(&self) -> u64 {
		self.0.len() as u64
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Lowercase hex dump, separated by spaces.
	#[must_use]
	pub fn as_hex(&self) -> String {
		self.0.iter().map(|b| format!("{b:02x}")).collect::<Vec<_>>().join(" ")
	}

	pub fn save_to_file(&self, path: &Path) -> Result<()> {
		std::fs::write(path, &self.0).with_context(|| format!("writing {} bytes to {path:?}", self.0.len()))
	}

	pub fn load_from_file(path: &Path) -> Result<Self> {
		let data = std::fs::read(path).with_context(|| format!("reading {path:?}"))?;
		Ok(Blob(data))
	}
}

impl From<Vec<u8>> for Blob {
	fn from(value: Vec<u8>) -> Self {
		Blob(value)
	}
}

impl From<&[u8]> for Blob {
	fn from(value: &[u8]) -> Self {
		Blob(value.to_vec())
	}
}

impl<const N: usize> From<&[u8; N]> for Blob {
	fn from(value: &[u8; N]) -> Self {
		Blob(value.to_vec())
	}
}

impl From<&str> for Blob {
	fn from(value: &str) -> Self {
		Blob(value.as_bytes().to_vec())
	}
}

impl From<String> for Blob {
	fn from(value: String) -> Self {
		Blob(value.into_bytes())
	}
}

impl Debug for Blob {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		const PREVIEW: usize = 16;
		let head = Blob(self.0.iter().take(PREVIEW).copied().collect());
		if self.0.len() > PREVIEW {
			write!(f, "Blob({}): {} ...", self.0.len(), head.as_hex())
		} else {
			write!(f, "Blob({}): {}", self.0.len(), head.as_hex())
		}
	}
}
