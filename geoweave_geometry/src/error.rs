//! Error type of the public geometry API.

use thiserror::Error;

pub type GeometryResult<T> = std::result::Result<T, GeometryError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
	/// The operation found no sub-feature of the kind it works on, e.g. tessellating a store
	/// that holds only lines. An empty result after processing is not this error.
	#[error("{operation}: the feature store contains no {required} sub-features")]
	NoApplicableContent {
		operation: &'static str,
		required: &'static str,
	},

	/// External input (GeoJSON text, serialized bytes) could not be decoded.
	#[error("malformed input: {0}")]
	MalformedInput(String),
}

impl GeometryError {
	pub(crate) fn no_content(operation: &'static str, required: &'static str) -> Self {
		GeometryError::NoApplicableContent { operation, required }
	}

	/// Flattens an `anyhow` error chain into a `MalformedInput`.
	#[must_use]
	pub fn malformed(err: anyhow::Error) -> Self {
		GeometryError::MalformedInput(format!("{err:#}"))
	}

	#[must_use]
	pub fn is_no_applicable_content(&self) -> bool {
		matches!(self, GeometryError::NoApplicableContent { .. })
	}
}
