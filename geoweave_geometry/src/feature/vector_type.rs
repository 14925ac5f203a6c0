use super::{Shape, SubFeature};
use std::fmt::Display;

/// Aggregate type of a feature store, derived from the kinds of its sub-features.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VectorType {
	None,
	Point,
	Linear,
	/// Only linears, at least one of them carrying z values.
	Linear3d,
	Areal,
	/// More than one sub-feature kind.
	Multi,
}

impl VectorType {
	#[must_use]
	pub fn of(features: &[SubFeature]) -> VectorType {
		let Some(first) = features.first() else {
			return VectorType::None;
		};
		let kind = first.shape.kind();
		if features.iter().any(|f| f.shape.kind() != kind) {
			return VectorType::Multi;
		}
		match first.shape {
			Shape::Point(_) => VectorType::Point,
			Shape::Linear(_) if features.iter().any(|f| f.shape.has_z()) => VectorType::Linear3d,
			Shape::Linear(_) => VectorType::Linear,
			Shape::Areal(_) => VectorType::Areal,
		}
	}

	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			VectorType::None => "none",
			VectorType::Point => "point",
			VectorType::Linear => "linear",
			VectorType::Linear3d => "linear3d",
			VectorType::Areal => "areal",
			VectorType::Multi => "multi",
		}
	}
}

impl Display for VectorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
