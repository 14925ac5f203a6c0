use super::{Areal, Coordinates};
use crate::math::Bounds;
use std::fmt::Debug;

/// The geometry of one sub-feature.
#[derive(Clone, PartialEq)]
pub enum Shape {
	Point(Coordinates),
	/// An open polyline; a closed path repeats its first coordinate explicitly.
	Linear(Vec<Coordinates>),
	Areal(Areal),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
	Point,
	Linear,
	Areal,
}

impl Shape {
	#[must_use]
	pub fn kind(&self) -> ShapeKind {
		match self {
			Shape::Point(_) => ShapeKind::Point,
			Shape::Linear(_) => ShapeKind::Linear,
			Shape::Areal(_) => ShapeKind::Areal,
		}
	}

	#[must_use]
	pub fn point_count(&self) -> usize {
		match self {
			Shape::Point(_) => 1,
			Shape::Linear(coords) => coords.len(),
			Shape::Areal(areal) => areal.point_count(),
		}
	}

	#[must_use]
	pub fn has_z(&self) -> bool {
		match self {
			Shape::Point(c) => c.has_z(),
			Shape::Linear(coords) => coords.iter().any(Coordinates::has_z),
			Shape::Areal(areal) => areal.has_z(),
		}
	}

	#[must_use]
	pub fn bounds(&self) -> Option<Bounds> {
		match self {
			Shape::Point(c) => Bounds::from_coords([c]),
			Shape::Linear(coords) => Bounds::from_coords(coords),
			Shape::Areal(areal) => areal.bounds(),
		}
	}

	#[must_use]
	pub fn as_areal(&self) -> Option<&Areal> {
		match self {
			Shape::Areal(areal) => Some(areal),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_linear(&self) -> Option<&[Coordinates]> {
		match self {
			Shape::Linear(coords) => Some(coords),
			_ => None,
		}
	}
}

impl Debug for Shape {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Shape::Point(c) => f.debug_tuple("Point").field(c).finish(),
			Shape::Linear(coords) => f.debug_tuple("Linear").field(coords).finish(),
			Shape::Areal(areal) => f.debug_tuple("Areal").field(areal).finish(),
		}
	}
}
