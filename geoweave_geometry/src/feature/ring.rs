use super::Coordinates;
use crate::math::{Bounds, signed_area_doubled};
use std::fmt::Debug;

/// A closed loop of coordinates, stored open: the closing edge from the last back to the first
/// coordinate is implicit.
#[derive(Clone, Default, PartialEq)]
pub struct Ring(pub Vec<Coordinates>);

impl Ring {
	/// Builds a ring, dropping a trailing coordinate that repeats the first one.
	#[must_use]
	pub fn new_open(mut coords: Vec<Coordinates>) -> Self {
		if coords.len() > 1 && coords.first().map(|c| c.same_position(&coords[coords.len() - 1])) == Some(true) {
			coords.pop();
		}
		Ring(coords)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Coordinates> {
		self.0.iter()
	}

	#[must_use]
	pub fn as_slice(&self) -> &[Coordinates] {
		&self.0
	}

	/// Signed area; positive for counter-clockwise winding.
	#[must_use]
	pub fn signed_area(&self) -> f64 {
		signed_area_doubled(&self.0) / 2.0
	}

	#[must_use]
	pub fn area(&self) -> f64 {
		self.signed_area().abs()
	}

	#[must_use]
	pub fn is_ccw(&self) -> bool {
		self.signed_area() > 0.0
	}

	#[must_use]
	pub fn has_z(&self) -> bool {
		self.0.iter().any(Coordinates::has_z)
	}

	/// Even-odd ray casting.
	#[must_use]
	pub fn contains_point(&self, x: f64, y: f64) -> bool {
		let coords = &self.0;
		if coords.len() < 3 {
			return false;
		}

		let mut inside = false;
		let mut j = coords.len() - 1;
		for i in 0..coords.len() {
			let (xi, yi) = (coords[i].x(), coords[i].y());
			let (xj, yj) = (coords[j].x(), coords[j].y());
			if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
				inside = !inside;
			}
			j = i;
		}
		inside
	}

	#[must_use]
	pub fn bounds(&self) -> Option<Bounds> {
		Bounds::from_coords(&self.0)
	}

	/// Area-weighted centroid. Rings without area fall back to the vertex average.
	#[must_use]
	pub fn centroid(&self) -> Option<Coordinates> {
		if self.0.is_empty() {
			return None;
		}
		let area2 = signed_area_doubled(&self.0);
		if area2.abs() <= f64::EPSILON {
			let n = self.0.len() as f64;
			let (sx, sy) = self.0.iter().fold((0.0, 0.0), |(sx, sy), c| (sx + c.x(), sy + c.y()));
			return Some(Coordinates::new(sx / n, sy / n));
		}
		let (cx, cy) = self.weighted_centroid_sums();
		Some(Coordinates::new(cx / (3.0 * area2), cy / (3.0 * area2)))
	}

	/// Sums of `(xi + xj) * cross` and `(yi + yj) * cross` over all edges.
	pub(crate) fn weighted_centroid_sums(&self) -> (f64, f64) {
		let mut cx = 0.0;
		let mut cy = 0.0;
		if let Some(mut prev) = self.0.last() {
			for c in &self.0 {
				let cross = prev.x() * c.y() - c.x() * prev.y();
				cx += (prev.x() + c.x()) * cross;
				cy += (prev.y() + c.y()) * cross;
				prev = c;
			}
		}
		(cx, cy)
	}

	/// Iterates over the ring's edges, including the closing one.
	pub fn edges(&self) -> impl Iterator<Item = (&Coordinates, &Coordinates)> {
		let n = self.0.len();
		(0..n).map(move |i| (&self.0[i], &self.0[(i + 1) % n]))
	}

	/// Closed `geo` line string (first coordinate repeated at the end).
	#[must_use]
	pub fn to_geo(&self) -> geo::LineString<f64> {
		let mut coords: Vec<geo::Coord> = self.0.iter().map(geo::Coord::from).collect();
		if let Some(first) = coords.first().copied() {
			coords.push(first);
		}
		geo::LineString::new(coords)
	}
}

impl Debug for Ring {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl<C> FromIterator<C> for Ring
where
	Coordinates: From<C>,
{
	fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
		Ring(iter.into_iter().map(Coordinates::from).collect())
	}
}

impl<'a, C, const N: usize> From<&'a [C; N]> for Ring
where
	Coordinates: From<&'a C>,
{
	fn from(value: &'a [C; N]) -> Self {
		value.iter().collect()
	}
}
