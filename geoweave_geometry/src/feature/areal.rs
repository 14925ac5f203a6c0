use super::{Coordinates, Ring};
use crate::math::Bounds;
use std::fmt::Debug;

/// A polygon: one exterior ring and any number of hole rings.
#[derive(Clone, Default, PartialEq)]
pub struct Areal {
	pub exterior: Ring,
	pub holes: Vec<Ring>,
}

impl Areal {
	#[must_use]
	pub fn new(exterior: Ring, holes: Vec<Ring>) -> Self {
		Areal { exterior, holes }
	}

	/// Exterior first, then the holes.
	pub fn rings(&self) -> impl Iterator<Item = &Ring> {
		std::iter::once(&self.exterior).chain(self.holes.iter())
	}

	#[must_use]
	pub fn point_count(&self) -> usize {
		self.rings().map(Ring::len).sum()
	}

	/// Exterior area minus hole areas, independent of winding.
	#[must_use]
	pub fn area(&self) -> f64 {
		self.exterior.area() - self.holes.iter().map(Ring::area).sum::<f64>()
	}

	/// Inside the exterior and outside every hole.
	#[must_use]
	pub fn contains_point(&self, x: f64, y: f64) -> bool {
		self.exterior.contains_point(x, y) && !self.holes.iter().any(|hole| hole.contains_point(x, y))
	}

	#[must_use]
	pub fn bounds(&self) -> Option<Bounds> {
		self.exterior.bounds()
	}

	#[must_use]
	pub fn has_z(&self) -> bool {
		self.rings().any(Ring::has_z)
	}

	/// Area-weighted centroid of the exterior minus the holes.
	///
	/// Computed through `geo`; when everything collapses to zero area the exterior's vertex
	/// average is used instead.
	#[must_use]
	pub fn centroid(&self) -> Option<Coordinates> {
		use geo::Centroid;
		if self.area() > 0.0
			&& let Some(point) = self.to_geo().centroid()
		{
			return Some(Coordinates::new(point.x(), point.y()));
		}
		self.exterior.centroid()
	}

	#[must_use]
	pub fn to_geo(&self) -> geo::Polygon<f64> {
		geo::Polygon::new(self.exterior.to_geo(), self.holes.iter().map(Ring::to_geo).collect())
	}
}

impl From<geo::Polygon<f64>> for Areal {
	fn from(polygon: geo::Polygon<f64>) -> Self {
		let (exterior, interiors) = polygon.into_inner();
		let ring = |line: geo::LineString<f64>| Ring::new_open(line.0.into_iter().map(Coordinates::from).collect());
		Areal::new(ring(exterior), interiors.into_iter().map(ring).collect())
	}
}

impl Debug for Areal {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.holes.is_empty() {
			self.exterior.fmt(f)
		} else {
			f.debug_struct("Areal")
				.field("exterior", &self.exterior)
				.field("holes", &self.holes)
				.finish()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;

	fn square_with_hole() -> Areal {
		Areal::new(
			Ring::from(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]),
			vec![Ring::from(&[[4.0, 4.0], [6.0, 4.0], [6.0, 6.0], [4.0, 6.0]])],
		)
	}

	#[test]
	fn area_subtracts_holes() {
		assert_relative_eq!(square_with_hole().area(), 96.0);
		assert_eq!(square_with_hole().point_count(), 8);
		assert_eq!(square_with_hole().rings().count(), 2);
	}

	#[test]
	fn contains_point_respects_holes() {
		let areal = square_with_hole();
		assert!(!areal.contains_point(5.0, 5.0));
		assert!(areal.contains_point(2.0, 5.0));
		assert!(!areal.contains_point(15.0, 5.0));
	}

	#[test]
	fn centroid_is_symmetric() {
		let c = square_with_hole().centroid().unwrap();
		assert_relative_eq!(c.x(), 5.0, epsilon = 1e-12);
		assert_relative_eq!(c.y(), 5.0, epsilon = 1e-12);
	}

	#[test]
	fn centroid_of_offset_hole() {
		// 4x2 rectangle with the right 2x2 half cut out leaves the left square
		let areal = Areal::new(
			Ring::from(&[[0.0, 0.0], [4.0, 0.0], [4.0, 2.0], [0.0, 2.0]]),
			vec![Ring::from(&[[2.0, 0.0], [4.0, 0.0], [4.0, 2.0], [2.0, 2.0]])],
		);
		let c = areal.centroid().unwrap();
		assert_relative_eq!(c.x(), 1.0, epsilon = 1e-12);
		assert_relative_eq!(c.y(), 1.0, epsilon = 1e-12);
	}

	#[test]
	fn geo_round_trip() {
		let areal = square_with_hole();
		assert_eq!(Areal::from(areal.to_geo()), areal);
	}
}
