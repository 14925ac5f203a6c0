//! Read-only analysis of a [`FeatureStore`].
//!
//! All queries work in the plane of the stored coordinates; for geographic stores that is the
//! longitude/latitude plane in radians.

use crate::{
	Coordinates, FeatureStore, GeometryError, GeometryResult, Shape,
	math::{Bounds, planar_distance},
};

/// The exterior ring with the largest area over all areal sub-features.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LargestLoop {
	pub bounds: Bounds,
	/// Area-weighted centroid of the ring.
	pub center: Coordinates,
	pub area: f64,
}

/// The point halfway along a linear and the direction of the line there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearMiddle {
	pub point: Coordinates,
	/// `atan2(dy, dx)` of the segment holding the middle, in radians.
	pub orientation: f64,
}

impl FeatureStore {
	/// Area-weighted centroid of the first areal sub-feature, holes excluded.
	///
	/// Later areals are ignored, so a multi-polygon store reports the centroid of its first part.
	pub fn centroid(&self) -> GeometryResult<Coordinates> {
		self.areals()
			.find_map(|(_, areal)| areal.centroid())
			.ok_or_else(|| GeometryError::no_content("centroid", "areal"))
	}

	/// Bounds and centroid of the largest exterior ring. Ties go to the earlier ring.
	pub fn largest_loop(&self) -> GeometryResult<LargestLoop> {
		let mut best: Option<LargestLoop> = None;
		for (_, areal) in self.areals() {
			let ring = &areal.exterior;
			let area = ring.area();
			if best.is_some_and(|b| b.area >= area) {
				continue;
			}
			if let (Some(bounds), Some(center)) = (ring.bounds(), ring.centroid()) {
				best = Some(LargestLoop { bounds, center, area });
			}
		}
		best.ok_or_else(|| GeometryError::no_content("largest_loop", "areal"))
	}

	/// Middle of the first linear sub-feature by arc length.
	///
	/// A linear without length reports its first coordinate and an orientation of zero.
	pub fn linear_middle(&self) -> GeometryResult<LinearMiddle> {
		let coords = self
			.iter()
			.find_map(|f| f.shape.as_linear())
			.ok_or_else(|| GeometryError::no_content("linear_middle", "linear"))?;

		let total: f64 = coords.windows(2).map(|p| planar_distance(&p[0], &p[1])).sum();
		let half = total / 2.0;
		let mut walked = 0.0;
		for pair in coords.windows(2) {
			let (a, b) = (&pair[0], &pair[1]);
			let length = planar_distance(a, b);
			if length > 0.0 && walked + length >= half {
				return Ok(LinearMiddle {
					point: a.lerp(b, (half - walked) / length),
					orientation: (b.y() - a.y()).atan2(b.x() - a.x()),
				});
			}
			walked += length;
		}

		let first = coords.first().copied().ok_or_else(|| GeometryError::no_content("linear_middle", "linear"))?;
		Ok(LinearMiddle {
			point: first,
			orientation: 0.0,
		})
	}

	/// Whether `(x, y)` lies inside the exterior of some areal and outside all of its holes.
	pub fn point_inside(&self, x: f64, y: f64) -> bool {
		self.iter().any(|f| match &f.shape {
			Shape::Areal(areal) => areal.contains_point(x, y),
			Shape::Point(_) | Shape::Linear(_) => false,
		})
	}
}
