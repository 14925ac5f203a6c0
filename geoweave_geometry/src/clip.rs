//! Clipping of areal sub-features against axis-aligned rectangles and uniform grids.
//!
//! Rings are clipped with the Sutherland–Hodgman algorithm, one rectangle side at a time. A
//! concave ring that the rectangle cuts into several pieces comes back as a single ring joined
//! by zero-width bridges along the rectangle border; its area is still exact.
//!
//! Only areal sub-features take part in clipping. Points and linears are dropped from the
//! result of every clip operation.

use crate::{Areal, Coordinates, FeatureStore, GeometryError, GeometryResult, Ring, Shape, ShapeKind, math::Bounds};
use log::{debug, trace};

#[derive(Clone, Copy, Debug)]
enum Side {
	Left(f64),
	Right(f64),
	Bottom(f64),
	Top(f64),
}

impl Side {
	fn of(bounds: &Bounds) -> [Side; 4] {
		[
			Side::Left(bounds.min_x),
			Side::Right(bounds.max_x),
			Side::Bottom(bounds.min_y),
			Side::Top(bounds.max_y),
		]
	}

	fn inside(self, c: &Coordinates) -> bool {
		match self {
			Side::Left(v) => c.x() >= v,
			Side::Right(v) => c.x() <= v,
			Side::Bottom(v) => c.y() >= v,
			Side::Top(v) => c.y() <= v,
		}
	}

	/// Crossing of the segment `a`-`b` with this side; the clipped axis is set exactly.
	fn intersect(self, a: &Coordinates, b: &Coordinates) -> Coordinates {
		match self {
			Side::Left(v) | Side::Right(v) => {
				let p = a.lerp(b, (v - a.x()) / (b.x() - a.x()));
				Coordinates::new(v, p.y()).with_z(p.z())
			}
			Side::Bottom(v) | Side::Top(v) => {
				let p = a.lerp(b, (v - a.y()) / (b.y() - a.y()));
				Coordinates::new(p.x(), v).with_z(p.z())
			}
		}
	}
}

/// Part of `ring` inside `bounds`, or `None` when less than a positive area remains.
#[must_use]
pub fn clip_ring(ring: &Ring, bounds: &Bounds) -> Option<Ring> {
	let mut output = ring.0.clone();
	for side in Side::of(bounds) {
		let Some(&last) = output.last() else {
			break;
		};
		let input = std::mem::take(&mut output);
		let mut prev = last;
		for cur in input {
			match (side.inside(&prev), side.inside(&cur)) {
				(true, true) => output.push(cur),
				(false, true) => {
					output.push(side.intersect(&prev, &cur));
					output.push(cur);
				}
				(true, false) => output.push(side.intersect(&prev, &cur)),
				(false, false) => {}
			}
			prev = cur;
		}
	}

	output.dedup_by(|a, b| a.same_position(b));
	let ring = Ring::new_open(output);
	let area = ring.area();
	(ring.len() >= 3 && area.is_finite() && area > 0.0).then_some(ring)
}

/// Part of `areal` inside `bounds`. Holes are clipped as well; holes outside vanish.
///
/// Returns `None` when nothing with area is left, including when `bounds` lies inside a hole.
#[must_use]
pub fn clip_areal(areal: &Areal, bounds: &Bounds) -> Option<Areal> {
	let exterior = clip_ring(&areal.exterior, bounds)?;
	let exterior_area = exterior.area();
	let holes = areal.holes.iter().filter_map(|hole| clip_ring(hole, bounds)).collect();
	let clipped = Areal::new(exterior, holes);
	// net area is a difference of sums, so compare it against the exterior's scale
	let area = clipped.area();
	(area.is_finite() && area > exterior_area * 1e-12).then_some(clipped)
}

/// Cell intervals `[k * size, (k + 1) * size]` covering `min..=max`. A non-positive or
/// non-finite size yields a single unbounded interval.
fn cell_spans(min: f64, max: f64, size: f64) -> Vec<(f64, f64)> {
	if !size.is_finite() || size <= 0.0 {
		return vec![(f64::NEG_INFINITY, f64::INFINITY)];
	}
	let first = (min / size).floor();
	let last = ((max / size).ceil() - 1.0).max(first);
	let count = (last - first) as usize + 1;
	(0..count)
		.map(|i| {
			let k = first + i as f64;
			(k * size, (k + 1.0) * size)
		})
		.collect()
}

impl FeatureStore {
	/// Intersects every areal sub-feature with the rectangle spanned by `ll` and `ur`.
	///
	/// Corners given in the wrong order are swapped. Pieces without area are dropped, so a
	/// store lying completely outside the rectangle yields an empty store. Points and linears
	/// are not part of the result. Attributes are kept.
	///
	/// Fails with [`GeometryError::NoApplicableContent`] when the store has no areal sub-feature.
	pub fn clip_to_rect(&self, ll: impl Into<Coordinates>, ur: impl Into<Coordinates>) -> GeometryResult<FeatureStore> {
		if !self.contains_kind(ShapeKind::Areal) {
			return Err(GeometryError::no_content("clip_to_rect", "areal"));
		}
		let bounds = Bounds::from_corners(&ll.into(), &ur.into());

		let features: Vec<_> = self
			.areals()
			.filter_map(|(feature, areal)| {
				clip_areal(areal, &bounds).map(|clipped| feature.with_shape(Shape::Areal(clipped)))
			})
			.collect();

		debug!(
			"clipped {} areal(s) to {:?}, {} remain",
			self.areals().count(),
			bounds,
			features.len()
		);
		Ok(FeatureStore::from_sub_features(features))
	}

	/// Cuts every areal sub-feature into one piece per grid cell it overlaps.
	///
	/// Cells are `cell_width` by `cell_height` and aligned at the origin. The result holds one
	/// sub-feature per overlapped (areal, cell) pair, ordered by areal, then row, then column.
	/// A non-positive or non-finite size leaves that axis undivided. Points and linears are not
	/// part of the result.
	///
	/// Fails with [`GeometryError::NoApplicableContent`] when the store has no areal sub-feature.
	pub fn clip_to_grid(&self, cell_width: f64, cell_height: f64) -> GeometryResult<FeatureStore> {
		if !self.contains_kind(ShapeKind::Areal) {
			return Err(GeometryError::no_content("clip_to_grid", "areal"));
		}

		let mut features = Vec::new();
		for (feature, areal) in self.areals() {
			let Some(extent) = areal.bounds() else {
				continue;
			};
			let columns = cell_spans(extent.min_x, extent.max_x, cell_width);
			for (y0, y1) in cell_spans(extent.min_y, extent.max_y, cell_height) {
				for &(x0, x1) in &columns {
					let cell = Bounds::new(x0, y0, x1, y1);
					if let Some(clipped) = clip_areal(areal, &cell) {
						trace!("grid cell {cell:?}: {} coordinates", clipped.point_count());
						features.push(feature.with_shape(Shape::Areal(clipped)));
					}
				}
			}
		}

		debug!(
			"cut {} areal(s) into {} grid piece(s) of {cell_width}x{cell_height}",
			self.areals().count(),
			features.len()
		);
		Ok(FeatureStore::from_sub_features(features))
	}
}
