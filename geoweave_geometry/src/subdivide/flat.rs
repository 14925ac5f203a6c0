use super::{EdgeSampler, globe::great_circle_midpoint};
use crate::{
	Coordinates,
	math::{planar_distance, unwrap_longitude},
};
use std::f64::consts::PI;

/// Great-circle midpoint compared against the straight line on a longitude/latitude map.
pub(super) struct FlatGreatCircle;

impl EdgeSampler for FlatGreatCircle {
	fn split(&self, a: &Coordinates, b: &Coordinates) -> Option<(Coordinates, f64)> {
		// a straight map line over more than half a turn has no great-circle counterpart
		if (b.x() - a.x()).abs() > PI {
			return None;
		}
		let chord = a.lerp(b, 0.5);
		let (arc, _) = great_circle_midpoint(a, b)?;
		let arc = Coordinates::new(unwrap_longitude(arc.x(), chord.x()), arc.y()).with_z(chord.z());
		Some((arc, planar_distance(&arc, &chord)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;

	#[test]
	fn meridian_has_no_deviation() {
		let a = Coordinates::new(0.5, -0.5);
		let b = Coordinates::new(0.5, 1.0);
		let (mid, deviation) = FlatGreatCircle.split(&a, &b).unwrap();
		assert_abs_diff_eq!(mid.x(), 0.5, epsilon = 1e-12);
		assert_abs_diff_eq!(mid.y(), 0.25, epsilon = 1e-12);
		assert_abs_diff_eq!(deviation, 0.0, epsilon = 1e-12);
	}

	#[test]
	fn parallel_bulges_poleward() {
		let a = Coordinates::new(-0.5, 1.0);
		let b = Coordinates::new(0.5, 1.0);
		let (mid, deviation) = FlatGreatCircle.split(&a, &b).unwrap();
		assert_abs_diff_eq!(mid.x(), 0.0, epsilon = 1e-12);
		assert!(mid.y() > 1.0);
		assert_abs_diff_eq!(deviation, mid.y() - 1.0, epsilon = 1e-12);
	}

	#[test]
	fn wide_edges_are_skipped() {
		let a = Coordinates::new(-2.0, 0.0);
		let b = Coordinates::new(2.0, 0.0);
		assert!(FlatGreatCircle.split(&a, &b).is_none());
	}
}
