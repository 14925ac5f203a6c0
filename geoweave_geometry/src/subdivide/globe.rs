use super::EdgeSampler;
use crate::{
	Coordinates,
	feature::lerp_z,
	math::{Vec3, unwrap_longitude},
};
use std::f64::consts::PI;

/// Midpoint on the great circle through both ends.
pub(super) struct GlobeGreatCircle;

/// Midpoint of longitude/latitude, placed on the sphere.
pub(super) struct GlobeSurface;

/// Great-circle midpoint of `a` and `b` in geographic coordinates together with the chord
/// midpoint it was projected from. `None` for (nearly) antipodal ends.
pub(super) fn great_circle_midpoint(a: &Coordinates, b: &Coordinates) -> Option<(Coordinates, Vec3)> {
	let chord = Vec3::from(a).midpoint(&Vec3::from(b));
	let arc = chord.normalize()?;
	let (lon, lat) = arc.to_geo();
	let reference = (a.x() + unwrap_longitude(b.x(), a.x())) / 2.0;
	let mid = Coordinates::new(unwrap_longitude(lon, reference), lat).with_z(lerp_z(a.z(), b.z(), 0.5));
	Some((mid, chord))
}

impl EdgeSampler for GlobeGreatCircle {
	fn split(&self, a: &Coordinates, b: &Coordinates) -> Option<(Coordinates, f64)> {
		let (mid, chord) = great_circle_midpoint(a, b)?;
		Some((mid, 1.0 - chord.length()))
	}
}

impl EdgeSampler for GlobeSurface {
	fn split(&self, a: &Coordinates, b: &Coordinates) -> Option<(Coordinates, f64)> {
		if (b.x() - a.x()).abs() > PI {
			return None;
		}
		let mid = a.lerp(b, 0.5);
		let chord = Vec3::from(a).midpoint(&Vec3::from(b));
		Some((mid, Vec3::from(&mid).distance(&chord)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use std::f64::consts::FRAC_PI_2;

	#[test]
	fn great_circle_midpoint_of_quarter_equator() {
		let a = Coordinates::new(0.0, 0.0);
		let b = Coordinates::new(FRAC_PI_2, 0.0);
		let (mid, deviation) = GlobeGreatCircle.split(&a, &b).unwrap();
		assert_abs_diff_eq!(mid.x(), FRAC_PI_2 / 2.0, epsilon = 1e-12);
		assert_abs_diff_eq!(mid.y(), 0.0, epsilon = 1e-12);
		assert_abs_diff_eq!(deviation, 1.0 - (PI / 4.0).cos(), epsilon = 1e-12);
	}

	#[test]
	fn great_circle_midpoint_across_antimeridian() {
		let a = Coordinates::new(170f64.to_radians(), 0.0);
		let b = Coordinates::new(-170f64.to_radians(), 0.0);
		let (mid, _) = GlobeGreatCircle.split(&a, &b).unwrap();
		assert_abs_diff_eq!(mid.x(), PI, epsilon = 1e-9);
	}

	#[test]
	fn surface_midpoint_is_linear_in_degrees() {
		let a = Coordinates::new_3d(0.1, 0.2, 4.0);
		let b = Coordinates::new_3d(0.3, 0.6, 8.0);
		let (mid, deviation) = GlobeSurface.split(&a, &b).unwrap();
		assert_abs_diff_eq!(mid.x(), 0.2, epsilon = 1e-12);
		assert_abs_diff_eq!(mid.y(), 0.4, epsilon = 1e-12);
		assert_eq!(mid.z(), Some(6.0));
		assert!(deviation > 0.0);
	}

	#[test]
	fn zero_length_edge_has_no_deviation() {
		let a = Coordinates::new(0.4, -0.3);
		assert_eq!(GlobeSurface.split(&a, &a).unwrap().1, 0.0);
		assert_abs_diff_eq!(GlobeGreatCircle.split(&a, &a).unwrap().1, 0.0, epsilon = 1e-15);
	}
}
