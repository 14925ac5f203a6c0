use geoweave_core::json::JsonValue;
use std::fmt::Debug;

/// A 2D position with an optional scalar (elevation, z) carried alongside.
///
/// For geographic data `x` is the longitude and `y` the latitude, both in radians.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates {
	xy: [f64; 2],
	z: Option<f64>,
}

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self { xy: [x, y], z: None }
	}

	#[must_use]
	pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
		Self { xy: [x, y], z: Some(z) }
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.xy[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.xy[1]
	}

	#[must_use]
	pub fn z(&self) -> Option<f64> {
		self.z
	}

	#[must_use]
	pub fn has_z(&self) -> bool {
		self.z.is_some()
	}

	#[must_use]
	pub fn with_z(self, z: Option<f64>) -> Self {
		Self { xy: self.xy, z }
	}

	#[must_use]
	pub fn is_finite(&self) -> bool {
		self.xy[0].is_finite() && self.xy[1].is_finite() && self.z.is_none_or(f64::is_finite)
	}

	/// Same x/y position, ignoring z.
	#[must_use]
	pub fn same_position(&self, other: &Coordinates) -> bool {
		self.xy == other.xy
	}

	/// Linear interpolation of position and z; z survives only if both ends carry it.
	#[must_use]
	pub fn lerp(&self, other: &Coordinates, t: f64) -> Coordinates {
		Coordinates {
			xy: [
				self.xy[0] + (other.xy[0] - self.xy[0]) * t,
				self.xy[1] + (other.xy[1] - self.xy[1]) * t,
			],
			z: lerp_z(self.z, other.z, t),
		}
	}

	/// GeoJSON position in degrees, optionally rounded to `precision` decimals.
	#[must_use]
	pub fn to_json_degrees(&self, precision: Option<u8>) -> JsonValue {
		let round = |v: f64| match precision {
			Some(prec) => {
				let factor = 10f64.powi(i32::from(prec));
				(v * factor).round() / factor
			}
			None => v,
		};
		let mut values = vec![round(self.x().to_degrees()), round(self.y().to_degrees())];
		if let Some(z) = self.z {
			values.push(z);
		}
		JsonValue::from(values)
	}
}

pub(crate) fn lerp_z(a: Option<f64>, b: Option<f64>, t: f64) -> Option<f64> {
	match (a, b) {
		(Some(a), Some(b)) => Some(a + (b - a) * t),
		_ => None,
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates::new(value[0], value[1])
	}
}

impl From<&[f64; 2]> for Coordinates {
	fn from(value: &[f64; 2]) -> Self {
		Coordinates::new(value[0], value[1])
	}
}

impl From<[f64; 3]> for Coordinates {
	fn from(value: [f64; 3]) -> Self {
		Coordinates::new_3d(value[0], value[1], value[2])
	}
}

impl From<&[f64; 3]> for Coordinates {
	fn from(value: &[f64; 3]) -> Self {
		Coordinates::new_3d(value[0], value[1], value[2])
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates::new(value.0, value.1)
	}
}

impl From<&Coordinates> for Coordinates {
	fn from(value: &Coordinates) -> Self {
		*value
	}
}

impl From<geo::Coord> for Coordinates {
	fn from(value: geo::Coord) -> Self {
		Coordinates::new(value.x, value.y)
	}
}

impl From<&Coordinates> for geo::Coord {
	fn from(value: &Coordinates) -> Self {
		geo::coord! { x: value.x(), y: value.y() }
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.z {
			Some(z) => [self.xy[0], self.xy[1], z].fmt(f),
			None => self.xy.fmt(f),
		}
	}
}
