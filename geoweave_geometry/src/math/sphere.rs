//! Unit-sphere vectors and their conversion from and to geographic coordinates in radians.

use crate::Coordinates;
use std::f64::consts::PI;
use std::ops::{Add, Mul, Sub};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
	pub x: f64,
	pub y: f64,
	pub z: f64,
}

impl Vec3 {
	#[must_use]
	pub fn new(x: f64, y: f64, z: f64) -> Self {
		Vec3 { x, y, z }
	}

	/// Point on the unit sphere for longitude/latitude in radians.
	#[must_use]
	pub fn from_geo(lon: f64, lat: f64) -> Self {
		let (sin_lat, cos_lat) = lat.sin_cos();
		let (sin_lon, cos_lon) = lon.sin_cos();
		Vec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
	}

	/// Longitude/latitude in radians of the direction of `self`.
	#[must_use]
	pub fn to_geo(&self) -> (f64, f64) {
		let lon = self.y.atan2(self.x);
		let lat = self.z.atan2(self.x.hypot(self.y));
		(lon, lat)
	}

	#[must_use]
	pub fn length(&self) -> f64 {
		(self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
	}

	/// Unit vector in the same direction; `None` for (nearly) zero vectors.
	#[must_use]
	pub fn normalize(&self) -> Option<Vec3> {
		let len = self.length();
		if len < 1e-12 { None } else { Some(*self * (1.0 / len)) }
	}

	#[must_use]
	pub fn midpoint(&self, other: &Vec3) -> Vec3 {
		(*self + *other) * 0.5
	}

	#[must_use]
	pub fn distance(&self, other: &Vec3) -> f64 {
		(*self - *other).length()
	}
}

impl Add for Vec3 {
	type Output = Vec3;
	fn add(self, rhs: Vec3) -> Vec3 {
		Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
	}
}

impl Sub for Vec3 {
	type Output = Vec3;
	fn sub(self, rhs: Vec3) -> Vec3 {
		Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
	}
}

impl Mul<f64> for Vec3 {
	type Output = Vec3;
	fn mul(self, rhs: f64) -> Vec3 {
		Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
	}
}

impl From<&Coordinates> for Vec3 {
	fn from(value: &Coordinates) -> Self {
		Vec3::from_geo(value.x(), value.y())
	}
}

/// Moves `lon` by whole turns so that it lies within π of `reference`.
#[must_use]
pub fn unwrap_longitude(lon: f64, reference: f64) -> f64 {
	let mut lon = lon;
	while lon - reference > PI {
		lon -= 2.0 * PI;
	}
	while reference - lon > PI {
		lon += 2.0 * PI;
	}
	lon
}
