use crate::Coordinates;
use std::fmt::Debug;

/// Axis-aligned rectangle. Constructors normalise swapped corners.
#[derive(Clone, Copy, PartialEq)]
pub struct Bounds {
	pub min_x: f64,
	pub min_y: f64,
	pub max_x: f64,
	pub max_y: f64,
}

impl Bounds {
	#[must_use]
	pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
		Bounds {
			min_x: x0.min(x1),
			min_y: y0.min(y1),
			max_x: x0.max(x1),
			max_y: y0.max(y1),
		}
	}

	/// Rectangle from a lower-left and an upper-right corner, in either order.
	#[must_use]
	pub fn from_corners(ll: &Coordinates, ur: &Coordinates) -> Self {
		Bounds::new(ll.x(), ll.y(), ur.x(), ur.y())
	}

	/// Smallest rectangle containing every coordinate; `None` for an empty input.
	pub fn from_coords<'a>(coords: impl IntoIterator<Item = &'a Coordinates>) -> Option<Self> {
		let mut iter = coords.into_iter();
		let first = iter.next()?;
		let mut bounds = Bounds::new(first.x(), first.y(), first.x(), first.y());
		for c in iter {
			bounds.extend(c.x(), c.y());
		}
		Some(bounds)
	}

	pub fn extend(&mut self, x: f64, y: f64) {
		self.min_x = self.min_x.min(x);
		self.min_y = self.min_y.min(y);
		self.max_x = self.max_x.max(x);
		self.max_y = self.max_y.max(y);
	}

	#[must_use]
	pub fn width(&self) -> f64 {
		self.max_x - self.min_x
	}

	#[must_use]
	pub fn height(&self) -> f64 {
		self.max_y - self.min_y
	}

	#[must_use]
	pub fn center(&self) -> Coordinates {
		Coordinates::new((self.min_x + self.max_x) / 2.0, (self.min_y + self.max_y) / 2.0)
	}

	/// Boundary points count as contained.
	#[must_use]
	pub fn contains(&self, x: f64, y: f64) -> bool {
		x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
	}

	#[must_use]
	pub fn intersects(&self, other: &Bounds) -> bool {
		self.min_x <= other.max_x && other.min_x <= self.max_x && self.min_y <= other.max_y && other.min_y <= self.max_y
	}

	#[must_use]
	pub fn has_area(&self) -> bool {
		self.width() > 0.0 && self.height() > 0.0
	}

	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.min_x, self.min_y, self.max_x, self.max_y]
	}
}

impl Debug for Bounds {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Bounds{:?}", self.as_array())
	}
}

/// Twice the signed area of an open ring (shoelace); positive for counter-clockwise winding.
#[must_use]
pub fn signed_area_doubled(coords: &[Coordinates]) -> f64 {
	let Some(mut prev) = coords.last() else {
		return 0.0;
	};
	let mut sum = 0.0;
	for c in coords {
		sum += prev.x() * c.y() - c.x() * prev.y();
		prev = c;
	}
	sum
}

/// Euclidean distance in the x/y plane.
#[must_use]
pub fn planar_distance(a: &Coordinates, b: &Coordinates) -> f64 {
	(b.x() - a.x()).hypot(b.y() - a.y())
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;

	fn c(x: f64, y: f64) -> Coordinates {
		Coordinates::new(x, y)
	}

	#[test]
	fn normalises_corners() {
		let b = Bounds::new(5.0, 7.0, 1.0, 2.0);
		assert_eq!(b.as_array(), [1.0, 2.0, 5.0, 7.0]);
		assert_eq!(b.width(), 4.0);
		assert_eq!(b.height(), 5.0);
		assert_eq!(format!("{b:?}"), "Bounds[1.0, 2.0, 5.0, 7.0]");
	}

	#[test]
	fn from_coords() {
		let coords = [c(1.0, 5.0), c(-2.0, 3.0), c(4.0, -1.0)];
		let b = Bounds::from_coords(&coords).unwrap();
		assert_eq!(b.as_array(), [-2.0, -1.0, 4.0, 5.0]);
		assert_eq!(b.center(), c(1.0, 2.0));
		assert!(Bounds::from_coords(&Vec::<Coordinates>::new()).is_none());
	}

	#[test]
	fn containment_and_intersection() {
		let b = Bounds::new(0.0, 0.0, 10.0, 10.0);
		assert!(b.contains(0.0, 10.0));
		assert!(!b.contains(10.1, 5.0));
		assert!(b.intersects(&Bounds::new(10.0, 10.0, 20.0, 20.0)));
		assert!(!b.intersects(&Bounds::new(11.0, 0.0, 20.0, 20.0)));
		assert!(!Bounds::new(1.0, 1.0, 1.0, 5.0).has_area());
	}

	#[test]
	fn shoelace() {
		let ccw = [c(0.0, 0.0), c(10.0, 0.0), c(10.0, 10.0), c(0.0, 10.0)];
		assert_relative_eq!(signed_area_doubled(&ccw), 200.0);
		let cw: Vec<_> = ccw.iter().rev().cloned().collect();
		assert_relative_eq!(signed_area_doubled(&cw), -200.0);
		assert_eq!(signed_area_doubled(&[]), 0.0);
	}

	#[test]
	fn distance() {
		assert_relative_eq!(planar_distance(&c(0.0, 0.0), &c(3.0, 4.0)), 5.0);
	}
}
