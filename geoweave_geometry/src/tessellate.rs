//! Triangulation of areal sub-features.

use crate::{Areal, Coordinates, FeatureStore, GeometryError, GeometryResult, Ring, Shape, ShapeKind};
use earcutr::earcut;
use log::{debug, trace, warn};

/// Triangles smaller than this fraction of their polygon's area are dropped as slivers.
const SLIVER_RATIO: f64 = 1e-12;

impl FeatureStore {
	/// Replaces every areal sub-feature by triangles covering its area minus its holes.
	///
	/// Each triangle becomes its own areal sub-feature (a three-coordinate exterior, no holes,
	/// counter-clockwise) carrying the attributes of the polygon it came from. Non-areal
	/// sub-features are not part of the result. Polygons that collapse to a line or a point
	/// contribute no triangles.
	///
	/// Fails with [`GeometryError::NoApplicableContent`] when the store has no areal sub-feature.
	pub fn tessellate(&self) -> GeometryResult<FeatureStore> {
		if !self.contains_kind(ShapeKind::Areal) {
			return Err(GeometryError::no_content("tessellate", "areal"));
		}

		let mut features = Vec::new();
		for (feature, areal) in self.areals() {
			for [a, b, c] in triangulate(areal) {
				let triangle = Areal::new(Ring(vec![a, b, c]), Vec::new());
				features.push(feature.with_shape(Shape::Areal(triangle)));
			}
		}

		debug!(
			"tessellated {} areal(s) into {} triangle(s)",
			self.areals().count(),
			features.len()
		);
		Ok(FeatureStore::from_sub_features(features))
	}
}

/// Triangulates one polygon with holes. Degenerate polygons yield no triangles.
pub(crate) fn triangulate(areal: &Areal) -> Vec<[Coordinates; 3]> {
	let area = areal.area();
	if !area.is_finite() || area <= 0.0 {
		warn!("skipping degenerate areal with {} coordinates", areal.point_count());
		return Vec::new();
	}

	let mut vertices: Vec<Coordinates> = Vec::with_capacity(areal.point_count());
	let mut hole_indices = Vec::with_capacity(areal.holes.len());
	vertices.extend_from_slice(areal.exterior.as_slice());
	for hole in &areal.holes {
		if hole.area() > 0.0 {
			hole_indices.push(vertices.len());
			vertices.extend_from_slice(hole.as_slice());
		}
	}

	let data: Vec<f64> = vertices.iter().flat_map(|c| [c.x(), c.y()]).collect();
	let indices = match earcut(&data, &hole_indices, 2) {
		Ok(indices) => indices,
		Err(err) => {
			warn!("triangulation failed: {err:?}");
			return Vec::new();
		}
	};

	let min_area = area * SLIVER_RATIO;
	let triangles: Vec<[Coordinates; 3]> = indices
		.chunks_exact(3)
		.filter_map(|chunk| {
			let (a, b, c) = (vertices[chunk[0]], vertices[chunk[1]], vertices[chunk[2]]);
			let signed = triangle_signed_area(&a, &b, &c);
			if signed.abs() <= min_area {
				None
			} else if signed > 0.0 {
				Some([a, b, c])
			} else {
				Some([a, c, b])
			}
		})
		.collect();
	trace!("{} coordinates -> {} triangles", vertices.len(), triangles.len());
	triangles
}

fn triangle_signed_area(a: &Coordinates, b: &Coordinates, c: &Coordinates) -> f64 {
	((b.x() - a.x()) * (c.y() - a.y()) - (c.x() - a.x()) * (b.y() - a.y())) / 2.0
}
