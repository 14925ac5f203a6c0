use super::{Areal, Attributes, Coordinates, FeatureStore, Ring, Shape, SubFeature};
use log::debug;

/// Mutable construction state of a [`FeatureStore`].
///
/// The `add_*` methods never fail loudly: a shape with too few (or non-finite) coordinates is
/// skipped and the method returns `false`, so partially broken imports still yield their
/// valid parts.
#[derive(Debug, Default)]
pub struct FeatureStoreBuilder {
	features: Vec<SubFeature>,
	attributes: Attributes,
}

impl FeatureStoreBuilder {
	#[must_use]
	pub fn new() -> Self {
		FeatureStoreBuilder::default()
	}

	/// Attributes attached to every sub-feature added after this call.
	pub fn set_attributes(&mut self, attributes: Attributes) -> &mut Self {
		self.attributes = attributes;
		self
	}

	pub fn add_point(&mut self, point: impl Into<Coordinates>) -> bool {
		self.add_shape(Shape::Point(point.into()))
	}

	pub fn add_linear<C: Into<Coordinates>>(&mut self, coords: impl IntoIterator<Item = C>) -> bool {
		self.add_shape(Shape::Linear(coords.into_iter().map(Into::into).collect()))
	}

	/// Linear whose coordinates all carry a z value.
	pub fn add_linear_3d(&mut self, coords: impl IntoIterator<Item = [f64; 3]>) -> bool {
		self.add_linear(coords)
	}

	pub fn add_areal<C: Into<Coordinates>>(&mut self, exterior: impl IntoIterator<Item = C>) -> bool {
		self.add_areal_with_holes(exterior, Vec::<Vec<C>>::new())
	}

	/// Holes with fewer than three coordinates are dropped; the areal itself is kept.
	pub fn add_areal_with_holes<C, R>(
		&mut self,
		exterior: impl IntoIterator<Item = C>,
		holes: impl IntoIterator<Item = R>,
	) -> bool
	where
		C: Into<Coordinates>,
		R: IntoIterator<Item = C>,
	{
		let ring = |coords: Vec<C>| Ring::new_open(coords.into_iter().map(Into::into).collect());
		let exterior = ring(exterior.into_iter().collect());
		let holes = holes.into_iter().map(|h| ring(h.into_iter().collect())).collect();
		self.add_shape(Shape::Areal(Areal::new(exterior, holes)))
	}

	fn add_shape(&mut self, shape: Shape) -> bool {
		self.push(SubFeature::new(shape, self.attributes.clone()))
	}

	/// Adds a complete sub-feature with its own attributes, applying the same validation as
	/// the `add_*` methods.
	pub fn push(&mut self, feature: SubFeature) -> bool {
		match validate(feature.shape) {
			Some(shape) => {
				self.features.push(SubFeature::new(shape, feature.attributes));
				true
			}
			None => false,
		}
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.features.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	#[must_use]
	pub fn build(self) -> FeatureStore {
		FeatureStore::from_sub_features(self.features)
	}
}

fn valid_ring(ring: &Ring) -> bool {
	ring.len() >= 3 && ring.iter().all(Coordinates::is_finite)
}

fn validate(shape: Shape) -> Option<Shape> {
	match shape {
		Shape::Point(c) if c.is_finite() => Some(Shape::Point(c)),
		Shape::Linear(coords) if coords.len() >= 2 && coords.iter().all(Coordinates::is_finite) => {
			Some(Shape::Linear(coords))
		}
		Shape::Areal(areal) => {
			let exterior = Ring::new_open(areal.exterior.0);
			if !valid_ring(&exterior) {
				debug!("skipping areal with an exterior ring of {} usable coordinates", exterior.len());
				return None;
			}
			let count = areal.holes.len();
			let holes: Vec<Ring> = areal
				.holes
				.into_iter()
				.map(|h| Ring::new_open(h.0))
				.filter(valid_ring)
				.collect();
			if holes.len() < count {
				debug!("dropped {} degenerate hole(s)", count - holes.len());
			}
			Some(Shape::Areal(Areal::new(exterior, holes)))
		}
		other => {
			debug!("skipping {:?} with too few or non-finite coordinates", other.kind());
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::AttrValue;

	#[test]
	fn too_short_shapes_are_skipped_silently() {
		let mut builder = FeatureStoreBuilder::new();
		assert!(!builder.add_linear([[0.0, 0.0]]));
		assert!(!builder.add_areal([[0.0, 0.0], [1.0, 0.0]]));
		assert!(!builder.add_areal([[0.0, 0.0], [1.0, 0.0], [0.0, 0.0]]));
		assert!(!builder.add_point([f64::NAN, 0.0]));
		assert!(builder.is_empty());
		assert!(builder.add_linear([[0.0, 0.0], [1.0, 0.0]]));
		assert_eq!(builder.len(), 1);
	}

	#[test]
	fn areal_rings_are_stored_open() {
		let mut builder = FeatureStoreBuilder::new();
		assert!(builder.add_areal([[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]));
		let store = builder.build();
		let areal = store.sub_features()[0].shape.as_areal().unwrap();
		assert_eq!(areal.exterior.len(), 3);
	}

	#[test]
	fn degenerate_holes_are_dropped() {
		let mut builder = FeatureStoreBuilder::new();
		let exterior = vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]];
		let holes = vec![
			vec![[4.0, 4.0], [6.0, 4.0], [6.0, 6.0], [4.0, 6.0]],
			vec![[1.0, 1.0], [2.0, 2.0]],
		];
		assert!(builder.add_areal_with_holes(exterior, holes));
		let store = builder.build();
		assert_eq!(store.sub_features()[0].shape.as_areal().unwrap().holes.len(), 1);
	}

	#[test]
	fn attributes_apply_to_following_features() {
		let mut builder = FeatureStoreBuilder::new();
		builder.add_point([0.0, 0.0]);
		builder
			.set_attributes(Attributes::from(vec![("kind", AttrValue::from("river"))]))
			.add_linear([[0.0, 0.0], [1.0, 0.0]]);
		let store = builder.build();
		assert!(store.sub_features()[0].attributes.is_empty());
		assert_eq!(
			store.sub_features()[1].attributes.get("kind"),
			Some(&AttrValue::from("river"))
		);
	}

	#[test]
	fn push_keeps_own_attributes() {
		let mut builder = FeatureStoreBuilder::new();
		builder.set_attributes(Attributes::from(vec![("ignored", AttrValue::Null)]));
		let attributes = Attributes::from(vec![("id", AttrValue::UInt(1))]);
		assert!(builder.push(SubFeature::new(Shape::Point(Coordinates::new(0.0, 0.0)), attributes.clone())));
		assert_eq!(builder.build().attributes(), &attributes);
	}
}
