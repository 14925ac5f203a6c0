use super::{Areal, Attributes, FeatureStoreBuilder, ShapeKind, SubFeature, VectorType};
use crate::math::Bounds;

static EMPTY_ATTRIBUTES: Attributes = Attributes::new();

/// An immutable collection of sub-features.
///
/// Stores are created through [`FeatureStoreBuilder`], a parser or the binary decoder. Every
/// derive operation returns a new store and leaves its input untouched, so a store can be
/// shared between threads and processed concurrently.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureStore {
	features: Vec<SubFeature>,
}

impl FeatureStore {
	#[must_use]
	pub fn builder() -> FeatureStoreBuilder {
		FeatureStoreBuilder::new()
	}

	#[must_use]
	pub fn empty() -> Self {
		FeatureStore::default()
	}

	/// Wraps already validated sub-features.
	pub(crate) fn from_sub_features(features: Vec<SubFeature>) -> Self {
		FeatureStore { features }
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.features.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	/// Borrowing iterator over the sub-features; every call starts from the beginning.
	pub fn iter(&self) -> std::slice::Iter<'_, SubFeature> {
		self.features.iter()
	}

	/// Lazily yields one single-feature store per sub-feature.
	pub fn iter_stores(&self) -> impl Iterator<Item = FeatureStore> + '_ {
		self.features.iter().map(|f| FeatureStore::from_sub_features(vec![f.clone()]))
	}

	#[must_use]
	pub fn sub_features(&self) -> &[SubFeature] {
		&self.features
	}

	/// Total number of coordinates over all sub-features.
	#[must_use]
	pub fn point_count(&self) -> usize {
		self.features.iter().map(|f| f.shape.point_count()).sum()
	}

	#[must_use]
	pub fn vector_type(&self) -> VectorType {
		VectorType::of(&self.features)
	}

	/// Attributes of the first sub-feature; empty for an empty store.
	#[must_use]
	pub fn attributes(&self) -> &Attributes {
		self.features.first().map_or(&EMPTY_ATTRIBUTES, |f| &f.attributes)
	}

	#[must_use]
	pub fn contains_kind(&self, kind: ShapeKind) -> bool {
		self.features.iter().any(|f| f.shape.kind() == kind)
	}

	/// Areal sub-features together with their polygon.
	pub fn areals(&self) -> impl Iterator<Item = (&SubFeature, &Areal)> {
		self.features.iter().filter_map(|f| f.shape.as_areal().map(|a| (f, a)))
	}

	#[must_use]
	pub fn bounds(&self) -> Option<Bounds> {
		let mut iter = self.features.iter().filter_map(|f| f.shape.bounds());
		let mut bounds = iter.next()?;
		for b in iter {
			bounds.extend(b.min_x, b.min_y);
			bounds.extend(b.max_x, b.max_y);
		}
		Some(bounds)
	}

	/// Continues construction with the current sub-features.
	#[must_use]
	pub fn into_builder(self) -> FeatureStoreBuilder {
		let mut builder = FeatureStoreBuilder::new();
		for feature in self.features {
			builder.push(feature);
		}
		builder
	}
}

impl<'a> IntoIterator for &'a FeatureStore {
	type Item = &'a SubFeature;
	type IntoIter = std::slice::Iter<'a, SubFeature>;
	fn into_iter(self) -> Self::IntoIter {
		self.features.iter()
	}
}
