use super::{Attributes, Shape};

/// One constituent of a [`FeatureStore`](super::FeatureStore): a shape and its attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct SubFeature {
	pub shape: Shape,
	pub attributes: Attributes,
}

impl SubFeature {
	#[must_use]
	pub fn new(shape: Shape, attributes: Attributes) -> Self {
		SubFeature { shape, attributes }
	}

	/// Same attributes, different shape. Used by derive operations.
	#[must_use]
	pub fn with_shape(&self, shape: Shape) -> Self {
		SubFeature {
			shape,
			attributes: self.attributes.clone(),
		}
	}
}
