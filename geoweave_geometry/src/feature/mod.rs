mod areal;
mod attributes;
mod builder;
mod coordinates;
mod ring;
mod shape;
mod store;
mod sub_feature;
mod value;
mod vector_type;

pub use areal::Areal;
pub use attributes::Attributes;
pub use builder::FeatureStoreBuilder;
pub use coordinates::Coordinates;
pub(crate) use coordinates::lerp_z;
pub use ring::Ring;
pub use shape::{Shape, ShapeKind};
pub use store::FeatureStore;
pub use sub_feature::SubFeature;
pub use value::AttrValue;
pub use vector_type::VectorType;
