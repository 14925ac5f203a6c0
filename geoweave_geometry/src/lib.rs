//! Geometric processing for vector features made of points, lines and polygons with holes.
//!
//! A [`FeatureStore`] is assembled with a [`FeatureStoreBuilder`] (or loaded from GeoJSON or the
//! binary `.gwv` form) and is immutable afterwards. Every derive operation reads a store and
//! returns a new one:
//!
//! - [`tessellate`](FeatureStore::tessellate): areals to triangles
//! - [`subdivide`](subdivide): edge resampling along great circles or the sphere surface
//! - [`clip_to_rect`](FeatureStore::clip_to_rect) and [`clip_to_grid`](FeatureStore::clip_to_grid)
//!
//! Read-only queries (centroid, largest loop, linear midpoint, point-in-polygon) live in [`query`].
//!
//! ```rust
//! use geoweave_geometry::FeatureStore;
//!
//! let mut builder = FeatureStore::builder();
//! builder.add_areal([[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]);
//! let store = builder.build();
//!
//! let triangles = store.tessellate().unwrap();
//! assert_eq!(triangles.len(), 2);
//! assert!(store.point_inside(2.0, 2.0));
//! ```

pub mod binary;
pub mod clip;
mod config;
mod error;
mod feature;
pub mod geojson;
pub mod math;
pub mod query;
pub mod subdivide;
mod tessellate;

pub use config::*;
pub use error::*;
pub use feature::*;
