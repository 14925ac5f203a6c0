//! Planar and spherical helpers shared by the derive operations and queries.

mod planar;
mod sphere;

pub use planar::*;
pub use sphere::*;
