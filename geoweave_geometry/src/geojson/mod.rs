//! GeoJSON input and output.
//!
//! Positions are read as `[longitude°, latitude°(, z)]` and stored in radians; writing converts
//! back to degrees. Every part of a multi geometry becomes its own sub-feature carrying the
//! properties of its feature. Rings are stored open, so a closing position equal to the first
//! one is dropped on read and added again on write.
//!
//! An *assembly* is a JSON object whose members are GeoJSON documents; each member is converted
//! independently, see [`parse_geojson_assembly`].

mod assembly;
mod parse;
mod write;

pub use assembly::parse_geojson_assembly;
pub use parse::parse_geojson;
