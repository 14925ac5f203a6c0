//! Lossless binary form of a [`FeatureStore`] (`.gwv`).
//!
//! All numbers are little-endian; counts and lengths are varints.
//!
//! ```text
//! magic    "GWVF"
//! version  u8 (1)
//! count    varint, then per sub-feature:
//!   kind     u8 (1 point, 2 linear, 3 areal)
//!   flags    u8 (bit 0: coordinates carry z)
//!   rings    varint (point and linear: 1, areal: 1 + holes)
//!     coords varint, then f64 x, f64 y (, f64 z) each
//!   attrs    varint, then pbf-string key, u8 tag, payload each
//! ```
//!
//! Attribute tags: 0 null, 1 bool (u8), 2 double (f64), 3 float (f32), 4 int (svarint),
//! 5 uint (varint), 6 string (pbf-string). Within a sub-feature that carries z, a coordinate
//! without z is written with a NaN z; stored z values are always finite.

mod read;
mod write;

use crate::{FeatureStore, GeometryError, GeometryResult};
use anyhow::{Context, Result};
use geoweave_core::Blob;
use std::path::Path;

pub const MAGIC: &[u8; 4] = b"GWVF";
pub const VERSION: u8 = 1;

pub(crate) const KIND_POINT: u8 = 1;
pub(crate) const KIND_LINEAR: u8 = 2;
pub(crate) const KIND_AREAL: u8 = 3;

pub(crate) const FLAG_Z: u8 = 0b0000_0001;

pub(crate) const TAG_NULL: u8 = 0;
pub(crate) const TAG_BOOL: u8 = 1;
pub(crate) const TAG_DOUBLE: u8 = 2;
pub(crate) const TAG_FLOAT: u8 = 3;
pub(crate) const TAG_INT: u8 = 4;
pub(crate) const TAG_UINT: u8 = 5;
pub(crate) const TAG_STRING: u8 = 6;

impl FeatureStore {
	pub fn serialize(&self) -> Result<Blob> {
		write::write_store(self)
	}

	/// Fails with [`GeometryError::MalformedInput`] on anything that is not a complete,
	/// well-formed `.gwv` payload.
	pub fn deserialize(bytes: &[u8]) -> GeometryResult<FeatureStore> {
		read::read_store(bytes).map_err(GeometryError::malformed)
	}

	pub fn write_to_file(&self, path: &Path) -> Result<()> {
		self.serialize()?
			.save_to_file(path)
			.with_context(|| format!("writing feature store to {path:?}"))
	}

	pub fn read_from_file(path: &Path) -> Result<FeatureStore> {
		let blob = Blob::load_from_file(path).with_context(|| format!("reading feature store from {path:?}"))?;
		Ok(FeatureStore::deserialize(blob.as_slice())?)
	}
}
