use super::{
	FLAG_Z, KIND_AREAL, KIND_LINEAR, KIND_POINT, MAGIC, TAG_BOOL, TAG_DOUBLE, TAG_FLOAT, TAG_INT, TAG_NULL, TAG_STRING,
	TAG_UINT, VERSION,
};
use crate::{Areal, AttrValue, Attributes, Coordinates, FeatureStore, FeatureStoreBuilder, Ring, Shape, SubFeature};
use anyhow::{Context, Result, bail, ensure};
use byteorder::LittleEndian;
use geoweave_core::io::{ValueReader, ValueReaderSlice};
use geoweave_derive::context;

type Reader<'a> = ValueReaderSlice<'a, LittleEndian>;

#[context("while deserializing a feature store")]
pub(super) fn read_store(bytes: &[u8]) -> Result<FeatureStore> {
	let mut reader = Reader::new_le(bytes);
	reader.read_magic(MAGIC)?;
	let version = reader.read_u8().context("reading version")?;
	ensure!(version == VERSION, "unsupported version {version}, expected {VERSION}");

	let count = reader.read_count(4)?;
	let mut builder = FeatureStoreBuilder::new();
	for index in 0..count {
		let feature = read_feature(&mut reader).with_context(|| format!("reading sub-feature {index}"))?;
		ensure!(builder.push(feature), "sub-feature {index} has too few or non-finite coordinates");
	}
	ensure!(
		!reader.has_remaining(),
		"{} unexpected trailing byte(s)",
		reader.remaining()
	);
	Ok(builder.build())
}

fn read_feature(reader: &mut Reader) -> Result<SubFeature> {
	let kind = reader.read_u8()?;
	let flags = reader.read_u8()?;
	ensure!(flags & !FLAG_Z == 0, "unknown flags {flags:#04x}");
	let has_z = flags & FLAG_Z != 0;

	let ring_count = reader.read_count(1)?;
	let mut rings = Vec::with_capacity(ring_count);
	for index in 0..ring_count {
		rings.push(read_ring(reader, has_z).with_context(|| format!("reading ring {index}"))?);
	}

	let shape = match (kind, rings.len()) {
		(KIND_POINT, 1) => match rings.pop().unwrap_or_default().as_slice() {
			[c] => Shape::Point(*c),
			other => bail!("a point needs exactly one coordinate, found {}", other.len()),
		},
		(KIND_LINEAR, 1) => Shape::Linear(rings.pop().unwrap_or_default()),
		(KIND_AREAL, 1..) => {
			let mut rings = rings.into_iter().map(Ring);
			let exterior = rings.next().unwrap_or_default();
			Shape::Areal(Areal::new(exterior, rings.collect()))
		}
		(KIND_POINT | KIND_LINEAR | KIND_AREAL, n) => bail!("kind {kind} cannot have {n} ring(s)"),
		_ => bail!("unknown sub-feature kind {kind}"),
	};

	let attributes = read_attributes(reader).context("reading attributes")?;
	Ok(SubFeature::new(shape, attributes))
}

fn read_ring(reader: &mut Reader, has_z: bool) -> Result<Vec<Coordinates>> {
	let count = reader.read_count(if has_z { 24 } else { 16 })?;
	let mut coords = Vec::with_capacity(count);
	for _ in 0..count {
		let x = reader.read_f64()?;
		let y = reader.read_f64()?;
		let z = if has_z {
			Some(reader.read_f64()?).filter(|z| !z.is_nan())
		} else {
			None
		};
		coords.push(Coordinates::new(x, y).with_z(z));
	}
	Ok(coords)
}

fn read_attributes(reader: &mut Reader) -> Result<Attributes> {
	let count = reader.read_count(2)?;
	let mut attributes = Attributes::new();
	for _ in 0..count {
		let key = reader.read_pbf_string()?;
		let value = match reader.read_u8()? {
			TAG_NULL => AttrValue::Null,
			TAG_BOOL => AttrValue::Bool(reader.read_u8()? != 0),
			TAG_DOUBLE => AttrValue::Double(reader.read_f64()?),
			TAG_FLOAT => AttrValue::Float(reader.read_f32()?),
			TAG_INT => AttrValue::Int(reader.read_svarint()?),
			TAG_UINT => AttrValue::UInt(reader.read_varint()?),
			TAG_STRING => AttrValue::String(reader.read_pbf_string()?),
			tag => bail!("unknown value tag {tag} for attribute '{key}'"),
		};
		attributes.insert(key, value);
	}
	Ok(attributes)
}
