use super::{
	FLAG_Z, KIND_AREAL, KIND_LINEAR, KIND_POINT, MAGIC, TAG_BOOL, TAG_DOUBLE, TAG_FLOAT, TAG_INT, TAG_NULL, TAG_STRING,
	TAG_UINT, VERSION,
};
use crate::{AttrValue, Attributes, Coordinates, FeatureStore, Ring, Shape, SubFeature};
use anyhow::Result;
use byteorder::LittleEndian;
use geoweave_core::{
	Blob,
	io::{ValueWriter, ValueWriterBlob},
};
use log::trace;

type Writer = ValueWriterBlob<LittleEndian>;

pub(super) fn write_store(store: &FeatureStore) -> Result<Blob> {
	let mut writer = Writer::new_le();
	writer.write_slice(MAGIC)?;
	writer.write_u8(VERSION)?;
	writer.write_varint(store.len() as u64)?;
	for feature in store {
		write_feature(&mut writer, feature)?;
	}
	trace!("serialized {} sub-feature(s) into {} bytes", store.len(), writer.position());
	Ok(writer.into_blob())
}

fn write_feature(writer: &mut Writer, feature: &SubFeature) -> Result<()> {
	let has_z = feature.shape.has_z();
	let (kind, rings): (u8, Vec<&[Coordinates]>) = match &feature.shape {
		Shape::Point(c) => (KIND_POINT, vec![std::slice::from_ref(c)]),
		Shape::Linear(coords) => (KIND_LINEAR, vec![coords.as_slice()]),
		Shape::Areal(areal) => (KIND_AREAL, areal.rings().map(Ring::as_slice).collect()),
	};

	writer.write_u8(kind)?;
	writer.write_u8(if has_z { FLAG_Z } else { 0 })?;
	writer.write_varint(rings.len() as u64)?;
	for ring in rings {
		writer.write_varint(ring.len() as u64)?;
		for c in ring {
			writer.write_f64(c.x())?;
			writer.write_f64(c.y())?;
			if has_z {
				writer.write_f64(c.z().unwrap_or(f64::NAN))?;
			}
		}
	}
	write_attributes(writer, &feature.attributes)
}

fn write_attributes(writer: &mut Writer, attributes: &Attributes) -> Result<()> {
	writer.write_varint(attributes.len() as u64)?;
	for (key, value) in attributes {
		writer.write_pbf_string(key)?;
		match value {
			AttrValue::Null => writer.write_u8(TAG_NULL)?,
			AttrValue::Bool(v) => {
				writer.write_u8(TAG_BOOL)?;
				writer.write_u8(u8::from(*v))?;
			}
			AttrValue::Double(v) => {
				writer.write_u8(TAG_DOUBLE)?;
				writer.write_f64(*v)?;
			}
			AttrValue::Float(v) => {
				writer.write_u8(TAG_FLOAT)?;
				writer.write_f32(*v)?;
			}
			AttrValue::Int(v) => {
				writer.write_u8(TAG_INT)?;
				writer.write_svarint(*v)?;
			}
			AttrValue::UInt(v) => {
				writer.write_u8(TAG_UINT)?;
				writer.write_varint(*v)?;
			}
			AttrValue::String(v) => {
				writer.write_u8(TAG_STRING)?;
				writer.write_pbf_string(v)?;
			}
		}
	}
	Ok(())
}
