use super::parse_geojson;
use crate::{FeatureStore, GeometryError, GeometryResult};
use anyhow::Result;
use geoweave_core::{
	byte_iterator::{ByteIterator, parse_object_entries},
	json::parse_json_iter,
};
use geoweave_derive::context;
use log::{debug, warn};
use std::collections::BTreeMap;

/// Splits a JSON object of named GeoJSON documents into one result per member.
///
/// The outer call fails only when `json` is not a JSON object. A member that is not valid
/// GeoJSON maps to its own [`GeometryError::MalformedInput`] while the other members still load.
/// When a name occurs twice, the later member wins.
pub fn parse_geojson_assembly(json: &str) -> GeometryResult<BTreeMap<String, GeometryResult<FeatureStore>>> {
	let members = split_members(json).map_err(GeometryError::malformed)?;

	let result: BTreeMap<_, _> = members
		.into_iter()
		.map(|(name, text)| {
			let store = parse_geojson(text);
			if let Err(err) = &store {
				warn!("assembly member '{name}': {err}");
			}
			(name, store)
		})
		.collect();

	debug!(
		"loaded {} of {} assembly member(s)",
		result.values().filter(|r| r.is_ok()).count(),
		result.len()
	);
	Ok(result)
}

impl FeatureStore {
	/// See [`parse_geojson_assembly`].
	pub fn from_geojson_assembly(json: &str) -> GeometryResult<BTreeMap<String, GeometryResult<FeatureStore>>> {
		parse_geojson_assembly(json)
	}
}

/// Names and source text of the root object's members. Validates the whole document as JSON.
#[context("while reading GeoJSON assembly")]
fn split_members<'a>(json: &'a str) -> Result<Vec<(String, &'a str)>> {
	let mut iter = ByteIterator::from_str(json);
	let mut members = Vec::new();
	parse_object_entries(&mut iter, |name, iter2| {
		let start = iter2.position();
		parse_json_iter(iter2)?;
		members.push((name, &json[start..iter2.position()]));
		Ok(())
	})?;
	iter.skip_whitespace();
	if !iter.is_at_end() {
		return Err(iter.format_error("unexpected content after assembly object"));
	}
	Ok(members)
}
