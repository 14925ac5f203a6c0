use crate::{AttrValue, Attributes, Coordinates, FeatureStore, FeatureStoreBuilder, GeometryError, GeometryResult};
use anyhow::{Result, anyhow, bail};
use geoweave_core::{
	byte_iterator::{
		ByteIterator, parse_array_entries, parse_number_as, parse_object_entries, parse_quoted_json_string, parse_tag,
	},
	json::parse_json_iter,
};
use geoweave_derive::context;
use log::debug;

/// Parses a `FeatureCollection`, a single `Feature` or a bare geometry.
///
/// Shapes with too few coordinates are skipped like in [`FeatureStoreBuilder`]; anything that is
/// not valid GeoJSON fails with [`GeometryError::MalformedInput`].
pub fn parse_geojson(json: &str) -> GeometryResult<FeatureStore> {
	let mut builder = FeatureStoreBuilder::new();
	read_document(json, &mut builder).map_err(GeometryError::malformed)?;
	debug!("read {} sub-feature(s) from GeoJSON", builder.len());
	Ok(builder.build())
}

impl FeatureStore {
	/// See [`parse_geojson`].
	pub fn from_geojson(json: &str) -> GeometryResult<FeatureStore> {
		parse_geojson(json)
	}
}

#[context("while reading GeoJSON")]
fn read_document(json: &str, builder: &mut FeatureStoreBuilder) -> Result<()> {
	let mut iter = ByteIterator::from_str(json);
	let object = parse_geojson_object(&mut iter)?;
	iter.skip_whitespace();
	if !iter.is_at_end() {
		return Err(iter.format_error("unexpected content after GeoJSON object"));
	}
	add_object(object, &Attributes::new(), builder)
}

/// The members of any GeoJSON object that matter for one of the object types.
#[derive(Default)]
struct GeoObject {
	object_type: Option<String>,
	features: Option<Vec<GeoObject>>,
	geometry: Option<Box<GeoObject>>,
	geometries: Option<Vec<GeoObject>>,
	coordinates: Option<CoordinateTree>,
	properties: Option<Attributes>,
}

fn parse_geojson_object(iter: &mut ByteIterator) -> Result<GeoObject> {
	let mut object = GeoObject::default();
	parse_object_entries(iter, |key, iter2| {
		match key.as_str() {
			"type" => object.object_type = Some(parse_quoted_json_string(iter2)?),
			"features" => object.features = Some(parse_array_entries(iter2, parse_geojson_object)?),
			"geometry" => object.geometry = parse_nullable(iter2, parse_geojson_object)?.map(Box::new),
			"geometries" => object.geometries = Some(parse_array_entries(iter2, parse_geojson_object)?),
			"coordinates" => object.coordinates = Some(CoordinateTree::parse(iter2)?),
			"properties" => object.properties = parse_nullable(iter2, parse_properties)?,
			_ => {
				parse_json_iter(iter2)?;
			}
		}
		Ok(())
	})?;
	Ok(object)
}

fn parse_nullable<R>(iter: &mut ByteIterator, parse: impl FnOnce(&mut ByteIterator) -> Result<R>) -> Result<Option<R>> {
	iter.skip_whitespace();
	if iter.peek() == Some(b'n') {
		parse_tag(iter, "null")?;
		Ok(None)
	} else {
		parse(iter).map(Some)
	}
}

#[context("while parsing properties")]
fn parse_properties(iter: &mut ByteIterator) -> Result<Attributes> {
	let mut attributes = Attributes::new();
	parse_object_entries(iter, |key, iter2| {
		attributes.insert(key, AttrValue::from_json(&parse_json_iter(iter2)?));
		Ok(())
	})?;
	Ok(attributes)
}

fn add_object(object: GeoObject, inherited: &Attributes, builder: &mut FeatureStoreBuilder) -> Result<()> {
	let object_type = object.object_type.ok_or_else(|| anyhow!("GeoJSON object must have a 'type'"))?;
	match object_type.as_str() {
		"FeatureCollection" => {
			let features = object.features.ok_or_else(|| anyhow!("FeatureCollection must have 'features'"))?;
			for feature in features {
				if feature.object_type.as_deref() != Some("Feature") {
					bail!("members of 'features' must have type 'Feature'");
				}
				add_object(feature, inherited, builder)?;
			}
		}
		"Feature" => {
			let properties = object.properties.unwrap_or_default();
			if let Some(geometry) = object.geometry {
				add_object(*geometry, &properties, builder)?;
			}
		}
		"GeometryCollection" => {
			let geometries = object.geometries.ok_or_else(|| anyhow!("GeometryCollection must have 'geometries'"))?;
			for geometry in geometries {
				add_object(geometry, inherited, builder)?;
			}
		}
		_ => {
			let coordinates = object
				.coordinates
				.ok_or_else(|| anyhow!("geometry '{object_type}' must have 'coordinates'"))?;
			builder.set_attributes(inherited.clone());
			add_geometry(&object_type, coordinates, builder)?;
		}
	}
	Ok(())
}

#[context("while reading a '{}' geometry", geometry_type)]
fn add_geometry(geometry_type: &str, coordinates: CoordinateTree, builder: &mut FeatureStoreBuilder) -> Result<()> {
	match geometry_type {
		"Point" => {
			builder.add_point(coordinates.into_position()?);
		}
		"MultiPoint" => {
			for position in coordinates.into_positions()? {
				builder.add_point(position);
			}
		}
		"LineString" => {
			builder.add_linear(coordinates.into_positions()?);
		}
		"MultiLineString" => {
			for line in coordinates.into_rings()? {
				builder.add_linear(line);
			}
		}
		"Polygon" => add_polygon(coordinates.into_rings()?, builder),
		"MultiPolygon" => {
			for polygon in coordinates.into_array()? {
				add_polygon(polygon.into_rings()?, builder);
			}
		}
		_ => bail!("unknown geometry type '{geometry_type}'"),
	}
	Ok(())
}

fn add_polygon(rings: Vec<Vec<Coordinates>>, builder: &mut FeatureStoreBuilder) {
	let mut rings = rings.into_iter();
	if let Some(exterior) = rings.next() {
		builder.add_areal_with_holes(exterior, rings);
	}
}

/// Nested coordinate arrays, shaped only after the geometry type is known.
enum CoordinateTree {
	Number(f64),
	Array(Vec<CoordinateTree>),
}

impl CoordinateTree {
	#[context("while parsing coordinates")]
	fn parse(iter: &mut ByteIterator) -> Result<CoordinateTree> {
		iter.skip_whitespace();
		match iter.expect_peeked_byte()? {
			b'[' => Ok(CoordinateTree::Array(parse_array_entries(iter, CoordinateTree::parse)?)),
			b'-' | b'0'..=b'9' => Ok(CoordinateTree::Number(parse_number_as::<f64>(iter)?)),
			c => Err(iter.format_error(&format!(
				"expected an array or a number in coordinates, but got '{}'",
				c as char
			))),
		}
	}

	fn into_array(self) -> Result<Vec<CoordinateTree>> {
		match self {
			CoordinateTree::Array(items) => Ok(items),
			CoordinateTree::Number(n) => bail!("expected an array in coordinates, found the number {n}"),
		}
	}

	/// `[lon°, lat°]` or `[lon°, lat°, z]`; further values are ignored.
	fn into_position(self) -> Result<Coordinates> {
		let values = self
			.into_array()?
			.into_iter()
			.map(|item| match item {
				CoordinateTree::Number(n) => Ok(n),
				CoordinateTree::Array(_) => bail!("positions must contain numbers"),
			})
			.collect::<Result<Vec<f64>>>()?;
		match values.as_slice() {
			[lon, lat] => Ok(Coordinates::new(lon.to_radians(), lat.to_radians())),
			[lon, lat, z, ..] => Ok(Coordinates::new_3d(lon.to_radians(), lat.to_radians(), *z)),
			_ => bail!("positions need at least two numbers, found {}", values.len()),
		}
	}

	fn into_positions(self) -> Result<Vec<Coordinates>> {
		self.into_array()?.into_iter().map(CoordinateTree::into_position).collect()
	}

	fn into_rings(self) -> Result<Vec<Vec<Coordinates>>> {
		self.into_array()?.into_iter().map(CoordinateTree::into_positions).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Shape, VectorType};
	use approx::assert_abs_diff_eq;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn deg(c: &Coordinates) -> (f64, f64) {
		(c.x().to_degrees(), c.y().to_degrees())
	}

	#[test]
	fn feature_collection() {
		let json = r#"
		{
			"type": "FeatureCollection",
			"features": [
				{
					"type": "Feature",
					"geometry": { "type": "Point", "coordinates": [102.0, 0.5] },
					"properties": { "prop0": "value0", "rank": 3 }
				},
				{
					"type": "Feature",
					"properties": { "prop1": -1.5 },
					"geometry": { "type": "LineString", "coordinates": [[102, 0], [103, 1], [104, 0]] }
				}
			]
		}"#;
		let store = parse_geojson(json).unwrap();
		assert_eq!(store.len(), 2);
		assert_eq!(store.vector_type(), VectorType::Multi);

		let point = &store.sub_features()[0];
		let Shape::Point(c) = &point.shape else { panic!("expected a point") };
		assert_abs_diff_eq!(deg(c).0, 102.0, epsilon = 1e-12);
		assert_abs_diff_eq!(deg(c).1, 0.5, epsilon = 1e-12);
		assert_eq!(point.attributes.get("prop0"), Some(&AttrValue::from("value0")));
		assert_eq!(point.attributes.get("rank"), Some(&AttrValue::UInt(3)));

		let line = &store.sub_features()[1];
		assert_eq!(line.shape.as_linear().unwrap().len(), 3);
		assert_eq!(line.attributes.get("prop1"), Some(&AttrValue::Double(-1.5)));
		assert!(line.attributes.get("prop0").is_none());
	}

	#[test]
	fn polygon_rings_are_opened() {
		let json = r#"{"type":"Polygon","coordinates":[
			[[0,0],[10,0],[10,10],[0,10],[0,0]],
			[[4,4],[6,4],[6,6],[4,6],[4,4]]
		]}"#;
		let store = parse_geojson(json).unwrap();
		let areal = store.sub_features()[0].shape.as_areal().unwrap();
		assert_eq!(areal.exterior.len(), 4);
		assert_eq!(areal.holes.len(), 1);
		assert_eq!(areal.holes[0].len(), 4);
		assert!(store.attributes().is_empty());
	}

	#[test]
	fn multi_geometries_expand_and_share_properties() {
		let json = r#"{"type":"Feature","properties":{"name":"islands"},"geometry":{
			"type":"MultiPolygon","coordinates":[
				[[[0,0],[1,0],[1,1],[0,0]]],
				[[[5,5],[6,5],[6,6],[5,5]]]
			]}}"#;
		let store = parse_geojson(json).unwrap();
		assert_eq!(store.len(), 2);
		assert_eq!(store.vector_type(), VectorType::Areal);
		assert!(store.iter().all(|f| f.attributes.get("name") == Some(&AttrValue::from("islands"))));
	}

	#[test]
	fn geometry_collection_and_3d_positions() {
		let json = r#"{"type":"GeometryCollection","geometries":[
			{"type":"MultiPoint","coordinates":[[1,2],[3,4,50]]},
			{"type":"MultiLineString","coordinates":[[[0,0,1],[1,1,2]],[[2,2],[3,3]]]}
		]}"#;
		let store = parse_geojson(json).unwrap();
		assert_eq!(store.len(), 4);
		let expected = Coordinates::new_3d(3f64.to_radians(), 4f64.to_radians(), 50.0);
		assert_eq!(store.sub_features()[1].shape, Shape::Point(expected));
		assert!(store.sub_features()[2].shape.has_z());
		assert!(!store.sub_features()[3].shape.has_z());
	}

	#[test]
	fn nested_properties_become_json_text() {
		let json = r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},
			"properties":{"tags":["a","b"],"meta":{"x":1},"flag":true,"none":null,"big":-7}}"#;
		let store = parse_geojson(json).unwrap();
		let attributes = store.attributes();
		assert_eq!(attributes.get("tags"), Some(&AttrValue::from(r#"["a","b"]"#)));
		assert_eq!(attributes.get("meta"), Some(&AttrValue::from(r#"{"x":1}"#)));
		assert_eq!(attributes.get("flag"), Some(&AttrValue::Bool(true)));
		assert_eq!(attributes.get("none"), Some(&AttrValue::Null));
		assert_eq!(attributes.get("big"), Some(&AttrValue::Int(-7)));
	}

	#[test]
	fn null_geometry_and_short_shapes_are_skipped() {
		let json = r#"{"type":"FeatureCollection","features":[
			{"type":"Feature","geometry":null,"properties":null},
			{"type":"Feature","geometry":{"type":"LineString","coordinates":[[0,0]]},"properties":{}},
			{"type":"Feature","geometry":{"type":"Polygon","coordinates":[]},"properties":{}},
			{"type":"Feature","geometry":{"type":"Point","coordinates":[1,1]},"id":7,"bbox":[0,0,1,1]}
		]}"#;
		let store = parse_geojson(json).unwrap();
		assert_eq!(store.len(), 1);
	}

	#[rstest]
	#[case("")]
	#[case("[]")]
	#[case(r#"{"type":"FeatureCollection"}"#)]
	#[case(r#"{"type":"FeatureCollection","features":[{"type":"Point","coordinates":[0,0]}]}"#)]
	#[case(r#"{"type":"Feature","geometry":{"type":"Curve","coordinates":[0,0]}}"#)]
	#[case(r#"{"type":"Point","coordinates":[0]}"#)]
	#[case(r#"{"type":"Point","coordinates":[[0,0]]}"#)]
	#[case(r#"{"type":"LineString","coordinates":[0,0]}"#)]
	#[case(r#"{"type":"Point","coordinates":["0","0"]}"#)]
	#[case(r#"{"coordinates":[0,0]}"#)]
	#[case(r#"{"type":"Point","coordinates":[0,0]} trailing"#)]
	#[case(r#"{"type":"Point","coordinates":[0,0]"#)]
	fn malformed_input(#[case] json: &str) {
		let err = parse_geojson(json).unwrap_err();
		assert!(matches!(err, GeometryError::MalformedInput(_)), "{err:?}");
	}

	#[test]
	fn error_message_carries_context() {
		let err = parse_geojson(r#"{"type":"Polygon","coordinates":[[[0,0],[1]]]}"#).unwrap_err();
		let message = err.to_string();
		assert!(message.contains("while reading a 'Polygon' geometry"), "{message}");
		assert!(message.contains("positions need at least two numbers"), "{message}");
	}
}
