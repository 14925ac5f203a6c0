use crate::{Coordinates, FeatureStore, Ring, Shape, SubFeature};
use geoweave_core::json::{JsonObject, JsonValue};

impl FeatureStore {
	/// Compact GeoJSON `FeatureCollection` text with one `Feature` per sub-feature.
	///
	/// Coordinates are converted back to degrees and rounded to `precision` decimals when
	/// given; z values are written unchanged. Rings get their closing position back.
	#[must_use]
	pub fn to_geojson(&self, precision: Option<u8>) -> String {
		self.to_geojson_value(precision).stringify()
	}

	#[must_use]
	pub fn to_geojson_value(&self, precision: Option<u8>) -> JsonValue {
		let mut collection = JsonObject::new();
		collection.set("type", "FeatureCollection");
		collection.set(
			"features",
			self.iter().map(|f| feature_to_json(f, precision)).collect::<Vec<_>>(),
		);
		JsonValue::from(collection)
	}
}

fn feature_to_json(feature: &SubFeature, precision: Option<u8>) -> JsonValue {
	let position = |c: &Coordinates| c.to_json_degrees(precision);
	let positions = |coords: &[Coordinates]| coords.iter().map(position).collect::<Vec<_>>();
	let ring = |ring: &Ring| {
		let mut closed = positions(ring.as_slice());
		if let Some(first) = ring.iter().next() {
			closed.push(position(first));
		}
		closed
	};

	let (geometry_type, coordinates) = match &feature.shape {
		Shape::Point(c) => ("Point", position(c)),
		Shape::Linear(coords) => ("LineString", JsonValue::from(positions(coords))),
		Shape::Areal(areal) => ("Polygon", JsonValue::from(areal.rings().map(ring).collect::<Vec<_>>())),
	};

	let mut geometry = JsonObject::new();
	geometry.set("type", geometry_type);
	geometry.set("coordinates", coordinates);

	let mut object = JsonObject::new();
	object.set("type", "Feature");
	object.set("geometry", geometry);
	object.set("properties", feature.attributes.to_json());
	JsonValue::from(object)
}
