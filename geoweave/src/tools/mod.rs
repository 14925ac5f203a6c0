//! One module per subcommand plus the file helpers they share.

pub mod clip;
pub mod contains;
pub mod convert;
pub mod grid;
pub mod info;
pub mod split_assembly;
pub mod subdivide;
pub mod tessellate;

use anyhow::{Context, Result, bail};
use geoweave_derive::context;
use geoweave_geometry::{FeatureStore, ProcessingConfig};
use log::info;
use std::{fs, path::Path};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileFormat {
	GeoJson,
	Binary,
}

impl FileFormat {
	pub fn from_path(path: &Path) -> Result<FileFormat> {
		let extension = path
			.extension()
			.and_then(|e| e.to_str())
			.map(str::to_ascii_lowercase)
			.unwrap_or_default();
		Ok(match extension.as_str() {
			"geojson" | "json" => FileFormat::GeoJson,
			"gwv" => FileFormat::Binary,
			_ => bail!("unknown file extension of {path:?}, expected .geojson, .json or .gwv"),
		})
	}
}

pub fn load_config(path: Option<&Path>) -> Result<ProcessingConfig> {
	match path {
		Some(path) => ProcessingConfig::from_path(path),
		None => Ok(ProcessingConfig::default()),
	}
}

#[context("reading {:?}", path)]
pub fn read_store(path: &Path) -> Result<FeatureStore> {
	let store = match FileFormat::from_path(path)? {
		FileFormat::Binary => FeatureStore::read_from_file(path)?,
		FileFormat::GeoJson => {
			let text = fs::read_to_string(path)?;
			FeatureStore::from_geojson(&text)?
		}
	};
	info!("read {} sub-feature(s) from {path:?}", store.len());
	Ok(store)
}

#[context("writing {:?}", path)]
pub fn write_store(store: &FeatureStore, path: &Path, config: &ProcessingConfig) -> Result<()> {
	match FileFormat::from_path(path)? {
		FileFormat::Binary => store.write_to_file(path)?,
		FileFormat::GeoJson => fs::write(path, store.to_geojson(config.geojson.precision))?,
	}
	info!("wrote {} sub-feature(s) to {path:?}", store.len());
	Ok(())
}

/// Parses `count` numbers separated by commas, spaces or semicolons.
pub fn parse_numbers(text: &str, count: usize) -> Result<Vec<f64>> {
	let values = text
		.split([' ', ',', ';'])
		.filter(|s| !s.is_empty())
		.map(|s| s.parse::<f64>().with_context(|| format!("'{s}' is not a number")))
		.collect::<Result<Vec<f64>>>()?;
	if values.len() != count {
		bail!("expected {count} numbers, but got {}: {text:?}", values.len());
	}
	Ok(values)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("a.geojson", Some(FileFormat::GeoJson))]
	#[case("b/c.JSON", Some(FileFormat::GeoJson))]
	#[case("d.gwv", Some(FileFormat::Binary))]
	#[case("e.shp", None)]
	#[case("noext", None)]
	fn formats(#[case] path: &str, #[case] expected: Option<FileFormat>) {
		assert_eq!(FileFormat::from_path(Path::new(path)).ok(), expected);
	}

	#[test]
	fn numbers() {
		assert_eq!(parse_numbers("1,2 3;-4.5", 4).unwrap(), vec![1.0, 2.0, 3.0, -4.5]);
		assert!(parse_numbers("1,2", 4).is_err());
		assert!(parse_numbers("1,x", 2).is_err());
	}

	#[test]
	fn default_config_without_path() {
		assert_eq!(load_config(None).unwrap(), ProcessingConfig::default());
	}
}
