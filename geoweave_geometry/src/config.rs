//! Processing settings, loadable from YAML.
//!
//! ```yaml
//! subdivide:
//!   max_depth: 10
//!   default_epsilon: 0.0005
//! geojson:
//!   precision: 6
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

pub const DEFAULT_MAX_DEPTH: u8 = 12;
pub const MAX_DEPTH_LIMIT: u8 = 24;
pub const DEFAULT_EPSILON: f64 = 0.001;

#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProcessingConfig {
	#[serde(default)]
	pub subdivide: SubdivideConfig,

	#[serde(default)]
	pub geojson: GeoJsonConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SubdivideConfig {
	/// Recursion bound per edge. Values outside 1..=24 are clamped.
	#[serde(default = "default_max_depth")]
	pub max_depth: u8,

	/// Tolerance used when a caller does not pass one.
	#[serde(default = "default_epsilon")]
	pub default_epsilon: f64,
}

#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GeoJsonConfig {
	/// Decimal places of written coordinates; unrounded when absent.
	#[serde(default)]
	pub precision: Option<u8>,
}

fn default_max_depth() -> u8 {
	DEFAULT_MAX_DEPTH
}

fn default_epsilon() -> f64 {
	DEFAULT_EPSILON
}

impl Default for SubdivideConfig {
	fn default() -> Self {
		SubdivideConfig {
			max_depth: DEFAULT_MAX_DEPTH,
			default_epsilon: DEFAULT_EPSILON,
		}
	}
}

impl SubdivideConfig {
	#[must_use]
	pub fn effective_max_depth(&self) -> u8 {
		self.max_depth.clamp(1, MAX_DEPTH_LIMIT)
	}
}

impl ProcessingConfig {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening config {path:?}"))?;
		ProcessingConfig::from_reader(BufReader::new(file)).with_context(|| format!("parsing config {path:?}"))
	}
}
