use anyhow::Result;
use geoweave_derive::context;
use geoweave_geometry::{Coordinates, ProcessingConfig};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// input file: *.geojson, *.json or *.gwv
	#[arg()]
	input_file: PathBuf,

	/// output file: *.geojson, *.json or *.gwv
	#[arg()]
	output_file: PathBuf,

	/// clip rectangle in degrees
	#[arg(long, short, value_name = "lon_min,lat_min,lon_max,lat_max", allow_hyphen_values = true)]
	bbox: String,
}

pub fn run(arguments: &Subcommand, config: &ProcessingConfig) -> Result<()> {
	let (ll, ur) = parse_bbox(&arguments.bbox)?;
	let store = super::read_store(&arguments.input_file)?;
	let clipped = store.clip_to_rect(ll, ur)?;
	if clipped.is_empty() {
		log::warn!("nothing of {:?} lies inside {}", arguments.input_file, arguments.bbox);
	}
	super::write_store(&clipped, &arguments.output_file, config)
}

/// Lower-left and upper-right corner in radians.
#[context("parsing bbox {:?}", bbox)]
fn parse_bbox(bbox: &str) -> Result<(Coordinates, Coordinates)> {
	let v = super::parse_numbers(bbox, 4)?;
	Ok((
		Coordinates::new(v[0].to_radians(), v[1].to_radians()),
		Coordinates::new(v[2].to_radians(), v[3].to_radians()),
	))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bbox_in_degrees() {
		let (ll, ur) = parse_bbox("-180,-90,180,90").unwrap();
		assert_eq!(ll, Coordinates::new(-std::f64::consts::PI, -std::f64::consts::FRAC_PI_2));
		assert_eq!(ur, Coordinates::new(std::f64::consts::PI, std::f64::consts::FRAC_PI_2));
		let err = format!("{:#}", parse_bbox("1,2,3").unwrap_err());
		assert_eq!(err, "parsing bbox \"1,2,3\": expected 4 numbers, but got 3: \"1,2,3\"");
	}
}
