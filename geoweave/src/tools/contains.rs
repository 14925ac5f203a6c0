use anyhow::Result;
use geoweave_geometry::ProcessingConfig;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// input file: *.geojson, *.json or *.gwv
	#[arg()]
	input_file: PathBuf,

	/// longitude in degrees
	#[arg(allow_hyphen_values = true)]
	lon: f64,

	/// latitude in degrees
	#[arg(allow_hyphen_values = true)]
	lat: f64,
}

/// Prints `true` or `false`.
pub fn run(arguments: &Subcommand, _config: &ProcessingConfig) -> Result<()> {
	let store = super::read_store(&arguments.input_file)?;
	let inside = store.point_inside(arguments.lon.to_radians(), arguments.lat.to_radians());
	println!("{inside}");
	Ok(())
}
