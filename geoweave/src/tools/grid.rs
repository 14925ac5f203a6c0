use anyhow::Result;
use geoweave_geometry::ProcessingConfig;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// input file: *.geojson, *.json or *.gwv
	#[arg()]
	input_file: PathBuf,

	/// output file with one feature per polygon and cell
	#[arg()]
	output_file: PathBuf,

	/// cell size in degrees, as "width" or "width,height"
	#[arg(long, short, value_name = "width[,height]")]
	cell: String,
}

pub fn run(arguments: &Subcommand, config: &ProcessingConfig) -> Result<()> {
	let (width, height) = match super::parse_numbers(&arguments.cell, 1) {
		Ok(v) => (v[0], v[0]),
		Err(_) => {
			let v = super::parse_numbers(&arguments.cell, 2)?;
			(v[0], v[1])
		}
	};
	let store = super::read_store(&arguments.input_file)?;
	let pieces = store.clip_to_grid(width.to_radians(), height.to_radians())?;
	super::write_store(&pieces, &arguments.output_file, config)
}
