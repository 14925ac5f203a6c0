use anyhow::Result;
use geoweave_geometry::ProcessingConfig;
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
}

pub fn run(arguments: &Subcommand, config: &ProcessingConfig) -> Result<()> {
	let store = super::read_store(&arguments.input_file)?;
	super::write_store(&store, &arguments.output_file, config)
}
