use anyhow::Result;
use geoweave_geometry::ProcessingConfig;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// input file: *.geojson, *.json or *.gwv
	#[arg()]
	input_file: PathBuf,

	/// output file with one triangle per feature
	#[arg()]
	output_file: PathBuf,
}

pub fn run(arguments: &Subcommand, config: &ProcessingConfig) -> Result<()> {
	let store = super::read_store(&arguments.input_file)?;
	let triangles = store.tessellate()?;
	super::write_store(&triangles, &arguments.output_file, config)
}
