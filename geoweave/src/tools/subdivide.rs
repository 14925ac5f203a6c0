use anyhow::Result;
use geoweave_geometry::{ProcessingConfig, subdivide::{SubdivideMode, Subdivider}};
use std::path::PathBuf;

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Mode {
	/// great circles on the globe
	GlobeGreatCircle,
	/// linear in longitude/latitude, placed on the globe
	Globe,
	/// great circles drawn on a flat map
	FlatGreatCircle,
}

impl From<Mode> for SubdivideMode {
	fn from(mode: Mode) -> Self {
		match mode {
			Mode::GlobeGreatCircle => SubdivideMode::GlobeGreatCircle,
			Mode::Globe => SubdivideMode::GlobeLinear,
			Mode::FlatGreatCircle => SubdivideMode::FlatGreatCircle,
		}
	}
}

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// input file: *.geojson, *.json or *.gwv
	#[arg()]
	input_file: PathBuf,

	/// output file: *.geojson, *.json or *.gwv
	#[arg()]
	output_file: PathBuf,

	/// curve to follow between two coordinates
	#[arg(long, short, value_enum, default_value = "globe-great-circle")]
	mode: Mode,

	/// maximum deviation from the curve, in unit-sphere or radian units;
	/// defaults to subdivide.default_epsilon of the config
	#[arg(long, short, allow_hyphen_values = true, verbatim_doc_comment)]
	epsilon: Option<f64>,

	/// recursion bound per edge; defaults to subdivide.max_depth of the config
	#[arg(long, value_name = "int")]
	max_depth: Option<u8>,
}

pub fn run(arguments: &Subcommand, config: &ProcessingConfig) -> Result<()> {
	let mut subdivider = Subdivider::from_config(arguments.mode.into(), arguments.epsilon, &config.subdivide);
	if let Some(depth) = arguments.max_depth {
		subdivider = subdivider.with_max_depth(depth);
	}
	log::info!(
		"subdividing along {} with epsilon {} and depth {}",
		subdivider.mode(),
		subdivider.epsilon(),
		subdivider.max_depth()
	);

	let store = super::read_store(&arguments.input_file)?;
	let result = subdivider.apply(&store)?;
	super::write_store(&result, &arguments.output_file, config)
}
