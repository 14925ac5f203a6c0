mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// YAML file with processing settings
	#[arg(long, global = true, value_name = "FILE")]
	config: Option<PathBuf>,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Cut polygons to a bounding box
	Clip(tools::clip::Subcommand),

	/// Test whether a point lies inside the polygons of a file
	Contains(tools::contains::Subcommand),

	/// Convert between GeoJSON and the binary .gwv format
	Convert(tools::convert::Subcommand),

	/// Cut polygons into grid cells
	Grid(tools::grid::Subcommand),

	/// Show statistics and geometry queries of a file
	Info(tools::info::Subcommand),

	/// Write every member of a GeoJSON assembly to its own file
	SplitAssembly(tools::split_assembly::Subcommand),

	/// Insert points along edges for curved display
	Subdivide(tools::subdivide::Subcommand),

	/// Triangulate polygons
	Tessellate(tools::tessellate::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	let config = tools::load_config(cli.config.as_deref())?;
	match &cli.command {
		Commands::Clip(arguments) => tools::clip::run(arguments, &config),
		Commands::Contains(arguments) => tools::contains::run(arguments, &config),
		Commands::Convert(arguments) => tools::convert::run(arguments, &config),
		Commands::Grid(arguments) => tools::grid::run(arguments, &config),
		Commands::Info(arguments) => tools::info::run(arguments, &config),
		Commands::SplitAssembly(arguments) => tools::split_assembly::run(arguments, &config),
		Commands::Subdivide(arguments) => tools::subdivide::run(arguments, &config),
		Commands::Tessellate(arguments) => tools::tessellate::run(arguments, &config),
	}
}
