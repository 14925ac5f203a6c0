use anyhow::Result;
use geoweave_geometry::{Coordinates, FeatureStore, ProcessingConfig, math::Bounds};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// input file: *.geojson, *.json or *.gwv
	#[arg()]
	input_file: PathBuf,
}

pub fn run(arguments: &Subcommand, _config: &ProcessingConfig) -> Result<()> {
	let store = super::read_store(&arguments.input_file)?;
	print!("{}", describe(&store));
	Ok(())
}

/// Human readable summary; angles are shown in degrees.
fn describe(store: &FeatureStore) -> String {
	let mut lines = vec![
		format!("type:         {}", store.vector_type()),
		format!("sub-features: {}", store.len()),
		format!("points:       {}", store.point_count()),
	];
	if let Some(bounds) = store.bounds() {
		lines.push(format!("bounds:       {}", format_bounds(&bounds)));
	}
	if let Ok(centroid) = store.centroid() {
		lines.push(format!("centroid:     {}", format_point(&centroid)));
	}
	if let Ok(largest) = store.largest_loop() {
		lines.push(format!(
			"largest loop: {} around {}",
			format_bounds(&largest.bounds),
			format_point(&largest.center)
		));
	}
	if let Ok(middle) = store.linear_middle() {
		lines.push(format!(
			"line middle:  {} heading {:.3}°",
			format_point(&middle.point),
			middle.orientation.to_degrees()
		));
	}
	if !store.attributes().is_empty() {
		lines.push(format!("attributes:   {}", store.attributes().to_json().stringify()));
	}
	let mut text = lines.join("\n");
	text.push('\n');
	text
}

fn format_point(c: &Coordinates) -> String {
	format!("{:.6}, {:.6}", c.x().to_degrees(), c.y().to_degrees())
}

fn format_bounds(b: &Bounds) -> String {
	format!(
		"[{:.6}, {:.6}, {:.6}, {:.6}]",
		b.min_x.to_degrees(),
		b.min_y.to_degrees(),
		b.max_x.to_degrees(),
		b.max_y.to_degrees()
	)
}
