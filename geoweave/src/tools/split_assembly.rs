use anyhow::{Result, bail};
use geoweave_geometry::{FeatureStore, ProcessingConfig};
use log::error;
use std::{fs, path::PathBuf};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// JSON object whose members are GeoJSON documents
	#[arg()]
	input_file: PathBuf,

	/// directory receiving one file per member
	#[arg()]
	output_dir: PathBuf,

	/// extension of the written files
	#[arg(long, default_value = "geojson", value_parser = ["geojson", "gwv"])]
	format: String,
}

/// Members that fail to load are reported and skipped; the command fails if any did.
pub fn run(arguments: &Subcommand, config: &ProcessingConfig) -> Result<()> {
	let text = fs::read_to_string(&arguments.input_file)?;
	let members = FeatureStore::from_geojson_assembly(&text)?;
	fs::create_dir_all(&arguments.output_dir)?;

	let mut failed = 0;
	for (name, store) in &members {
		match store {
			Ok(store) => {
				let path = arguments.output_dir.join(format!("{}.{}", file_stem(name), arguments.format));
				super::write_store(store, &path, config)?;
			}
			Err(err) => {
				error!("member '{name}': {err}");
				failed += 1;
			}
		}
	}

	if failed > 0 {
		bail!("{failed} of {} assembly member(s) could not be loaded", members.len());
	}
	Ok(())
}

/// Member names reduced to characters that are safe in file names.
fn file_stem(name: &str) -> String {
	let stem: String = name
		.chars()
		.map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
		.collect();
	if stem.is_empty() { String::from("_") } else { stem }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn file_stems() {
		assert_eq!(file_stem("lakes"), "lakes");
		assert_eq!(file_stem("../etc/passwd"), "___etc_passwd");
		assert_eq!(file_stem("Zürich 2"), "Zürich_2");
		assert_eq!(file_stem(""), "_");
	}
}
