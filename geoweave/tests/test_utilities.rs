#![allow(unused)]

use assert_cmd::{Command, cargo};
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

#[cfg(windows)]
pub const BINARY_NAME: &str = "geoweave.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "geoweave";

/// Helper to get a testdata file path.
pub fn get_testdata(filename: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR"))
		.parent()
		.unwrap()
		.join("testdata")
		.join(filename)
}

/// Helper to get a temp output file path.
pub fn get_temp_output(filename: &str) -> (TempDir, PathBuf) {
	let dir = tempdir().expect("failed to create temp dir");
	let path = dir.path().join(filename);
	(dir, path)
}

/// Helper to create a Command for the geoweave binary.
pub fn geoweave_cmd() -> Command {
	Command::new(cargo::cargo_bin!())
}

/// Runs `geoweave info` on a file and returns stdout.
pub fn info(path: &Path) -> String {
	let output = geoweave_cmd().arg("info").arg(path).assert().success().get_output().stdout.clone();
	String::from_utf8(output).expect("info output is UTF-8")
}
