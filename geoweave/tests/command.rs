mod test_utilities;
use assert_cmd::{Command, cargo};
use predicates::str;
use rstest::rstest;
use test_utilities::BINARY_NAME;

#[test]
fn command() -> Result<(), Box<dyn std::error::Error>> {
	let mut cmd = Command::new(cargo::cargo_bin!());
	cmd.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} [OPTIONS] <COMMAND>")));
	Ok(())
}

#[rstest]
#[case("contains", "[OPTIONS] <INPUT_FILE> <LON> <LAT>")]
#[case("convert", "[OPTIONS] <INPUT_FILE> <OUTPUT_FILE>")]
#[case("info", "[OPTIONS] <INPUT_FILE>")]
#[case("split-assembly", "[OPTIONS] <INPUT_FILE> <OUTPUT_DIR>")]
#[case("subdivide", "[OPTIONS] <INPUT_FILE> <OUTPUT_FILE>")]
#[case("tessellate", "[OPTIONS] <INPUT_FILE> <OUTPUT_FILE>")]
fn subcommand(#[case] sub_command: &str, #[case] usage: &str) -> Result<(), Box<dyn std::error::Error>> {
	Command::new(cargo::cargo_bin!())
		.args(sub_command.split(" "))
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} {sub_command} {usage}")));
	Ok(())
}

#[rstest]
#[case("clip")]
#[case("grid")]
fn subcommand_with_required_option(#[case] sub_command: &str) -> Result<(), Box<dyn std::error::Error>> {
	Command::new(cargo::cargo_bin!())
		.arg(sub_command)
		.assert()
		.failure()
		.code(2)
		.stderr(str::contains(format!("Usage: {BINARY_NAME} {sub_command} [OPTIONS]")));
	Ok(())
}
