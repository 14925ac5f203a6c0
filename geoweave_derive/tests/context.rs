use anyhow::{Result, bail};
use geoweave_derive::context;
use pretty_assertions::assert_eq;

#[context("parsing ring {index}")]
fn parse_ring(index: usize, fail: bool) -> Result<usize> {
	if fail {
		bail!("ring is not closed");
	}
	Ok(index * 2)
}

#[context(move, "consuming owned input")]
fn consume(name: String) -> Result<usize> {
	let len = name.len();
	drop(name);
	if len == 0 {
		bail!("empty");
	}
	Ok(len)
}

#[test]
fn ok_passes_through() {
	assert_eq!(parse_ring(3, false).unwrap(), 6);
}

#[test]
fn error_gains_context() {
	let err = parse_ring(4, true).unwrap_err();
	assert_eq!(
		format!("{err:#}"),
		"parsing ring 4: ring is not closed".to_string()
	);
}

#[test]
fn move_closure_is_supported() {
	assert_eq!(consume("abc".to_string()).unwrap(), 3);
	let err = consume(String::new()).unwrap_err();
	assert_eq!(err.chain().count(), 2);
}
