//! Shared building blocks for the geoweave crates.
//!
//! - [`Blob`]: an owned byte buffer
//! - [`io`]: byte-order aware value readers and writers used by the binary feature format
//! - [`byte_iterator`]: a small cursor with JSON-oriented parsing helpers
//! - [`json`]: a JSON value model with parser and stringifier

mod blob;
pub mod byte_iterator;
pub mod io;
pub mod json;

pub use blob::Blob;
