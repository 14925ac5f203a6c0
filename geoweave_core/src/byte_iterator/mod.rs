//! Byte cursor and the small parsing primitives the JSON reader is built from.

mod basics;
mod iterator;

pub use basics::*;
pub use iterator::ByteIterator;
