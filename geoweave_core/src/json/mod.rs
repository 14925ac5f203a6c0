//! A minimal JSON value model with a parser and a compact stringifier.
//!
//! Numbers are kept as `f64`; callers that need integer semantics (e.g. feature attributes)
//! check integrality themselves.

mod array;
mod object;
mod parse;
mod stringify;
mod value;

pub use array::JsonArray;
pub use object::JsonObject;
pub use parse::{parse_json_iter, parse_json_str};
pub use stringify::{escape_json_string, stringify};
pub use value::JsonValue;
