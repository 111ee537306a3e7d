//! Configuration loader and schema types.
//!
//! Every setting is optional; the defaults match the built-in behavior of
//! the scanner, the artwork lookup and the cover writer.

mod load;
mod schema;

pub use schema::*;
