//! Configuration loader and schema types.
//!
//! Settings tune how the source tree is scanned and how missing tags are
//! rendered in the organized layout.

mod load;
mod schema;

pub use schema::*;
