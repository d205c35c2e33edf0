//! Library module: reading tags from the source tree and laying the songs
//! out again under the destination.

mod extract;
mod model;
mod scan;
mod write;

pub use extract::{LoftyReader, TagReader};
pub use model::Song;
pub use scan::scan;
pub use write::{WriteSummary, write_library};
