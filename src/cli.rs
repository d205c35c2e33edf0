use std::path::PathBuf;

use clap::Parser;

/// Organize the music library contained in the source directory, reading the
/// tags of every MP3 found and copying it to `Artist/Album/Track Title.mp3`
/// inside the destination directory.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the current (unorganized) music library.
    #[arg(long = "music_library_source", alias = "source", value_name = "PATH")]
    pub source: PathBuf,

    /// Path where the organized library should be created. Must not exist yet.
    #[arg(long = "music_library_destination", alias = "destination", value_name = "PATH")]
    pub destination: PathBuf,

    /// Write a line for every skipped, failed or duplicate file to this path.
    #[arg(long, value_name = "PATH")]
    pub logfile: Option<PathBuf>,
}
