use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

use crate::config::LayoutSettings;
use crate::run_log::RunLog;

use super::model::Song;

/// Per-run counters reported once writing finishes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteSummary {
    pub copied: usize,
    pub duplicates: usize,
    pub failed: usize,
}

fn copy_song(src: &Path, dst: &Path) -> io::Result<()> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(src, dst)?;
    Ok(())
}

/// A path segment that must be a directory already exists as a file.
fn is_path_collision(e: &io::Error) -> bool {
    matches!(e.kind(), ErrorKind::NotADirectory | ErrorKind::AlreadyExists)
}

/// Sort `songs` and copy each one to its place under `destination`.
///
/// A song whose target already exists is skipped, so among songs sharing a
/// target the first in sort order wins. Individual failures are logged and
/// never stop the loop.
pub fn write_library(
    mut songs: Vec<Song>,
    destination: &Path,
    extension: &str,
    layout: &LayoutSettings,
    run_log: &mut dyn RunLog,
) -> WriteSummary {
    songs.sort();

    let mut summary = WriteSummary::default();
    for song in &songs {
        let src = &song.path;
        let dst = song.intended_path(destination, extension, layout);

        if dst.exists() {
            run_log.line(&format!(
                "Duplicate detected! Skipping copy of {} to {} since destination file already exists.",
                src.display(),
                dst.display()
            ));
            summary.duplicates += 1;
            continue;
        }

        match copy_song(src, &dst) {
            Ok(()) => summary.copied += 1,
            Err(e) if is_path_collision(&e) => {
                run_log.line(&format!(
                    "Failed to copy {} to {} due to error {e} (Possibly caused by characters in path \
                     which are not legal file names, or by a file where a directory is expected. \
                     If so, please manually pick an appropriate name for this file.)",
                    src.display(),
                    dst.display()
                ));
                summary.failed += 1;
            }
            Err(e) => {
                run_log.line(&format!(
                    "Failed to copy {} to {} due to error {e}, please handle manually.",
                    src.display(),
                    dst.display()
                ));
                summary.failed += 1;
            }
        }
    }

    run_log.line(&format!(
        "Copied {} files, skipped {} duplicates, {} failures.",
        summary.copied, summary.duplicates, summary.failed
    ));
    run_log.line("Copy complete, terminating.");
    summary
}
