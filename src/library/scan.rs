use std::path::Path;

use walkdir::WalkDir;

use crate::config::ScanSettings;
use crate::run_log::RunLog;

use super::extract::{TagReader, extract_song};
use super::model::Song;

/// Case-sensitive suffix match on the file name.
fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(suffix))
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Walk `dir` and collect a [`Song`] for every readable MP3 below it.
///
/// The result is in directory-listing order; callers sort before use.
pub fn scan(
    dir: &Path,
    settings: &ScanSettings,
    reader: &dyn TagReader,
    run_log: &mut dyn RunLog,
) -> Vec<Song> {
    let suffix = settings.suffix();
    let mut songs: Vec<Song> = Vec::new();

    let walker = WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                // Unreadable directories and symlink loops end up here.
                run_log.line(&format!("Failed to read directory entry: {e}"));
                continue;
            }
        };

        let path = entry.path();
        let file_type = entry.file_type();
        if file_type.is_dir() {
            continue;
        }
        if !file_type.is_file() {
            run_log.line(&format!("skipping non-regular file {}.", path.display()));
            continue;
        }

        if has_suffix(path, &suffix) {
            songs.extend(extract_song(path, reader, run_log));
        } else {
            run_log.line(&format!("skipping non-mp3 file {}.", path.display()));
        }
    }

    songs
}
