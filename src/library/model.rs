use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::config::LayoutSettings;

/// One MP3 found in the source tree, with whatever tags it carried.
#[derive(Debug, Clone)]
pub struct Song {
    pub title: Option<String>,
    /// Track number only; the "of N" total is not kept.
    pub track_number: Option<u32>,
    pub album: Option<String>,
    pub artist: Option<String>,
    pub path: PathBuf,
}

fn text(v: &Option<String>) -> &str {
    v.as_deref().unwrap_or("")
}

impl Song {
    /// Ordering key. Absent text compares as the empty string.
    fn sort_key(&self) -> (&str, &str, Option<u32>, &str, &Path) {
        (
            text(&self.artist),
            text(&self.album),
            self.track_number,
            text(&self.title),
            &self.path,
        )
    }

    /// Same artist, album, track number and title, regardless of where the files live.
    pub fn same_track(&self, other: &Song) -> bool {
        let (a, b) = (self.sort_key(), other.sort_key());
        (a.0, a.1, a.2, a.3) == (b.0, b.1, b.2, b.3)
    }

    /// Where this song belongs under `root`:
    /// `root/Artist/Album/{track} {title}.{extension}`.
    pub fn intended_path(&self, root: &Path, extension: &str, layout: &LayoutSettings) -> PathBuf {
        let artist = component(self.artist.as_deref(), &layout.unknown_artist);
        let album = component(self.album.as_deref(), &layout.unknown_album);
        let title = component(self.title.as_deref(), &layout.unknown_title);
        let extension = extension.trim_start_matches('.');

        let file_name = match self.track_number {
            Some(n) => format!("{n} {title}.{extension}"),
            None => format!("{title}.{extension}"),
        };

        root.join(artist).join(album).join(file_name)
    }
}

/// Turn a tag value into a single path component that stays under the root.
fn component(value: Option<&str>, placeholder: &str) -> String {
    let value = value.filter(|s| !s.trim().is_empty()).unwrap_or(placeholder);
    if value == "." || value == ".." {
        return "_".to_string();
    }
    value
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect()
}

impl PartialEq for Song {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for Song {}

impl PartialOrd for Song {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Song {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}
