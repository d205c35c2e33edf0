use std::path::Path;

use lofty::config::ParseOptions;
use lofty::error::LoftyError;
use lofty::file::FileType;
use lofty::prelude::*;
use lofty::probe::Probe;
use thiserror::Error;

use crate::run_log::RunLog;

use super::model::Song;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unable to open file: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to read tags: {0}")]
    Read(#[from] LoftyError),
    #[error("not an MPEG audio file (detected {0:?})")]
    NotMpeg(Option<FileType>),
    #[error("file carries no tag block")]
    MissingTag,
}

/// Reads the tag fields of one file.
pub trait TagReader {
    fn read_song(&self, path: &Path) -> Result<Song, ExtractError>;
}

/// Tag reader backed by `lofty`, restricted to MPEG files.
///
/// Only the tags are parsed; audio frames may be truncated or corrupt.
pub struct LoftyReader;

/// Blank values count as absent; anything else is kept verbatim.
fn non_empty(v: Option<std::borrow::Cow<'_, str>>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty()).map(|s| s.into_owned())
}

impl TagReader for LoftyReader {
    fn read_song(&self, path: &Path) -> Result<Song, ExtractError> {
        // The type is sniffed from content, the extension is only a fallback.
        let probe = Probe::open(path)?
            .options(ParseOptions::new().read_properties(false))
            .guess_file_type()?;
        match probe.file_type() {
            Some(FileType::Mpeg) => {}
            other => return Err(ExtractError::NotMpeg(other)),
        }
        let tagged = probe.read()?;

        let tag = tagged
            .primary_tag()
            .or_else(|| tagged.first_tag())
            .ok_or(ExtractError::MissingTag)?;

        Ok(Song {
            title: non_empty(tag.title()),
            track_number: tag.track(),
            album: non_empty(tag.album()),
            artist: non_empty(tag.artist()),
            path: path.to_path_buf(),
        })
    }
}

/// Read one file into a [`Song`], logging and returning `None` when its tags
/// can't be parsed.
pub fn extract_song(path: &Path, reader: &dyn TagReader, run_log: &mut dyn RunLog) -> Option<Song> {
    match reader.read_song(path) {
        Ok(song) => Some(song),
        Err(e) => {
            log::debug!("{}: {e}", path.display());
            run_log.line(&format!(
                "Failed to extract mp3 metadata for file at path {}, please handle manually.",
                path.display()
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write_tag_only_mp3;
    use std::borrow::Cow;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn non_empty_keeps_whitespace_but_drops_blank_values() {
        assert_eq!(non_empty(Some(Cow::Borrowed(" Song A "))).as_deref(), Some(" Song A "));
        assert_eq!(non_empty(Some(Cow::Borrowed("   "))), None);
        assert_eq!(non_empty(Some(Cow::Borrowed(""))), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn reads_tags_when_audio_frames_are_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("truncated.mp3");
        write_tag_only_mp3(&path, "Air", "Moon", "1", "Song A");

        let song = LoftyReader.read_song(&path).unwrap();
        assert_eq!(song.title.as_deref(), Some("Song A"));
        assert_eq!(song.artist.as_deref(), Some("Air"));
        assert_eq!(song.track_number, Some(1));
    }

    #[test]
    fn rejects_other_formats_hiding_behind_mp3_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("actually-flac.mp3");
        let mut data = b"fLaC".to_vec();
        data.extend_from_slice(&[0u8; 64]);
        fs::write(&path, data).unwrap();

        let err = LoftyReader.read_song(&path).unwrap_err();
        assert!(matches!(err, ExtractError::NotMpeg(Some(FileType::Flac))));
    }
}
