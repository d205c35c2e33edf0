//! Helpers shared by tests: a run log that keeps its lines in memory and a
//! generator for small but real tagged MP3 files.

use std::path::Path;

use crate::run_log::RunLog;

#[derive(Default)]
pub struct MemoryLog {
    pub lines: Vec<String>,
}

impl MemoryLog {
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

impl RunLog for MemoryLog {
    fn line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

fn text_frame(id: &[u8; 4], value: &str) -> Vec<u8> {
    // Encoding byte 0 (ISO-8859-1) followed by the text.
    let mut body = vec![0u8];
    body.extend_from_slice(value.as_bytes());

    let mut frame = Vec::with_capacity(10 + body.len());
    frame.extend_from_slice(id);
    frame.extend_from_slice(&(body.len() as u32).to_be_bytes());
    frame.extend_from_slice(&[0, 0]);
    frame.extend_from_slice(&body);
    frame
}

fn syncsafe(n: u32) -> [u8; 4] {
    [
        ((n >> 21) & 0x7f) as u8,
        ((n >> 14) & 0x7f) as u8,
        ((n >> 7) & 0x7f) as u8,
        (n & 0x7f) as u8,
    ]
}

/// MPEG-1 Layer III, 128 kbps, 44.1 kHz, joint stereo.
const FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];
const FRAME_LEN: usize = 417;

fn id3v2_tag(artist: &str, album: &str, track: &str, title: &str) -> Vec<u8> {
    let mut frames = Vec::new();
    frames.extend(text_frame(b"TPE1", artist));
    frames.extend(text_frame(b"TALB", album));
    frames.extend(text_frame(b"TRCK", track));
    frames.extend(text_frame(b"TIT2", title));

    let mut data = Vec::new();
    data.extend_from_slice(b"ID3");
    data.extend_from_slice(&[3, 0, 0]);
    data.extend_from_slice(&syncsafe(frames.len() as u32));
    data.extend(frames);
    data
}

/// Write an ID3v2.3-tagged MP3 made of silent frames. `salt` is stored in the
/// last frame so that files with identical tags still differ in content.
pub fn write_tagged_mp3(path: &Path, artist: &str, album: &str, track: &str, title: &str, salt: &[u8]) {
    let mut data = id3v2_tag(artist, album, track, title);

    for i in 0..16 {
        let mut frame = vec![0u8; FRAME_LEN];
        frame[..4].copy_from_slice(&FRAME_HEADER);
        if i == 15 {
            assert!(salt.len() <= 64, "salt too long");
            frame[100..100 + salt.len()].copy_from_slice(salt);
        }
        data.extend(frame);
    }

    std::fs::write(path, data).unwrap();
}

/// Write a file holding only an ID3v2.3 tag, as left behind by a truncated download.
pub fn write_tag_only_mp3(path: &Path, artist: &str, album: &str, track: &str, title: &str) {
    std::fs::write(path, id3v2_tag(artist, album, track, title)).unwrap();
}
