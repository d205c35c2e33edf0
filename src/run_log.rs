//! Line-oriented run log.
//!
//! Every skip, failure and duplicate is reported through a [`RunLog`] that the
//! runtime builds once and hands to each stage. Without a `--logfile` the lines
//! are dropped; they are always mirrored to the `log` facade at debug level.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub trait RunLog {
    /// Append one line. Implementations add the trailing newline.
    fn line(&mut self, line: &str);
}

/// Writes lines to a log file, truncating whatever was there before.
pub struct FileLog {
    out: BufWriter<File>,
    write_failed: bool,
}

impl FileLog {
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            out: BufWriter::new(file),
            write_failed: false,
        })
    }
}

impl RunLog for FileLog {
    fn line(&mut self, line: &str) {
        log::debug!("{line}");
        if self.write_failed {
            return;
        }
        if let Err(e) = writeln!(self.out, "{line}") {
            log::warn!("failed to write to log file, further lines are dropped: {e}");
            self.write_failed = true;
        }
    }
}

impl Drop for FileLog {
    fn drop(&mut self) {
        if let Err(e) = self.out.flush() {
            log::warn!("failed to flush log file: {e}");
        }
    }
}

/// Used when no log file was requested.
pub struct DiscardLog;

impl RunLog for DiscardLog {
    fn line(&mut self, line: &str) {
        log::debug!("{line}");
    }
}
