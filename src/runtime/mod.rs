use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::cli::Args;
use crate::config::Settings;
use crate::library::{LoftyReader, TagReader, WriteSummary, scan, write_library};
use crate::run_log::{DiscardLog, FileLog, RunLog};

mod preflight;

/// Conditions that stop a run before any file is touched.
#[derive(Debug, Error)]
pub enum OrganizeError {
    #[error("music library source directory does not exist: {}", .0.display())]
    SourceMissing(PathBuf),
    #[error(
        "music library destination directory already exists, please pick an empty one: {}",
        .0.display()
    )]
    DestinationExists(PathBuf),
    #[error("could not open log file {}: {source}", .path.display())]
    LogFile { path: PathBuf, source: io::Error },
}

fn open_run_log(path: Option<&Path>) -> Result<Box<dyn RunLog>, OrganizeError> {
    match path {
        Some(path) => {
            println!("Logging to {}.", path.display());
            let log = FileLog::create(path).map_err(|source| OrganizeError::LogFile {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(log))
        }
        None => Ok(Box::new(DiscardLog)),
    }
}

pub fn run(args: &Args, settings: &Settings) -> Result<WriteSummary, OrganizeError> {
    println!("Preparing to organize files from {}.", args.source.display());
    preflight::check(&args.source, &args.destination)?;

    let mut run_log = open_run_log(args.logfile.as_deref())?;
    let summary = organize(
        &args.source,
        &args.destination,
        settings,
        &LoftyReader,
        run_log.as_mut(),
    );

    println!(
        "Organized music files have been copied to {}",
        args.destination.display()
    );
    Ok(summary)
}

/// Scan `source` completely, then write everything found under `destination`.
pub fn organize(
    source: &Path,
    destination: &Path,
    settings: &Settings,
    reader: &dyn TagReader,
    run_log: &mut dyn RunLog,
) -> WriteSummary {
    run_log.line("Beginning iteration through music files.");
    let songs = scan(source, &settings.scan, reader, run_log);
    run_log.line(&format!(
        "Successfully extracted {} songs from library source.",
        songs.len()
    ));

    write_library(
        songs,
        destination,
        &settings.scan.extension,
        &settings.layout,
        run_log,
    )
}
