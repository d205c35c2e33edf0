use std::fs;
use std::path::Path;

use super::OrganizeError;

/// Refuse to start unless the source exists and the destination does not.
pub fn check(source: &Path, destination: &Path) -> Result<(), OrganizeError> {
    if !source.exists() {
        return Err(OrganizeError::SourceMissing(source.to_path_buf()));
    }
    // symlink_metadata so that a dangling symlink also counts as "exists".
    if fs::symlink_metadata(destination).is_ok() {
        return Err(OrganizeError::DestinationExists(destination.to_path_buf()));
    }
    Ok(())
}
