//! Output writing.

use std::path::Path;

use crate::error::{CliError, CliResult};

/// Writes generated source to `path`, creating parent directories first.
pub fn write_output(path: &Path, content: &str) -> CliResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|source| CliError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    std::fs::write(path, content).map_err(|source| CliError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}
