//! Where the generated report goes.

use std::path::{Path, PathBuf};

use crate::error::{Result, StubGenError};

/// File name of the report inside the downloads directory
pub const REPORT_FILE_NAME: &str = "deleteme.txt";

/// `~/Downloads/deleteme.txt`
/// - macOS/Linux: `$HOME/Downloads/deleteme.txt`
/// - Windows: `%USERPROFILE%\Downloads\deleteme.txt`
pub fn default_output_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(StubGenError::NoHomeDir)?;
    Ok(home.join("Downloads").join(REPORT_FILE_NAME))
}

/// Overwrite `path` with `report`, creating its directory if needed
pub fn write_report(path: &Path, report: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            StubGenError::io(format!("failed to create {}", parent.display()), e)
        })?;
    }

    std::fs::write(path, report)
        .map_err(|e| StubGenError::io(format!("failed to write {}", path.display()), e))
}
