//! Run report files.

use std::path::Path;

use cadwatch_domain::RunReport;
use tokio::fs;
use tracing::info;

use crate::serialization::{SerializationError, from_json, to_json_stable};

/// Default report location, relative to the working directory.
pub const DEFAULT_REPORT_PATH: &str = "cadwatch-report.json";

/// Writes `report` as stable JSON, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the report cannot be serialized or written.
pub async fn write_report(path: &Path, report: &RunReport) -> Result<(), SerializationError> {
    let json = to_json_stable(report)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, json).await?;
    info!(path = %path.display(), cases = report.total, "report written");
    Ok(())
}

/// Reads a report previously written by [`write_report`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a report.
pub async fn read_report(path: &Path) -> Result<RunReport, SerializationError> {
    let json = fs::read_to_string(path).await?;
    from_json(&json)
}
