use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::report::Report;

pub struct ExportService;

impl ExportService {
    /// Pretty-printed JSON array, two-space indent, no trailing newline.
    pub fn render_reports(reports: &[Report]) -> Result<String> {
        Ok(serde_json::to_string_pretty(reports)?)
    }

    /// Renders first, then writes in a single call, so a rendering failure
    /// never leaves a partial file behind.
    pub fn write_reports(path: &Path, reports: &[Report]) -> Result<()> {
        let body = Self::render_reports(reports)?;
        fs::write(path, body).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), reports = reports.len(), "Report written");
        Ok(())
    }
}
