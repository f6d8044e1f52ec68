// Benchviz - Benchmark Result Visualizer
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Report writers for the supported output formats.
//!
//! # Modules
//!
//! - `html`: Self-contained HTML document with Chart.js charts
//! - `json`: JSON dump of the report model
//! - `markdown`: Markdown tables
//! - `console`: Plain-text summary on stdout

pub mod console;
pub mod html;
pub mod json;
pub mod markdown;

pub use console::{format_summary, print_summary};
pub use html::{escape_html, export_html, render_html, CHART_JS_URL};
pub use json::{export_json, render_json};
pub use markdown::{export_markdown, render_markdown};

use crate::config::{ExportFormat, ReportConfig};
use crate::error::{ReportError, Result};
use crate::report::ReportModel;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name for a report generated at `generated_at`, e.g.
/// `report_20250131_142501.html`.
pub fn report_file_name(generated_at: &DateTime<Local>, format: ExportFormat) -> String {
    format!(
        "report_{}.{}",
        generated_at.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Files written by [`write_report`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WrittenReport {
    /// Written files in the order they were produced.
    pub paths: Vec<(ExportFormat, PathBuf)>,
}

impl WrittenReport {
    /// Path of the file written for `format`, if any.
    pub fn path(&self, format: ExportFormat) -> Option<&Path> {
        self.paths
            .iter()
            .find(|(f, _)| *f == format)
            .map(|(_, p)| p.as_path())
    }

    /// Path of the HTML report.
    pub fn html_path(&self) -> Option<&Path> {
        self.path(ExportFormat::Html)
    }
}

/// Writes the report in every configured format.
///
/// An explicit output directory is created if needed. When reports go to the
/// results directory it must already exist, so a mistyped results path fails
/// instead of producing an empty report. The first failing write aborts the
/// run; files already written are left in place.
pub fn write_report(report: &ReportModel, config: &ReportConfig) -> Result<WrittenReport> {
    let output_dir = config.output_dir();
    if config.output_dir.is_some() {
        fs::create_dir_all(output_dir).map_err(|e| ReportError::io_error(output_dir, e))?;
    }

    let mut written = WrittenReport::default();
    for &format in &config.export_formats {
        let path = output_dir.join(report_file_name(&report.generated_at, format));
        debug!(path = %path.display(), ?format, "writing report");

        match format {
            ExportFormat::Html => export_html(report, &path)?,
            ExportFormat::Json => export_json(report, &path)?,
            ExportFormat::Markdown => export_markdown(report, &path)?,
        }

        info!(path = %path.display(), "report written");
        written.paths.push((format, path));
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::assemble;
    use crate::results::ReportInputs;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 1, 31, 14, 25, 1).unwrap()
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(
            report_file_name(&fixed_time(), ExportFormat::Html),
            "report_20250131_142501.html"
        );
        assert_eq!(
            report_file_name(&fixed_time(), ExportFormat::Markdown),
            "report_20250131_142501.md"
        );
    }

    #[test]
    fn test_write_report_all_formats() {
        let dir = TempDir::new().unwrap();
        let config = ReportConfig::new(dir.path())
            .with_export_formats(vec![ExportFormat::Json, ExportFormat::Markdown]);
        let report = assemble(&ReportInputs::empty(), fixed_time(), &config);

        let written = write_report(&report, &config).unwrap();

        assert_eq!(written.paths.len(), 3);
        let html = written.html_path().unwrap();
        assert_eq!(html, dir.path().join("report_20250131_142501.html"));
        assert!(html.exists());
        assert!(written.path(ExportFormat::Json).unwrap().exists());
        assert!(written.path(ExportFormat::Markdown).unwrap().exists());
    }

    #[test]
    fn test_write_report_creates_output_dir() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("nested").join("out");
        let config = ReportConfig::new(dir.path()).with_output_dir(&out);
        let report = assemble(&ReportInputs::empty(), fixed_time(), &config);

        let written = write_report(&report, &config).unwrap();

        assert!(written.html_path().unwrap().starts_with(&out));
        assert!(written.path(ExportFormat::Json).is_none());
    }

    #[test]
    fn test_write_report_fails_when_output_is_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let config = ReportConfig::new(dir.path()).with_output_dir(&blocker);
        let report = assemble(&ReportInputs::empty(), fixed_time(), &config);

        let err = write_report(&report, &config).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }

    #[test]
    fn test_write_report_missing_results_dir_fails() {
        let dir = TempDir::new().unwrap();
        let results = dir.path().join("typo");
        let config = ReportConfig::new(&results);
        let report = assemble(&ReportInputs::empty(), fixed_time(), &config);

        let err = write_report(&report, &config).unwrap_err();

        assert!(matches!(err, ReportError::Io { .. }));
        assert!(!results.exists());
    }
}
