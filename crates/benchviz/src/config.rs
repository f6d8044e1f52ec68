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

//! Report configuration.
//!
//! The results directory is resolved once by the caller and threaded through
//! the pipeline inside a [`ReportConfig`]; nothing reads it from ambient state.

use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the results directory next to the executable.
pub const DEFAULT_RESULTS_SUBDIR: &str = "results";

/// Default maximum size of a single result file (64 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`].
pub const MAX_FILE_SIZE_ENV: &str = "BENCHVIZ_MAX_FILE_SIZE";

/// Project name highlighted in the report header.
pub const DEFAULT_PROJECT: &str = "Socketley";

/// Default one-line description under the report title.
pub const DEFAULT_SUBTITLE: &str = "io_uring async I/O · single-threaded event loop · Linux";

/// Default environment badges. Display-only, nothing is measured.
pub const DEFAULT_BADGES: &[&str] = &[
    "🖥️ Intel Core Ultra 5 125H",
    "⚙️ 4 cores / 3.8 GiB VM",
    "🐧 Kernel 6.8.0-100-generic",
    "🔧 Release build · statically linked",
];

/// Export format options for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExportFormat {
    /// Self-contained HTML document with charts.
    Html,
    /// Pretty-printed JSON dump of the report model.
    Json,
    /// Markdown tables for documentation.
    Markdown,
}

impl ExportFormat {
    /// File extension used for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
        }
    }
}

/// Report generation configuration.
///
/// # Example
///
/// ```no_run
/// use benchviz::config::{ExportFormat, ReportConfig};
///
/// let config = ReportConfig::new("bench/results")
///     .with_output_dir("public")
///     .with_export_format(ExportFormat::Json);
/// ```
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Directory scanned for `<suite>_*.json` result files.
    pub results_dir: PathBuf,
    /// Directory reports are written to. Defaults to `results_dir`.
    pub output_dir: Option<PathBuf>,
    /// Formats to write. HTML is always included.
    pub export_formats: Vec<ExportFormat>,
    /// Result files larger than this are treated as unreadable.
    pub max_file_size: u64,
    /// Project name shown in the header.
    pub project: String,
    /// Subtitle shown under the header.
    pub subtitle: String,
    /// Environment badges shown in the header.
    pub badges: Vec<String>,
}

impl ReportConfig {
    /// Creates a configuration reading results from `results_dir`.
    pub fn new(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
            output_dir: None,
            export_formats: vec![ExportFormat::Html],
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            project: DEFAULT_PROJECT.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            badges: DEFAULT_BADGES.iter().map(|b| b.to_string()).collect(),
        }
    }

    /// Resolves the default results directory: `results/` next to the
    /// running executable, or relative to the working directory when the
    /// executable path is unknown.
    pub fn default_results_dir() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_RESULTS_SUBDIR)))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_SUBDIR))
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Adds an export format.
    pub fn with_export_format(mut self, format: ExportFormat) -> Self {
        if !self.export_formats.contains(&format) {
            self.export_formats.push(format);
        }
        self
    }

    /// Sets all export formats. HTML is kept regardless.
    pub fn with_export_formats(mut self, formats: Vec<ExportFormat>) -> Self {
        self.export_formats = vec![ExportFormat::Html];
        for format in formats {
            self = self.with_export_format(format);
        }
        self
    }

    /// Sets the maximum result file size.
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Replaces the environment badges.
    pub fn with_badges(mut self, badges: Vec<String>) -> Self {
        self.badges = badges;
        self
    }

    /// Applies overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        let size = parse_max_file_size(std::env::var(MAX_FILE_SIZE_ENV).ok().as_deref());
        match size {
            Some(bytes) => self.with_max_file_size(bytes),
            None => self,
        }
    }

    /// Directory reports are written to.
    pub fn output_dir(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or(&self.results_dir)
    }

    /// Returns whether a specific export format is enabled.
    pub fn has_format(&self, format: ExportFormat) -> bool {
        self.export_formats.contains(&format)
    }

    /// Checks the configuration before any work is done.
    pub fn validate(&self) -> Result<()> {
        if !self.has_format(ExportFormat::Html) {
            return Err(ReportError::invalid_config(
                "export_formats",
                "the HTML report is always written and must be enabled",
            ));
        }
        if self.max_file_size == 0 {
            return Err(ReportError::invalid_config(
                "max_file_size",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new(Self::default_results_dir())
    }
}

fn parse_max_file_size(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|&bytes| bytes > 0)
}
