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

//! Command-line arguments and execution.

use crate::error::Result;
use benchviz::{build_report, print_summary, write_report, ExportFormat, ReportConfig, WrittenReport};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use tracing::debug;

/// Benchviz - Benchmark result visualizer
///
/// Scans a results directory for the newest server, cache, proxy and
/// websocket result files and writes a self-contained HTML report.
///
/// # Examples
///
/// ```bash
/// # Use results/ next to the executable
/// benchviz
///
/// # Explicit directories, plus a Markdown copy
/// benchviz bench/results -o public -f markdown
/// ```
#[derive(Parser, Debug)]
#[command(name = "benchviz")]
#[command(author, version, about = "Benchviz - Benchmark result visualizer", long_about = None)]
pub struct Cli {
    /// Directory containing <suite>_*.json result files
    #[arg(value_name = "RESULTS_DIR")]
    pub results_dir: Option<PathBuf>,

    /// Directory to write reports to (defaults to RESULTS_DIR)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Additional export format; HTML is always written
    #[arg(short, long = "format", value_enum, value_name = "FORMAT")]
    pub formats: Vec<FormatArg>,

    /// Print a summary of the headline figures
    #[arg(long)]
    pub summary: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Report formats selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// HTML document
    Html,
    /// JSON dump of the report model
    Json,
    /// Markdown tables
    Markdown,
}

impl From<FormatArg> for ExportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Html => ExportFormat::Html,
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Markdown => ExportFormat::Markdown,
        }
    }
}

/// Default log directive for a `-v` count.
pub fn log_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "benchviz=error",
        1 => "benchviz=info",
        _ => "benchviz=debug",
    }
}

impl Cli {
    /// Builds the report configuration from the arguments and environment.
    pub fn config(&self) -> ReportConfig {
        let results_dir = self
            .results_dir
            .clone()
            .unwrap_or_else(ReportConfig::default_results_dir);

        let mut config = ReportConfig::new(results_dir)
            .with_export_formats(self.formats.iter().map(|&f| f.into()).collect())
            .with_env_overrides();
        if let Some(dir) = &self.output_dir {
            config = config.with_output_dir(dir);
        }
        config
    }

    /// Generates the report and prints where each file was written.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the configuration is invalid or a report file cannot
    /// be written.
    pub fn execute(self) -> Result<WrittenReport> {
        let config = self.config();
        debug!(?config, "resolved configuration");
        config.validate()?;

        let report = build_report(&config);
        if self.summary {
            print_summary(&report);
        }

        let written = write_report(&report, &config)?;
        for (_, path) in &written.paths {
            println!("Report written to: {}", path.display());
        }
        Ok(written)
    }
}
