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

//! Benchviz
//!
//! Turns the JSON result files produced by the Socketley benchmark suites
//! into a single self-contained HTML report.
//!
//! ## Pipeline
//!
//! 1. **Locate**: the newest `<suite>_*.json` file per suite in the results
//!    directory
//! 2. **Load**: parse each file into records; missing or broken files
//!    yield no records
//! 3. **Assemble**: extract headline figures, charts and detail tables
//! 4. **Write**: render HTML (plus optional JSON and Markdown) to
//!    `report_<YYYYMMDD_HHMMSS>.<ext>`
//!
//! ## Usage
//!
//! ```no_run
//! use benchviz::{generate_report, ReportConfig};
//!
//! let config = ReportConfig::new("bench/results");
//! let written = generate_report(&config)?;
//! println!("{:?}", written.html_path());
//! # Ok::<(), benchviz::ReportError>(())
//! ```

pub mod config;
pub mod error;
pub mod metrics;
pub mod report;
pub mod reporters;
pub mod results;

pub use config::{ExportFormat, ReportConfig};
pub use error::{ReportError, Result};
pub use report::{assemble, ReportModel, ReportTimestamp};
pub use reporters::{print_summary, write_report, WrittenReport};
pub use results::{collect_suites, ReportInputs, Suite, SuiteResults};

use chrono::Local;
use tracing::info;

/// Builds the report model from the results directory.
///
/// Never fails: suites without a usable result file contribute zero-valued
/// sections.
pub fn build_report(config: &ReportConfig) -> ReportModel {
    let inputs = collect_suites(config);
    let report = assemble(&inputs, Local::now(), config);
    info!(
        located = report.located_count(),
        timestamp = %report.timestamp,
        "report assembled"
    );
    report
}

/// Runs the whole pipeline and writes the report files.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or an output file
/// cannot be written.
pub fn generate_report(config: &ReportConfig) -> Result<WrittenReport> {
    config.validate()?;
    let report = build_report(config);
    write_report(&report, config)
}
