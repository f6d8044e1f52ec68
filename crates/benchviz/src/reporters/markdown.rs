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

//! Markdown export for reports.

use crate::error::{ReportError, Result};
use crate::report::ReportModel;
use std::fs;
use std::path::Path;

/// Renders the report as Markdown.
pub fn render_markdown(report: &ReportModel) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {} Benchmark Results\n\n", report.project));
    md.push_str(&format!("**Timestamp:** {}\n\n", report.timestamp));
    if !report.badges.is_empty() {
        md.push_str(&format!("{}\n\n", report.badges.join(" · ")));
    }

    md.push_str("## Summary\n\n");
    md.push_str("| Metric | Value | Unit |\n");
    md.push_str("|--------|------:|------|\n");
    for kpi in &report.kpis {
        md.push_str(&format!("| {} | {} | {} |\n", kpi.label, kpi.display, kpi.unit));
    }

    for section in &report.sections {
        md.push_str(&format!("\n## {}\n\n", section.title));
        md.push_str(&format!("{}\n\n", section.description));
        if !section.located {
            md.push_str("_No result file found._\n\n");
        }
        md.push_str("| Test | Value | Unit |\n");
        md.push_str("|------|------:|------|\n");
        for row in &section.table.rows {
            md.push_str(&format!("| {} | {} | {} |\n", row.label, row.display(), row.unit));
        }
    }

    md
}

/// Exports the report as Markdown.
///
/// # Arguments
///
/// * `report` - The report to export
/// * `path` - Output file path
pub fn export_markdown(report: &ReportModel, path: &Path) -> Result<()> {
    fs::write(path, render_markdown(report)).map_err(|e| ReportError::io_error(path, e))
}
