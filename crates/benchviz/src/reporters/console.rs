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

//! Console summary of a report.

use crate::report::ReportModel;

/// Formats the headline figures as plain text.
pub fn format_summary(report: &ReportModel) -> String {
    let mut out = String::new();
    let width = report
        .kpis
        .iter()
        .map(|k| k.label.chars().count())
        .max()
        .unwrap_or(0);

    out.push_str(&format!("{}\n", "=".repeat(60)));
    out.push_str(&format!("SUMMARY: {} benchmarks\n", report.project));
    out.push_str(&format!("{}\n", "=".repeat(60)));
    out.push_str(&format!("Results from: {}\n", report.timestamp));
    out.push_str(&format!(
        "Suites found: {}/{}\n",
        report.located_count(),
        report.sections.len()
    ));
    out.push_str(&format!("{}\n", "-".repeat(60)));
    for kpi in &report.kpis {
        out.push_str(&format!(
            "{:<width$}  {:>8}  {}\n",
            kpi.label,
            kpi.display,
            kpi.unit,
            width = width
        ));
    }
    out.push_str(&format!("{}\n", "=".repeat(60)));
    out
}

/// Prints a summary of the report.
pub fn print_summary(report: &ReportModel) {
    println!("\n{}", format_summary(report));
}
