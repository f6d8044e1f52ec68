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

//! HTML export for reports.
//!
//! The document is self-contained apart from the Chart.js bundle. Chart
//! specs are embedded as JSON and drawn by a small script; the script's axis
//! ticks apply the same K/M rule as [`crate::metrics::format_compact`].

use crate::error::{ReportError, Result};
use crate::report::{ReportModel, Section};
use std::fs;
use std::path::Path;

/// Chart.js bundle loaded by the report.
pub const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.0/dist/chart.umd.min.js";

const CHART_SCRIPT: &str = r#"
Chart.defaults.color = '#8b949e';
Chart.defaults.borderColor = '#30363d';
Chart.defaults.font.family = '-apple-system, BlinkMacSystemFont, "Segoe UI", monospace';
Chart.defaults.font.size = 12;

function compact(v) {
  if (v >= 1000000) return (v / 1000000).toFixed(v % 1000000 === 0 ? 0 : 1) + 'M';
  if (v >= 1000) return (v / 1000).toFixed(v % 1000 === 0 ? 0 : 1) + 'K';
  return v;
}

function drawChart(spec) {
  const canvas = document.getElementById(spec.slot);
  if (!canvas) return;
  const horizontal = spec.orientation === 'horizontal';
  const valueAxis = horizontal ? 'x' : 'y';
  const categoryAxis = horizontal ? 'y' : 'x';
  const scales = {};
  scales[valueAxis] = { grid: { color: '#21262d' }, ticks: { callback: compact } };
  scales[categoryAxis] = { grid: { display: false } };
  new Chart(canvas.getContext('2d'), {
    type: 'bar',
    data: {
      labels: spec.bars.map(b => b.label),
      datasets: [{
        data: spec.bars.map(b => b.value),
        backgroundColor: spec.bars.map(b => b.color),
        borderRadius: 5,
        borderSkipped: false
      }]
    },
    options: {
      indexAxis: horizontal ? 'y' : 'x',
      responsive: true,
      maintainAspectRatio: false,
      plugins: {
        legend: { display: false },
        tooltip: {
          callbacks: {
            label: ctx => ' ' + ctx.parsed[valueAxis].toLocaleString(undefined, { maximumFractionDigits: 1 })
              + (spec.unit ? ' ' + spec.unit : '')
          }
        }
      },
      scales: scales
    }
  });
}

CHARTS.forEach(drawChart);
"#;

/// Escapes text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders the complete HTML document.
pub fn render_html(report: &ReportModel) -> Result<String> {
    let mut html = String::new();
    let project = escape_html(&report.project);
    let timestamp = escape_html(&report.timestamp.to_string());

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("<title>{} Benchmark Results</title>\n", project));
    html.push_str(&format!("<script src=\"{}\"></script>\n", CHART_JS_URL));
    html.push_str("<style>\n");
    html.push_str(include_str!("styles.css"));
    html.push_str("</style>\n</head>\n<body>\n\n");

    html.push_str("<header>\n");
    html.push_str(&format!("  <h1><span>{}</span> Benchmark Results</h1>\n", project));
    html.push_str(&format!("  <p>{}</p>\n", escape_html(&report.subtitle)));
    html.push_str("  <div class=\"badges\">\n");
    html.push_str(&format!("    <span class=\"badge\">🕐 <b>{}</b></span>\n", timestamp));
    for badge in &report.badges {
        html.push_str(&format!("    <span class=\"badge\">{}</span>\n", escape_html(badge)));
    }
    html.push_str("  </div>\n</header>\n\n<main>\n\n");

    html.push_str("<div class=\"kpi-grid\">\n");
    for kpi in &report.kpis {
        html.push_str(&format!("  <div class=\"kpi {}\">\n", kpi.tone.as_str()));
        html.push_str(&format!("    <div class=\"label\">{}</div>\n", escape_html(&kpi.label)));
        html.push_str(&format!("    <div class=\"value\">{}</div>\n", escape_html(&kpi.display)));
        html.push_str(&format!("    <div class=\"unit\">{}</div>\n", escape_html(&kpi.unit)));
        html.push_str("  </div>\n");
    }
    html.push_str("</div>\n\n");

    for section in &report.sections {
        push_section(&mut html, section);
    }

    html.push_str("</main>\n\n<footer>\n");
    html.push_str(&format!("  {} Benchmark · {}", project, timestamp));
    for badge in &report.badges {
        html.push_str(&format!(" · {}", escape_html(badge)));
    }
    html.push_str("\n</footer>\n\n");

    let charts: Vec<_> = report.charts().collect();
    let config = serde_json::to_string(&charts)?;
    html.push_str("<script>\n");
    html.push_str(&format!("const CHARTS = {};\n", config.replace("</", "<\\/")));
    html.push_str(CHART_SCRIPT);
    html.push_str("</script>\n</body>\n</html>\n");

    Ok(html)
}

fn push_section(html: &mut String, section: &Section) {
    let columns = (section.charts.len() + 1).min(3);

    html.push_str("<div class=\"section\">\n  <div class=\"section-header\">\n");
    html.push_str(&format!(
        "    <div class=\"section-icon {}\">{}</div>\n",
        section.suite,
        escape_html(&section.icon)
    ));
    html.push_str(&format!(
        "    <div>\n      <h2>{}</h2>\n      <p class=\"desc\">{}</p>\n    </div>\n",
        escape_html(&section.title),
        escape_html(&section.description)
    ));
    html.push_str("  </div>\n\n");

    html.push_str(&format!("  <div class=\"chart-grid cols-{}\">\n", columns));
    for chart in &section.charts {
        html.push_str("    <div class=\"card\">\n");
        html.push_str(&format!("      <h3>{}</h3>\n", escape_html(&chart.title)));
        html.push_str(&format!(
            "      <div class=\"chart-wrap\"><canvas id=\"{}\"></canvas></div>\n",
            escape_html(&chart.slot)
        ));
        html.push_str("    </div>\n");
    }

    html.push_str("    <div class=\"card table-card\">\n");
    html.push_str(&format!("      <h3>{}</h3>\n", escape_html(&section.table.title)));
    html.push_str("      <table class=\"stat-table\">\n");
    html.push_str("        <thead><tr><th>Test</th><th class=\"num\">Value</th><th class=\"num\">Unit</th></tr></thead>\n");
    html.push_str("        <tbody>\n");
    for row in &section.table.rows {
        let class = if row.highlight { "num hi" } else { "num" };
        html.push_str(&format!(
            "          <tr><td>{}</td><td class=\"{}\">{}</td><td class=\"num lo\">{}</td></tr>\n",
            escape_html(&row.label),
            class,
            row.display(),
            escape_html(&row.unit)
        ));
    }
    html.push_str("        </tbody>\n      </table>\n    </div>\n");
    html.push_str("  </div>\n</div>\n\n");
}

/// Exports the report as HTML.
///
/// # Arguments
///
/// * `report` - The report to export
/// * `path` - Output file path
pub fn export_html(report: &ReportModel, path: &Path) -> Result<()> {
    let html = render_html(report)?;
    fs::write(path, html).map_err(|e| ReportError::io_error(path, e))
}
