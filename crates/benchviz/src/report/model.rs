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

//! Report model types.
//!
//! The model holds everything a reporter needs: already formatted KPI labels,
//! chart specifications with display-scaled values, and detail tables with
//! raw values. Reporters only map it to markup.

use crate::metrics::format_grouped;
use crate::results::Suite;
use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};
use std::fmt;
use std::time::SystemTime;

/// Shown instead of a time when no suite had a result file.
pub const UNKNOWN_TIMESTAMP: &str = "unknown";

/// When the underlying results were produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportTimestamp {
    /// Modification time of the first located result file.
    Known(DateTime<Local>),
    /// No result file was found.
    Unknown,
}

impl ReportTimestamp {
    /// Converts a file modification time.
    pub fn from_system_time(time: SystemTime) -> Self {
        ReportTimestamp::Known(DateTime::<Local>::from(time))
    }

    /// Returns whether a time is known.
    pub fn is_known(&self) -> bool {
        matches!(self, ReportTimestamp::Known(_))
    }
}

impl fmt::Display for ReportTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportTimestamp::Known(time) => write!(f, "{}", time.format("%Y-%m-%d %H:%M")),
            ReportTimestamp::Unknown => f.write_str(UNKNOWN_TIMESTAMP),
        }
    }
}

impl Serialize for ReportTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Accent colour of a KPI card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Server figures.
    Blue,
    /// Cache figures.
    Green,
    /// Proxy figures.
    Purple,
    /// WebSocket figures.
    Orange,
}

impl Tone {
    /// CSS class name.
    pub fn as_str(&self) -> &str {
        match self {
            Tone::Blue => "blue",
            Tone::Green => "green",
            Tone::Purple => "purple",
            Tone::Orange => "orange",
        }
    }

    /// Tone used for a suite's figures.
    pub fn for_suite(suite: Suite) -> Self {
        match suite {
            Suite::Server => Tone::Blue,
            Suite::Cache => Tone::Green,
            Suite::Proxy => Tone::Purple,
            Suite::WebSocket => Tone::Orange,
        }
    }
}

/// A headline figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpi {
    /// Short label.
    pub label: String,
    /// Raw value; zero when it was never measured.
    pub value: f64,
    /// Formatted value or the "not available" sentinel.
    pub display: String,
    /// Unit caption.
    pub unit: String,
    /// Card accent.
    pub tone: Tone,
}

/// Bar direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Bars grow left to right.
    Horizontal,
    /// Bars grow bottom to top.
    Vertical,
}

/// One bar of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    /// Category label.
    pub label: String,
    /// Display-scaled value.
    pub value: f64,
    /// CSS colour.
    pub color: String,
}

/// A bar chart bound to a named slot in the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Canvas element id.
    pub slot: String,
    /// Card heading.
    pub title: String,
    /// Bar direction.
    pub orientation: Orientation,
    /// Tooltip unit suffix.
    pub unit: String,
    /// Bars in display order.
    pub bars: Vec<Bar>,
}

impl ChartSpec {
    /// Builds a chart. Colours are taken from `palette` in order, cycling if
    /// there are more bars than colours.
    pub fn new(
        slot: impl Into<String>,
        title: impl Into<String>,
        orientation: Orientation,
        unit: impl Into<String>,
        bars: &[(&str, f64)],
        palette: &[&str],
    ) -> Self {
        let bars = bars
            .iter()
            .enumerate()
            .map(|(i, (label, value))| Bar {
                label: label.to_string(),
                value: *value,
                color: palette
                    .get(i % palette.len().max(1))
                    .copied()
                    .unwrap_or(DEFAULT_BAR_COLOR)
                    .to_string(),
            })
            .collect();

        Self {
            slot: slot.into(),
            title: title.into(),
            orientation,
            unit: unit.into(),
            bars,
        }
    }

    /// Bar labels in order.
    pub fn labels(&self) -> Vec<&str> {
        self.bars.iter().map(|b| b.label.as_str()).collect()
    }

    /// Bar values in order.
    pub fn values(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.value).collect()
    }
}

const DEFAULT_BAR_COLOR: &str = "#58a6ff";

/// One row of a detail table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow {
    /// Metric label.
    pub label: String,
    /// Raw, unscaled value.
    pub value: f64,
    /// Unit caption.
    pub unit: String,
    /// Decimals shown.
    pub decimals: usize,
    /// Rendered emphasised.
    pub highlight: bool,
}

impl DetailRow {
    /// Value with thousands separators.
    pub fn display(&self) -> String {
        format_grouped(self.value, self.decimals)
    }
}

/// A suite's metric breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailTable {
    /// Card heading.
    pub title: String,
    /// Rows in display order.
    pub rows: Vec<DetailRow>,
}

/// One suite's part of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    /// Which suite.
    pub suite: Suite,
    /// Heading.
    pub title: String,
    /// One-line description.
    pub description: String,
    /// Heading icon.
    pub icon: String,
    /// Whether a result file was found for the suite.
    pub located: bool,
    /// Charts in display order.
    pub charts: Vec<ChartSpec>,
    /// Detail table.
    pub table: DetailTable,
}

/// The complete report, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportModel {
    /// Project name shown in the title.
    pub project: String,
    /// Subtitle.
    pub subtitle: String,
    /// When the report was generated.
    pub generated_at: DateTime<Local>,
    /// When the results were produced.
    pub timestamp: ReportTimestamp,
    /// Environment badges.
    pub badges: Vec<String>,
    /// Headline figures.
    pub kpis: Vec<Kpi>,
    /// One section per suite, in precedence order.
    pub sections: Vec<Section>,
}

impl ReportModel {
    /// Returns the section of a suite.
    pub fn section(&self, suite: Suite) -> Option<&Section> {
        self.sections.iter().find(|s| s.suite == suite)
    }

    /// Returns a KPI by label.
    pub fn kpi(&self, label: &str) -> Option<&Kpi> {
        self.kpis.iter().find(|k| k.label == label)
    }

    /// All charts across sections.
    pub fn charts(&self) -> impl Iterator<Item = &ChartSpec> {
        self.sections.iter().flat_map(|s| s.charts.iter())
    }

    /// Number of suites that had a result file.
    pub fn located_count(&self) -> usize {
        self.sections.iter().filter(|s| s.located).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_display() {
        let time = Local.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
        assert_eq!(ReportTimestamp::Known(time).to_string(), "2025-03-14 09:26");
        assert_eq!(ReportTimestamp::Unknown.to_string(), UNKNOWN_TIMESTAMP);
    }

    #[test]
    fn test_timestamp_serializes_as_string() {
        let json = serde_json::to_string(&ReportTimestamp::Unknown).unwrap();
        assert_eq!(json, "\"unknown\"");
    }

    #[test]
    fn test_chart_palette_cycles() {
        let chart = ChartSpec::new(
            "c",
            "Chart",
            Orientation::Vertical,
            "ops/sec",
            &[("a", 1.0), ("b", 2.0), ("c", 3.0)],
            &["#111111", "#222222"],
        );

        let colors: Vec<_> = chart.bars.iter().map(|b| b.color.as_str()).collect();
        assert_eq!(colors, vec!["#111111", "#222222", "#111111"]);
        assert_eq!(chart.labels(), vec!["a", "b", "c"]);
        assert_eq!(chart.values(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_chart_empty_palette() {
        let chart = ChartSpec::new("c", "Chart", Orientation::Horizontal, "", &[("a", 1.0)], &[]);
        assert_eq!(chart.bars[0].color, DEFAULT_BAR_COLOR);
    }

    #[test]
    fn test_detail_row_display() {
        let row = DetailRow {
            label: "Conn rate".to_string(),
            value: 48_213.7,
            unit: "conn/sec".to_string(),
            decimals: 0,
            highlight: true,
        };
        assert_eq!(row.display(), "48,214");
    }

    #[test]
    fn test_tone_for_suite() {
        assert_eq!(Tone::for_suite(Suite::Cache).as_str(), "green");
        assert_eq!(Tone::for_suite(Suite::WebSocket), Tone::Orange);
    }
}
