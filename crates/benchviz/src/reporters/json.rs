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

//! JSON export for reports.

use crate::error::{ReportError, Result};
use crate::report::ReportModel;
use std::fs;
use std::path::Path;

/// Serializes the report model as pretty-printed JSON.
pub fn render_json(report: &ReportModel) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Exports the report model as pretty-printed JSON.
///
/// # Arguments
///
/// * `report` - The report to export
/// * `path` - Output file path
pub fn export_json(report: &ReportModel, path: &Path) -> Result<()> {
    let json = render_json(report)?;
    fs::write(path, json).map_err(|e| ReportError::io_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportConfig;
    use crate::report::assemble;
    use crate::results::ReportInputs;
    use chrono::Local;
    use serde_json::Value;
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_json() {
        let report = assemble(&ReportInputs::empty(), Local::now(), &ReportConfig::new("results"));
        let temp = NamedTempFile::new().unwrap();

        export_json(&report, temp.path()).unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        let value: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["timestamp"], "unknown");
        assert_eq!(value["kpis"].as_array().unwrap().len(), 9);
        assert_eq!(value["sections"][3]["suite"], "websocket");
        assert_eq!(value["sections"][0]["charts"][0]["orientation"], "horizontal");
    }

    #[test]
    fn test_export_json_write_failure_names_path() {
        let report = assemble(&ReportInputs::empty(), Local::now(), &ReportConfig::new("results"));
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing").join("report.json");

        match export_json(&report, &path).unwrap_err() {
            ReportError::Io { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("expected I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_render_json_matches_model() {
        let report = assemble(&ReportInputs::empty(), Local::now(), &ReportConfig::new("results"));

        let json = render_json(&report).unwrap();
        assert_eq!(json, serde_json::to_string_pretty(&report).unwrap());
    }
}
