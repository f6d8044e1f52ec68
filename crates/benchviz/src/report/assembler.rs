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

//! Builds the [`ReportModel`] from loaded suite results.

use super::model::{ChartSpec, DetailTable, Kpi, ReportModel, ReportTimestamp, Section};
use super::suites::{CacheMetrics, ProxyMetrics, ServerMetrics, WebSocketMetrics};
use crate::config::ReportConfig;
use crate::results::{ReportInputs, SuiteResults};
use chrono::{DateTime, Local};

/// Assembles the report.
///
/// The result depends only on `inputs`, `generated_at` and the display
/// strings in `config`, so a frozen `generated_at` gives an identical model
/// on every run.
pub fn assemble(inputs: &ReportInputs, generated_at: DateTime<Local>, config: &ReportConfig) -> ReportModel {
    let server = ServerMetrics::extract(&inputs.server.records);
    let cache = CacheMetrics::extract(&inputs.cache.records);
    let proxy = ProxyMetrics::extract(&inputs.proxy.records);
    let websocket = WebSocketMetrics::extract(&inputs.websocket.records);

    let mut kpis: Vec<Kpi> = Vec::new();
    kpis.extend(server.kpis());
    kpis.extend(cache.kpis());
    kpis.extend(proxy.kpis());
    kpis.extend(websocket.kpis());

    let sections = vec![
        section(&inputs.server, server.charts(), server.table()),
        section(&inputs.cache, cache.charts(), cache.table()),
        section(&inputs.proxy, proxy.charts(), proxy.table()),
        section(&inputs.websocket, websocket.charts(), websocket.table()),
    ];

    ReportModel {
        project: config.project.clone(),
        subtitle: config.subtitle.clone(),
        generated_at,
        timestamp: report_timestamp(inputs),
        badges: config.badges.clone(),
        kpis,
        sections,
    }
}

/// Modification time of the first located file in precedence order.
pub fn report_timestamp(inputs: &ReportInputs) -> ReportTimestamp {
    inputs
        .iter()
        .find_map(|results| results.file.as_ref())
        .map(|file| ReportTimestamp::from_system_time(file.modified))
        .unwrap_or(ReportTimestamp::Unknown)
}

fn section(results: &SuiteResults, charts: Vec<ChartSpec>, table: DetailTable) -> Section {
    let suite = results.suite;
    Section {
        suite,
        title: suite.title().to_string(),
        description: suite.description().to_string(),
        icon: suite.icon().to_string(),
        located: results.is_located(),
        charts,
        table,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{ResultFile, ResultRecord, Suite};
    use chrono::TimeZone;
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime};

    fn frozen() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn file(name: &str, secs: u64) -> Option<ResultFile> {
        Some(ResultFile {
            path: PathBuf::from(name),
            modified: SystemTime::UNIX_EPOCH + Duration::from_secs(secs),
        })
    }

    #[test]
    fn test_empty_inputs() {
        let model = assemble(&ReportInputs::empty(), frozen(), &ReportConfig::new("r"));

        assert_eq!(model.timestamp, ReportTimestamp::Unknown);
        assert_eq!(model.kpis.len(), 9);
        assert!(model.kpis.iter().all(|k| k.value == 0.0 && k.display == "N/A"));
        assert_eq!(model.sections.len(), 4);
        assert_eq!(model.located_count(), 0);
        assert_eq!(model.charts().count(), 8);
    }

    #[test]
    fn test_timestamp_precedence() {
        let inputs = ReportInputs::empty()
            .with(SuiteResults::from_records(Suite::Proxy, file("proxy_1.json", 2_000), vec![]))
            .with(SuiteResults::from_records(Suite::Cache, file("cache_1.json", 1_000), vec![]))
            .with(SuiteResults::from_records(Suite::WebSocket, file("websocket_1.json", 3_000), vec![]));

        let expected = ReportTimestamp::from_system_time(
            SystemTime::UNIX_EPOCH + Duration::from_secs(1_000),
        );
        assert_eq!(report_timestamp(&inputs), expected);
    }

    #[test]
    fn test_sections_follow_precedence() {
        let model = assemble(&ReportInputs::empty(), frozen(), &ReportConfig::new("r"));
        let suites: Vec<_> = model.sections.iter().map(|s| s.suite).collect();
        assert_eq!(suites, Suite::ALL.to_vec());
    }

    #[test]
    fn test_idempotent() {
        let records: Vec<ResultRecord> = serde_json::from_str(
            r#"[{"test": "server_connection_rate", "connections_per_sec": 48213, "avg_latency_ms": 0.021}]"#,
        )
        .unwrap();
        let inputs = ReportInputs::empty().with(SuiteResults::from_records(
            Suite::Server,
            file("server_1.json", 10),
            records,
        ));
        let config = ReportConfig::new("r");

        let first = assemble(&inputs, frozen(), &config);
        let second = assemble(&inputs, frozen(), &config);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        assert_eq!(first.kpi("Server conn/sec").unwrap().display, "48.2K");
    }
}
