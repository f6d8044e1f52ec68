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

//! End-to-end tests: result files on disk through to written reports.

use benchviz::report::{CacheMetrics, ServerMetrics};
use benchviz::results::locate;
use benchviz::{
    assemble, build_report, collect_suites, generate_report, ExportFormat, ReportConfig,
    ReportError, ReportTimestamp, Suite,
};
use chrono::{Local, TimeZone};
use std::fs::{self, File};
use std::path::Path;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

// ===== Test Helpers =====

/// Write a result file and pin its modification time.
fn write_result(dir: &Path, name: &str, content: &str, age_secs: u64) {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write result file");
    let modified = SystemTime::now() - Duration::from_secs(age_secs);
    File::options()
        .write(true)
        .open(&path)
        .and_then(|f| f.set_modified(modified))
        .expect("Failed to set modification time");
}

fn frozen_time() -> chrono::DateTime<Local> {
    Local.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap()
}

// ===== Empty and missing inputs =====

#[test]
fn test_empty_results_dir_produces_complete_report() {
    let dir = TempDir::new().unwrap();
    let config = ReportConfig::new(dir.path());

    let written = generate_report(&config).expect("empty dir must not be fatal");

    let html = fs::read_to_string(written.html_path().unwrap()).unwrap();
    assert!(html.contains("<b>unknown</b>"));
    assert_eq!(html.matches("<div class=\"value\">N/A</div>").count(), 9);
    for slot in ["sConnChart", "sTpChart", "sMbChart", "sConcChart", "cOpsChart", "pHttpChart", "pTcpChart", "wsChart"] {
        assert!(html.contains(&format!("<canvas id=\"{}\">", slot)), "missing {}", slot);
    }
}

#[test]
fn test_nonexistent_results_dir_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    let config = ReportConfig::new(dir.path().join("does-not-exist")).with_output_dir(dir.path());

    let report = build_report(&config);

    assert_eq!(report.timestamp, ReportTimestamp::Unknown);
    assert_eq!(report.located_count(), 0);
    for section in &report.sections {
        assert!(section.table.rows.iter().all(|r| r.value == 0.0));
        assert!(section.charts.iter().all(|c| c.values().iter().all(|v| *v == 0.0)));
    }
}

#[test]
fn test_malformed_file_counts_as_located_but_empty() {
    let dir = TempDir::new().unwrap();
    write_result(dir.path(), "cache_broken.json", "{ not json", 10);

    let inputs = collect_suites(&ReportConfig::new(dir.path()));
    let report = assemble(&inputs, frozen_time(), &ReportConfig::new(dir.path()));

    let cache = report.section(Suite::Cache).unwrap();
    assert!(cache.located);
    assert!(report.timestamp.is_known());
    assert_eq!(report.kpi("Cache GET").unwrap().display, "N/A");
}

// ===== Scenario examples =====

#[test]
fn test_cache_get_only() {
    let dir = TempDir::new().unwrap();
    write_result(
        dir.path(),
        "cache_20250301.json",
        r#"[{"test": "cache_get_throughput", "ops_per_sec": 125000}]"#,
        10,
    );
    let config = ReportConfig::new(dir.path());

    let report = assemble(&collect_suites(&config), frozen_time(), &config);

    assert_eq!(report.kpi("Cache GET").unwrap().display, "125.0K");
    assert_eq!(report.kpi("Cache SET").unwrap().display, "N/A");

    let table = &report.section(Suite::Cache).unwrap().table;
    let set_row = table.rows.iter().find(|r| r.label == "SET throughput").unwrap();
    assert_eq!(set_row.value, 0.0);
    assert!(table.rows.iter().all(|r| r.label != "Flush (persist)"));
    assert!(table.rows.iter().all(|r| r.label != "Load (restore)"));
}

#[test]
fn test_cache_persistence_zero_is_shown() {
    let dir = TempDir::new().unwrap();
    write_result(
        dir.path(),
        "cache_run.json",
        r#"[{"test": "cache_persistence", "flush_time_ms": 0, "load_time_ms": 12.9}]"#,
        10,
    );
    let config = ReportConfig::new(dir.path());

    let metrics = CacheMetrics::extract(&collect_suites(&config).cache.records);
    let table = metrics.table();

    let flush = table.rows.iter().find(|r| r.label == "Flush (persist)").unwrap();
    let load = table.rows.iter().find(|r| r.label == "Load (restore)").unwrap();
    assert_eq!(flush.display(), "0");
    assert_eq!(load.display(), "12");
}

#[test]
fn test_server_selects_variant_by_message_size() {
    let dir = TempDir::new().unwrap();
    write_result(
        dir.path(),
        "server_run.json",
        r#"[
            {"test": "server_single_client_throughput", "message_size_bytes": 1024,
             "messages_per_sec": 90000, "throughput_mb_sec": 87.9},
            {"test": "server_single_client_throughput", "message_size_bytes": 64,
             "messages_per_sec": 210000, "throughput_mb_sec": 12.8}
        ]"#,
        10,
    );
    let config = ReportConfig::new(dir.path());

    let report = assemble(&collect_suites(&config), frozen_time(), &config);

    assert_eq!(report.kpi("Single-client throughput").unwrap().display, "210.0K");
    let server = report.section(Suite::Server).unwrap();
    let throughput = server.charts.iter().find(|c| c.slot == "sTpChart").unwrap();
    assert_eq!(throughput.values(), vec![210.0, 90.0]);
    let bandwidth = server.charts.iter().find(|c| c.slot == "sMbChart").unwrap();
    assert_eq!(bandwidth.values(), vec![12.8, 87.9]);
}

#[test]
fn test_duplicate_test_names_use_first_record() {
    let dir = TempDir::new().unwrap();
    write_result(
        dir.path(),
        "server_dup.json",
        r#"[
            {"test": "server_connection_rate", "connections_per_sec": 48200},
            {"test": "server_connection_rate", "connections_per_sec": 1}
        ]"#,
        10,
    );
    let config = ReportConfig::new(dir.path());

    let metrics = ServerMetrics::extract(&collect_suites(&config).server.records);

    assert_eq!(metrics.conn_rate, Some(48_200.0));
}

// ===== File selection =====

#[test]
fn test_newest_file_wins() {
    let dir = TempDir::new().unwrap();
    write_result(
        dir.path(),
        "websocket_old.json",
        r#"[{"test": "ws_handshake_throughput", "ops_per_sec": 1000}]"#,
        3600,
    );
    write_result(
        dir.path(),
        "websocket_new.json",
        r#"[{"test": "ws_handshake_throughput", "ops_per_sec": 2000}]"#,
        60,
    );
    let config = ReportConfig::new(dir.path());

    let located = locate(dir.path(), Suite::WebSocket.prefix()).unwrap();
    assert!(located.path.ends_with("websocket_new.json"));

    let report = assemble(&collect_suites(&config), frozen_time(), &config);
    assert_eq!(report.kpi("WS handshakes").unwrap().display, "2.0K");
}

#[test]
fn test_timestamp_follows_suite_precedence() {
    let dir = TempDir::new().unwrap();
    write_result(dir.path(), "proxy_a.json", "[]", 60);
    write_result(dir.path(), "cache_a.json", "[]", 7200);
    let config = ReportConfig::new(dir.path());

    let inputs = collect_suites(&config);
    let report = assemble(&inputs, frozen_time(), &config);

    let cache_time = inputs.cache.file.as_ref().unwrap().modified;
    let proxy_time = inputs.proxy.file.as_ref().unwrap().modified;
    assert!(proxy_time > cache_time);
    assert_eq!(report.timestamp, ReportTimestamp::from_system_time(cache_time));
}

// ===== Determinism =====

#[test]
fn test_assembly_is_idempotent() {
    let dir = TempDir::new().unwrap();
    write_result(
        dir.path(),
        "proxy_run.json",
        r#"[
            {"test": "proxy_http_single_backend", "requests_per_sec": 15234.7},
            {"test": "proxy_tcp_throughput", "messages_per_sec": 180000, "throughput_mb_sec": 11.0},
            {"test": "proxy_overhead", "overhead_percent": 3.42}
        ]"#,
        10,
    );
    let config = ReportConfig::new(dir.path());

    let first = assemble(&collect_suites(&config), frozen_time(), &config);
    let second = assemble(&collect_suites(&config), frozen_time(), &config);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
    assert_eq!(first.kpi("Proxy overhead").unwrap().display, "3.4%");
}

// ===== Output =====

#[test]
fn test_all_formats_share_timestamp_stem() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("reports");
    let config = ReportConfig::new(dir.path())
        .with_output_dir(&out)
        .with_export_formats(vec![ExportFormat::Json, ExportFormat::Markdown]);

    let written = generate_report(&config).unwrap();

    let stems: Vec<_> = written
        .paths
        .iter()
        .map(|(_, p)| p.file_stem().unwrap().to_owned())
        .collect();
    assert_eq!(stems.len(), 3);
    assert!(stems.iter().all(|s| *s == stems[0]));
    assert!(stems[0].to_string_lossy().starts_with("report_"));

    let json = fs::read_to_string(written.path(ExportFormat::Json).unwrap()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["sections"].as_array().unwrap().len(), 4);
}

#[test]
fn test_unwritable_output_is_an_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "").unwrap();
    let config = ReportConfig::new(dir.path()).with_output_dir(blocker.join("out"));

    let err = generate_report(&config).unwrap_err();

    assert!(matches!(err, ReportError::Io { .. }));
}

#[test]
fn test_missing_results_dir_without_output_dir_is_an_error() {
    let dir = TempDir::new().unwrap();
    let results = dir.path().join("typo").join("results");

    let err = generate_report(&ReportConfig::new(&results)).unwrap_err();

    assert!(matches!(err, ReportError::Io { .. }));
    assert!(!results.exists());
}

#[test]
fn test_invalid_config_is_rejected_before_writing() {
    let dir = TempDir::new().unwrap();
    let config = ReportConfig::new(dir.path()).with_max_file_size(0);

    let err = generate_report(&config).unwrap_err();

    assert!(matches!(err, ReportError::InvalidConfig { .. }));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_oversized_file_is_treated_as_empty() {
    let dir = TempDir::new().unwrap();
    write_result(
        dir.path(),
        "cache_big.json",
        r#"[{"test": "cache_get_throughput", "ops_per_sec": 125000}]"#,
        10,
    );
    let config = ReportConfig::new(dir.path()).with_max_file_size(8);

    let inputs = collect_suites(&config);

    assert!(inputs.cache.is_located());
    assert!(inputs.cache.records.is_empty());
}
