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

//! Per-suite metric catalogues.
//!
//! Each suite knows which scenarios and fields it reads, and how they map
//! to KPIs, charts and detail rows. Every field is kept as `Option<f64>`
//! so that absence stays distinguishable from a measured zero.

use super::model::{ChartSpec, DetailRow, DetailTable, Kpi, Orientation, Tone};
use crate::metrics::{extract_present, format_metric, format_percent, kilo, round_to};
use crate::results::{find, find_variant, ResultRecord, Suite};

/// Decimals shown on KPI cards.
pub const KPI_DECIMALS: usize = 1;

/// Auxiliary field separating throughput runs by payload size.
pub const MESSAGE_SIZE_FIELD: &str = "message_size_bytes";

const SERVER_PALETTE: &[&str] = &["#58a6ff", "#388bfd"];
const SERVER_AGGREGATE_PALETTE: &[&str] = &["#3fb950"];
const CACHE_PALETTE: &[&str] = &["#3fb950", "#56d364", "#3fb950", "#26a641"];
const PROXY_PALETTE: &[&str] = &["#bc8cff", "#a371f7", "#8957e5"];
const WEBSOCKET_PALETTE: &[&str] = &["#d29922", "#e3b341", "#bb8009"];

fn field(record: &ResultRecord, name: &str) -> Option<f64> {
    extract_present(record, name)
}

fn or_zero(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

fn kpi(label: &str, value: Option<f64>, unit: &str, tone: Tone) -> Kpi {
    Kpi {
        label: label.to_string(),
        value: or_zero(value),
        display: format_metric(value, KPI_DECIMALS),
        unit: unit.to_string(),
        tone,
    }
}

fn row(label: &str, value: Option<f64>, unit: &str, decimals: usize) -> DetailRow {
    DetailRow {
        label: label.to_string(),
        value: or_zero(value),
        unit: unit.to_string(),
        decimals,
        highlight: true,
    }
}

fn plain_row(label: &str, value: Option<f64>, unit: &str, decimals: usize) -> DetailRow {
    DetailRow {
        highlight: false,
        ..row(label, value, unit, decimals)
    }
}

/// A row that is left out entirely when the value was never measured.
fn optional_row(label: &str, value: Option<f64>, unit: &str) -> Option<DetailRow> {
    value.map(|v| plain_row(label, Some(v), unit, 0))
}

fn k(value: Option<f64>) -> f64 {
    kilo(or_zero(value))
}

fn rounded(value: Option<f64>, decimals: u32) -> f64 {
    round_to(or_zero(value), decimals)
}

/// Connection-oriented server figures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerMetrics {
    /// Sustained connections per second.
    pub conn_rate: Option<f64>,
    /// Average connect latency in ms.
    pub conn_latency_ms: Option<f64>,
    /// Burst connections per second.
    pub burst_rate: Option<f64>,
    /// Peak concurrent connections during the burst.
    pub max_concurrent: Option<f64>,
    /// Single-client messages per second at 64 B.
    pub small_msg_rate: Option<f64>,
    /// Single-client MB/s at 64 B.
    pub small_mb_rate: Option<f64>,
    /// Single-client messages per second at 1 KB.
    pub large_msg_rate: Option<f64>,
    /// Single-client MB/s at 1 KB.
    pub large_mb_rate: Option<f64>,
    /// Aggregate messages per second across concurrent clients.
    pub concurrent_msg_rate: Option<f64>,
}

impl ServerMetrics {
    /// Scenario names read by this suite.
    pub const CONNECTION_RATE: &'static str = "server_connection_rate";
    /// Burst scenario.
    pub const BURST: &'static str = "server_burst_connections";
    /// Single-client throughput scenario, run once per message size.
    pub const SINGLE_CLIENT: &'static str = "server_single_client_throughput";
    /// Concurrent clients scenario.
    pub const CONCURRENT: &'static str = "server_concurrent_clients";

    /// Extracts the suite's figures.
    pub fn extract(records: &[ResultRecord]) -> Self {
        let conn = find(records, Self::CONNECTION_RATE);
        let burst = find(records, Self::BURST);
        let small = find_variant(records, Self::SINGLE_CLIENT, MESSAGE_SIZE_FIELD, 64.0);
        let large = find_variant(records, Self::SINGLE_CLIENT, MESSAGE_SIZE_FIELD, 1024.0);
        let concurrent = find(records, Self::CONCURRENT);

        Self {
            conn_rate: field(&conn, "connections_per_sec"),
            conn_latency_ms: field(&conn, "avg_latency_ms"),
            burst_rate: field(&burst, "connections_per_sec"),
            max_concurrent: field(&burst, "max_concurrent"),
            small_msg_rate: field(&small, "messages_per_sec"),
            small_mb_rate: field(&small, "throughput_mb_sec"),
            large_msg_rate: field(&large, "messages_per_sec"),
            large_mb_rate: field(&large, "throughput_mb_sec"),
            concurrent_msg_rate: field(&concurrent, "messages_per_sec"),
        }
    }

    /// Headline figures.
    pub fn kpis(&self) -> Vec<Kpi> {
        let tone = Tone::for_suite(Suite::Server);
        vec![
            kpi("Server conn/sec", self.conn_rate, "connections per second", tone),
            kpi("Burst connections", self.burst_rate, "5 000-conn burst", tone),
            kpi("Single-client throughput", self.small_msg_rate, "msg/sec @ 64 B", tone),
            kpi("100-client aggregate", self.concurrent_msg_rate, "msg/sec concurrent", tone),
        ]
    }

    /// Charts in display order.
    pub fn charts(&self) -> Vec<ChartSpec> {
        vec![
            ChartSpec::new(
                "sConnChart",
                "Connection Rate (K conn/sec)",
                Orientation::Horizontal,
                "conn/sec (K)",
                &[("Sustained", k(self.conn_rate)), ("Burst (5K)", k(self.burst_rate))],
                SERVER_PALETTE,
            ),
            ChartSpec::new(
                "sTpChart",
                "Single-Client Throughput (K msg/sec)",
                Orientation::Vertical,
                "K msg/sec",
                &[("64 B msg", k(self.small_msg_rate)), ("1 KB msg", k(self.large_msg_rate))],
                SERVER_PALETTE,
            ),
            ChartSpec::new(
                "sMbChart",
                "Throughput (MB/sec)",
                Orientation::Vertical,
                "MB/sec",
                &[
                    ("64 B", rounded(self.small_mb_rate, 1)),
                    ("1 KB", rounded(self.large_mb_rate, 1)),
                ],
                SERVER_PALETTE,
            ),
            ChartSpec::new(
                "sConcChart",
                "Aggregate — 100 clients × 500 msgs (K msg/sec)",
                Orientation::Horizontal,
                "K msg/sec aggregate",
                &[("100 clients × 500 msgs", k(self.concurrent_msg_rate))],
                SERVER_AGGREGATE_PALETTE,
            ),
        ]
    }

    /// Detail table.
    pub fn table(&self) -> DetailTable {
        DetailTable {
            title: "Connection Details".to_string(),
            rows: vec![
                row("Conn rate (sustained)", self.conn_rate, "conn/sec", 0),
                row("Conn rate (burst 5K)", self.burst_rate, "conn/sec", 0),
                plain_row("Avg connect latency", self.conn_latency_ms, "ms", 3),
                row("Max concurrent", self.max_concurrent.map(f64::trunc), "connections", 0),
                row("64 B throughput", self.small_msg_rate, "msg/sec", 0),
                row("1 KB throughput", self.large_msg_rate, "msg/sec", 0),
                row("1 KB bandwidth", self.large_mb_rate, "MB/sec", 1),
                row("100-client aggregate", self.concurrent_msg_rate, "msg/sec", 0),
            ],
        }
    }
}

/// In-memory cache figures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheMetrics {
    /// SET operations per second.
    pub set_rate: Option<f64>,
    /// GET operations per second.
    pub get_rate: Option<f64>,
    /// Mixed 80/20 GET/SET operations per second.
    pub mixed_rate: Option<f64>,
    /// Concurrent clients operations per second.
    pub concurrent_rate: Option<f64>,
    /// Persistence flush time in ms.
    pub flush_ms: Option<f64>,
    /// Persistence load time in ms.
    pub load_ms: Option<f64>,
}

impl CacheMetrics {
    /// SET scenario.
    pub const SET: &'static str = "cache_set_throughput";
    /// GET scenario.
    pub const GET: &'static str = "cache_get_throughput";
    /// Mixed workload scenario.
    pub const MIXED: &'static str = "cache_mixed_workload";
    /// Concurrent access scenario.
    pub const CONCURRENT: &'static str = "cache_concurrent_access";
    /// Persistence scenario.
    pub const PERSISTENCE: &'static str = "cache_persistence";

    /// Extracts the suite's figures.
    pub fn extract(records: &[ResultRecord]) -> Self {
        let persistence = find(records, Self::PERSISTENCE);

        Self {
            set_rate: field(&find(records, Self::SET), "ops_per_sec"),
            get_rate: field(&find(records, Self::GET), "ops_per_sec"),
            mixed_rate: field(&find(records, Self::MIXED), "ops_per_sec"),
            concurrent_rate: field(&find(records, Self::CONCURRENT), "ops_per_sec"),
            flush_ms: field(&persistence, "flush_time_ms"),
            load_ms: field(&persistence, "load_time_ms"),
        }
    }

    /// Headline figures.
    pub fn kpis(&self) -> Vec<Kpi> {
        let tone = Tone::for_suite(Suite::Cache);
        vec![
            kpi("Cache GET", self.get_rate, "ops/sec", tone),
            kpi("Cache SET", self.set_rate, "ops/sec", tone),
        ]
    }

    /// Charts in display order.
    pub fn charts(&self) -> Vec<ChartSpec> {
        vec![ChartSpec::new(
            "cOpsChart",
            "Operation Throughput (K ops/sec)",
            Orientation::Vertical,
            "K ops/sec",
            &[
                ("SET", k(self.set_rate)),
                ("GET", k(self.get_rate)),
                ("Mixed 80/20", k(self.mixed_rate)),
                ("20-client conc.", k(self.concurrent_rate)),
            ],
            CACHE_PALETTE,
        )]
    }

    /// Detail table. Persistence timings only appear when measured.
    pub fn table(&self) -> DetailTable {
        let mut rows = vec![
            row("SET throughput", self.set_rate, "ops/sec", 0),
            row("GET throughput", self.get_rate, "ops/sec", 0),
            row("Mixed 80/20 GET/SET", self.mixed_rate, "ops/sec", 0),
            row("20-client concurrent", self.concurrent_rate, "ops/sec", 0),
        ];
        rows.extend(optional_row("Flush (persist)", self.flush_ms.map(f64::trunc), "ms"));
        rows.extend(optional_row("Load (restore)", self.load_ms.map(f64::trunc), "ms"));

        DetailTable {
            title: "Cache Details".to_string(),
            rows,
        }
    }
}

/// Forwarding proxy figures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProxyMetrics {
    /// HTTP requests per second through one backend.
    pub http_single: Option<f64>,
    /// HTTP requests per second with load balancing.
    pub http_balanced: Option<f64>,
    /// TCP messages per second.
    pub tcp_msg_rate: Option<f64>,
    /// TCP MB/s.
    pub tcp_mb_rate: Option<f64>,
    /// Concurrent clients messages per second.
    pub concurrent_msg_rate: Option<f64>,
    /// Overhead versus a direct connection, in percent.
    pub overhead_percent: Option<f64>,
    /// Messages per second to a backend addressed by runtime name.
    pub named_msg_rate: Option<f64>,
}

impl ProxyMetrics {
    /// Single backend HTTP scenario.
    pub const HTTP_SINGLE: &'static str = "proxy_http_single_backend";
    /// Load balanced HTTP scenario.
    pub const HTTP_BALANCED: &'static str = "proxy_http_load_balancing";
    /// TCP forwarding scenario.
    pub const TCP: &'static str = "proxy_tcp_throughput";
    /// Concurrent connections scenario.
    pub const CONCURRENT: &'static str = "proxy_concurrent_connections";
    /// Overhead scenario.
    pub const OVERHEAD: &'static str = "proxy_overhead";
    /// Named backend scenario.
    pub const NAMED_BACKEND: &'static str = "proxy_runtime_name_backend";

    /// Extracts the suite's figures.
    pub fn extract(records: &[ResultRecord]) -> Self {
        let tcp = find(records, Self::TCP);

        Self {
            http_single: field(&find(records, Self::HTTP_SINGLE), "requests_per_sec"),
            http_balanced: field(&find(records, Self::HTTP_BALANCED), "requests_per_sec"),
            tcp_msg_rate: field(&tcp, "messages_per_sec"),
            tcp_mb_rate: field(&tcp, "throughput_mb_sec"),
            concurrent_msg_rate: field(&find(records, Self::CONCURRENT), "messages_per_sec"),
            overhead_percent: field(&find(records, Self::OVERHEAD), "overhead_percent"),
            named_msg_rate: field(&find(records, Self::NAMED_BACKEND), "messages_per_sec"),
        }
    }

    /// Headline figures.
    pub fn kpis(&self) -> Vec<Kpi> {
        let tone = Tone::for_suite(Suite::Proxy);
        vec![
            kpi("HTTP proxy", self.http_single, "req/sec", tone),
            Kpi {
                display: format_percent(self.overhead_percent, KPI_DECIMALS),
                ..kpi("Proxy overhead", self.overhead_percent, "vs direct connection", tone)
            },
        ]
    }

    /// Charts in display order.
    pub fn charts(&self) -> Vec<ChartSpec> {
        vec![
            ChartSpec::new(
                "pHttpChart",
                "HTTP Proxy Throughput (req/sec)",
                Orientation::Horizontal,
                "req/sec",
                &[
                    ("Single backend", rounded(self.http_single, 0)),
                    ("Load balancing", rounded(self.http_balanced, 0)),
                ],
                PROXY_PALETTE,
            ),
            ChartSpec::new(
                "pTcpChart",
                "TCP Forwarding (K msg/sec)",
                Orientation::Horizontal,
                "K msg/sec",
                &[
                    ("Single", k(self.tcp_msg_rate)),
                    ("20-client conc.", k(self.concurrent_msg_rate)),
                    ("Named backend", k(self.named_msg_rate)),
                ],
                PROXY_PALETTE,
            ),
        ]
    }

    /// Detail table.
    pub fn table(&self) -> DetailTable {
        DetailTable {
            title: "Proxy Details".to_string(),
            rows: vec![
                row("HTTP single backend", self.http_single, "req/sec", 0),
                row("HTTP load balancing", self.http_balanced, "req/sec", 0),
                row("TCP throughput", self.tcp_msg_rate, "msg/sec", 0),
                row("TCP bandwidth", self.tcp_mb_rate, "MB/sec", 1),
                row("20-client concurrent", self.concurrent_msg_rate, "msg/sec", 0),
                row("Named backend", self.named_msg_rate, "msg/sec", 0),
                plain_row("Proxy overhead", self.overhead_percent, "% vs direct", 1),
            ],
        }
    }
}

/// Protocol-upgrade handshake figures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebSocketMetrics {
    /// Completed handshakes per second.
    pub handshake_rate: Option<f64>,
    /// Operations per second with WS and raw TCP clients mixed.
    pub coexistence_rate: Option<f64>,
    /// Concurrent clients operations per second.
    pub concurrent_rate: Option<f64>,
}

impl WebSocketMetrics {
    /// Handshake scenario.
    pub const HANDSHAKE: &'static str = "ws_handshake_throughput";
    /// Coexistence scenario.
    pub const COEXISTENCE: &'static str = "ws_tcp_coexistence";
    /// Concurrent scenario.
    pub const CONCURRENT: &'static str = "ws_concurrent";

    /// Extracts the suite's figures.
    pub fn extract(records: &[ResultRecord]) -> Self {
        Self {
            handshake_rate: field(&find(records, Self::HANDSHAKE), "ops_per_sec"),
            coexistence_rate: field(&find(records, Self::COEXISTENCE), "ops_per_sec"),
            concurrent_rate: field(&find(records, Self::CONCURRENT), "ops_per_sec"),
        }
    }

    /// Headline figures.
    pub fn kpis(&self) -> Vec<Kpi> {
        vec![kpi(
            "WS handshakes",
            self.handshake_rate,
            "handshakes/sec",
            Tone::for_suite(Suite::WebSocket),
        )]
    }

    /// Charts in display order.
    pub fn charts(&self) -> Vec<ChartSpec> {
        vec![ChartSpec::new(
            "wsChart",
            "Handshake Throughput (ops/sec)",
            Orientation::Vertical,
            "ops/sec",
            &[
                ("Handshake", rounded(self.handshake_rate, 0)),
                ("WS+TCP coexist", rounded(self.coexistence_rate, 0)),
                ("20-client conc.", rounded(self.concurrent_rate, 0)),
            ],
            WEBSOCKET_PALETTE,
        )]
    }

    /// Detail table.
    pub fn table(&self) -> DetailTable {
        DetailTable {
            title: "WebSocket Details".to_string(),
            rows: vec![
                row("Handshake throughput", self.handshake_rate, "ops/sec", 0),
                row("WS + TCP coexistence", self.coexistence_rate, "ops/sec", 0),
                row("20-client concurrent", self.concurrent_rate, "ops/sec", 0),
            ],
        }
    }
}
