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

//! Benchmark suites and their result files.
//!
//! # Modules
//!
//! - `locator`: finds the newest `<suite>_*.json` file
//! - `loader`: parses a file into records, absorbing failures
//! - `record`: the record type and scenario lookup

pub mod loader;
pub mod locator;
pub mod record;

pub use loader::{load, try_load, LoadError};
pub use locator::{locate, ResultFile};
pub use record::{find, find_variant, find_where, ResultRecord};

use crate::config::ReportConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the independently benchmarked subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suite {
    /// Connection-oriented TCP server.
    Server,
    /// In-memory key-value cache.
    Cache,
    /// Forwarding proxy.
    Proxy,
    /// Protocol-upgrade handshake tester.
    WebSocket,
}

impl Suite {
    /// All suites in report precedence order.
    pub const ALL: [Suite; 4] = [Suite::Server, Suite::Cache, Suite::Proxy, Suite::WebSocket];

    /// File name prefix of this suite's result files.
    pub fn prefix(&self) -> &'static str {
        match self {
            Suite::Server => "server",
            Suite::Cache => "cache",
            Suite::Proxy => "proxy",
            Suite::WebSocket => "websocket",
        }
    }

    /// Section heading.
    pub fn title(&self) -> &'static str {
        match self {
            Suite::Server => "Server Runtime",
            Suite::Cache => "Cache Runtime",
            Suite::Proxy => "Proxy Runtime",
            Suite::WebSocket => "WebSocket Runtime",
        }
    }

    /// One-line section description.
    pub fn description(&self) -> &'static str {
        match self {
            Suite::Server => "TCP server — accept rate, message throughput, concurrent clients",
            Suite::Cache => "RESP-protocol in-memory cache — SET, GET, mixed workloads",
            Suite::Proxy => "TCP & HTTP forwarding — single backend, load balancing, overhead",
            Suite::WebSocket => "WS upgrade handshake rate, TCP coexistence, concurrent clients",
        }
    }

    /// Section icon.
    pub fn icon(&self) -> &'static str {
        match self {
            Suite::Server => "🖧",
            Suite::Cache => "⚡",
            Suite::Proxy => "↔️",
            Suite::WebSocket => "🌐",
        }
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A suite's located file and loaded records.
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteResults {
    /// Which suite.
    pub suite: Suite,
    /// Newest result file, if any was found.
    pub file: Option<ResultFile>,
    /// Parsed records; empty when the file is absent or broken.
    pub records: Vec<ResultRecord>,
}

impl SuiteResults {
    /// A suite with no result file.
    pub fn missing(suite: Suite) -> Self {
        Self {
            suite,
            file: None,
            records: Vec::new(),
        }
    }

    /// Builds results from already-parsed records.
    pub fn from_records(suite: Suite, file: Option<ResultFile>, records: Vec<ResultRecord>) -> Self {
        Self {
            suite,
            file,
            records,
        }
    }

    /// Whether a result file was located for this suite.
    pub fn is_located(&self) -> bool {
        self.file.is_some()
    }
}

/// Locates and loads one suite.
pub fn collect_suite(config: &ReportConfig, suite: Suite) -> SuiteResults {
    let file = locate(&config.results_dir, suite.prefix());
    let records = load(file.as_ref(), config.max_file_size);
    SuiteResults {
        suite,
        file,
        records,
    }
}

/// Results of all four suites.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportInputs {
    /// Server suite
    pub server: SuiteResults,
    /// Cache suite
    pub cache: SuiteResults,
    /// Proxy suite
    pub proxy: SuiteResults,
    /// WebSocket suite
    pub websocket: SuiteResults,
}

impl ReportInputs {
    /// Inputs where no suite has results.
    pub fn empty() -> Self {
        Self {
            server: SuiteResults::missing(Suite::Server),
            cache: SuiteResults::missing(Suite::Cache),
            proxy: SuiteResults::missing(Suite::Proxy),
            websocket: SuiteResults::missing(Suite::WebSocket),
        }
    }

    /// Suites in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = &SuiteResults> {
        [&self.server, &self.cache, &self.proxy, &self.websocket].into_iter()
    }

    /// Replaces the results of one suite.
    pub fn with(mut self, results: SuiteResults) -> Self {
        match results.suite {
            Suite::Server => self.server = results,
            Suite::Cache => self.cache = results,
            Suite::Proxy => self.proxy = results,
            Suite::WebSocket => self.websocket = results,
        }
        self
    }
}

/// Locates and loads every suite, one at a time, in precedence order.
pub fn collect_suites(config: &ReportConfig) -> ReportInputs {
    Suite::ALL
        .into_iter()
        .fold(ReportInputs::empty(), |inputs, suite| {
            inputs.with(collect_suite(config, suite))
        })
}
