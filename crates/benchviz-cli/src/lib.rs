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

//! Benchviz CLI library for argument parsing and execution.
//!
//! ```text
//! benchviz [RESULTS_DIR] [-o DIR] [-f html|json|markdown]... [--summary] [-v...]
//! ```
//!
//! `RESULTS_DIR` defaults to `results/` next to the executable. The HTML
//! report is always written; `--format` adds JSON or Markdown exports.

pub mod cli;
pub mod error;

pub use cli::{log_directive, Cli, FormatArg};
pub use error::{CliError, Result};
