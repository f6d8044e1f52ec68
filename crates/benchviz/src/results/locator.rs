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

//! Finding the newest result file for a suite.

use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;

/// Extension of result files.
pub const RESULT_EXTENSION: &str = "json";

/// The most recent result artifact of a suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultFile {
    /// Path to the file.
    pub path: PathBuf,
    /// Last modification time.
    pub modified: SystemTime,
}

/// Returns whether `file_name` looks like `<prefix>_<anything>.json`.
pub fn matches_prefix(file_name: &str, prefix: &str) -> bool {
    let Some(stem) = file_name.strip_suffix(RESULT_EXTENSION).and_then(|s| s.strip_suffix('.')) else {
        return false;
    };
    stem.strip_prefix(prefix)
        .map(|rest| rest.starts_with('_'))
        .unwrap_or(false)
}

/// Finds the most recently modified `<prefix>_*.json` file in `dir`.
///
/// Returns `None` when nothing matches or the directory cannot be read.
/// Files with equal modification times keep directory enumeration order:
/// the first one seen wins.
pub fn locate(dir: &Path, prefix: &str) -> Option<ResultFile> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Cannot scan results directory {}: {}", dir.display(), e);
            return None;
        }
    };

    let mut newest: Option<ResultFile> = None;

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !matches_prefix(name, prefix) {
            continue;
        }
        // Follows symlinks, so a linked result file counts with its target's mtime
        let Ok(metadata) = std::fs::metadata(&path) else {
            continue;
        };
        if !metadata.is_file() {
            continue;
        }
        let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);

        match &newest {
            Some(current) if current.modified >= modified => {}
            _ => newest = Some(ResultFile { path, modified }),
        }
    }

    match &newest {
        Some(file) => debug!("Latest {} result: {}", prefix, file.path.display()),
        None => debug!("No {} results in {}", prefix, dir.display()),
    }

    newest
}
