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

//! Loading result files into record sequences.
//!
//! [`load`] never fails. Every problem reading or parsing a file is reported
//! as a [`LoadError`] by [`try_load`] and collapsed to an empty sequence at
//! this boundary, so a broken suite only thins out the report.

use super::locator::ResultFile;
use super::record::ResultRecord;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

/// Why a result file could not be turned into records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot read '{path}': {message}")]
    Read {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        message: String,
    },

    /// The file exceeds the configured size limit.
    #[error("'{path}' is too large ({actual} bytes, limit {max})")]
    TooLarge {
        /// File path
        path: PathBuf,
        /// Actual size in bytes
        actual: u64,
        /// Limit in bytes
        max: u64,
    },

    /// The content is not valid JSON.
    #[error("malformed JSON in '{path}': {message}")]
    Malformed {
        /// File path
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// The top-level value is not an array of records.
    #[error("'{path}' does not contain a list of records")]
    NotAnArray {
        /// File path
        path: PathBuf,
    },
}

/// Loads a suite's records, or nothing when the file is absent or broken.
pub fn load(file: Option<&ResultFile>, max_file_size: u64) -> Vec<ResultRecord> {
    let Some(file) = file else {
        return Vec::new();
    };

    match try_load(file, max_file_size) {
        Ok(records) => {
            debug!("Loaded {} records from {}", records.len(), file.path.display());
            records
        }
        Err(e) => {
            warn!("Ignoring result file: {}", e);
            Vec::new()
        }
    }
}

/// Reads and parses a result file, reporting why it failed.
pub fn try_load(file: &ResultFile, max_file_size: u64) -> Result<Vec<ResultRecord>, LoadError> {
    let read_error = |e: std::io::Error| LoadError::Read {
        path: file.path.clone(),
        message: e.to_string(),
    };

    let metadata = fs::metadata(&file.path).map_err(read_error)?;
    if metadata.len() > max_file_size {
        return Err(LoadError::TooLarge {
            path: file.path.clone(),
            actual: metadata.len(),
            max: max_file_size,
        });
    }

    let content = fs::read_to_string(&file.path).map_err(read_error)?;
    parse_records(&content).map_err(|e| match e {
        ParseFailure::Json(message) => LoadError::Malformed {
            path: file.path.clone(),
            message,
        },
        ParseFailure::Shape => LoadError::NotAnArray {
            path: file.path.clone(),
        },
    })
}

enum ParseFailure {
    Json(String),
    Shape,
}

/// Parses file content into records. Array entries that are not objects
/// are skipped.
fn parse_records(content: &str) -> Result<Vec<ResultRecord>, ParseFailure> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| ParseFailure::Json(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(ParseFailure::Shape);
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(ResultRecord::from_map(map)),
            other => {
                debug!("Skipping non-object record: {}", other);
                None
            }
        })
        .collect())
}
