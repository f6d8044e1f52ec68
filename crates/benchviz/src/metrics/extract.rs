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

//! Numeric field extraction.
//!
//! This is the only place a record field is read as a number. Both functions
//! are total: any record shape and any field name yield a finite value or an
//! explicit absence.

use crate::results::ResultRecord;
use serde_json::Value;

/// Reads `field` as a finite number.
///
/// Accepts JSON numbers, numeric strings (surrounding whitespace ignored)
/// and `true` (as 1). Everything else, including null, `false`, arrays,
/// objects, NaN and infinities, is `None`.
pub fn extract_present(record: &ResultRecord, field: &str) -> Option<f64> {
    let value = match record.get(field)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(true) => Some(1.0),
        _ => None,
    };
    value.filter(|v| v.is_finite())
}

/// Reads `field` as a number, returning `default` when it is absent or
/// unusable.
///
/// # Examples
///
/// ```
/// use benchviz::metrics::extract;
/// use benchviz::results::ResultRecord;
///
/// let record: ResultRecord =
///     serde_json::from_str(r#"{"test": "cache_get_throughput", "ops_per_sec": "125000"}"#).unwrap();
///
/// assert_eq!(extract(&record, "ops_per_sec", 0.0), 125_000.0);
/// assert_eq!(extract(&record, "missing", 0.0), 0.0);
/// assert_eq!(extract(&record, "test", 7.0), 7.0);
/// ```
pub fn extract(record: &ResultRecord, field: &str, default: f64) -> f64 {
    extract_present(record, field).unwrap_or(default)
}
