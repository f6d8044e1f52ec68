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

//! Result records and scenario lookup.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field naming the scenario a record reports.
pub const TEST_FIELD: &str = "test";

/// One flat metric record from a suite's result file.
///
/// Records are loosely typed: any field may be missing or carry an
/// unexpected type. Use [`crate::metrics::extract`] to read numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultRecord {
    fields: Map<String, Value>,
}

impl ResultRecord {
    /// A record with every field absent.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wraps a JSON object.
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Scenario name, when the `test` field is a string.
    pub fn test_name(&self) -> Option<&str> {
        self.fields.get(TEST_FIELD).and_then(Value::as_str)
    }

    /// Raw field lookup.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns whether no fields are present.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl From<Map<String, Value>> for ResultRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::from_map(fields)
    }
}

/// Returns the first record whose `test` equals `test_name`, or an empty
/// record when none does. Later duplicates are ignored.
pub fn find(records: &[ResultRecord], test_name: &str) -> ResultRecord {
    find_where(records, test_name, |_| true)
}

/// Like [`find`], but the record must also satisfy `predicate`.
pub fn find_where<F>(records: &[ResultRecord], test_name: &str, predicate: F) -> ResultRecord
where
    F: Fn(&ResultRecord) -> bool,
{
    records
        .iter()
        .find(|r| r.test_name() == Some(test_name) && predicate(r))
        .cloned()
        .unwrap_or_default()
}

/// Picks the variant of a scenario whose auxiliary numeric `field` equals
/// `value`, e.g. a throughput test run at several message sizes.
///
/// Only JSON numbers match; a string `"64"` does not select the 64-byte run.
pub fn find_variant(records: &[ResultRecord], test_name: &str, field: &str, value: f64) -> ResultRecord {
    find_where(records, test_name, |r| {
        r.get(field).and_then(Value::as_f64) == Some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> ResultRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_find_first_match() {
        let records = vec![
            record(json!({"test": "a", "ops_per_sec": 1})),
            record(json!({"test": "b", "ops_per_sec": 2})),
            record(json!({"test": "b", "ops_per_sec": 3})),
        ];

        let found = find(&records, "b");
        assert_eq!(found.get("ops_per_sec"), Some(&json!(2)));
    }

    #[test]
    fn test_find_missing_returns_empty() {
        let records = vec![record(json!({"test": "a"}))];

        let found = find(&records, "zzz");
        assert!(found.is_empty());
        assert_eq!(found.test_name(), None);
    }

    #[test]
    fn test_find_ignores_non_string_test() {
        let records = vec![record(json!({"test": 5})), record(json!({"ops_per_sec": 1}))];
        assert!(find(&records, "5").is_empty());
    }

    #[test]
    fn test_find_variant_by_message_size() {
        let records = vec![
            record(json!({"test": "server_single_client_throughput", "message_size_bytes": 1024, "messages_per_sec": 10})),
            record(json!({"test": "server_single_client_throughput", "message_size_bytes": 64, "messages_per_sec": 99})),
        ];

        let small = find_variant(&records, "server_single_client_throughput", "message_size_bytes", 64.0);
        let large = find_variant(&records, "server_single_client_throughput", "message_size_bytes", 1024.0);

        assert_eq!(small.get("messages_per_sec"), Some(&json!(99)));
        assert_eq!(large.get("messages_per_sec"), Some(&json!(10)));
    }

    #[test]
    fn test_find_variant_requires_numeric_field() {
        let records = vec![record(
            json!({"test": "t", "message_size_bytes": "64", "messages_per_sec": 5}),
        )];
        assert!(find_variant(&records, "t", "message_size_bytes", 64.0).is_empty());
    }

    #[test]
    fn test_float_variant_matches_integer() {
        let records = vec![record(json!({"test": "t", "message_size_bytes": 64.0}))];
        assert!(!find_variant(&records, "t", "message_size_bytes", 64.0).is_empty());
    }
}
