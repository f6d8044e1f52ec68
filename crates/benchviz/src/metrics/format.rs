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

//! Human-facing number formatting.
//!
//! These helpers only produce labels. Chart values and arithmetic always use
//! the raw numbers.

/// Shown for a value that was never measured.
pub const NOT_AVAILABLE: &str = "N/A";

const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

/// Formats a value with a K/M magnitude suffix.
///
/// `None` and non-finite values render as [`NOT_AVAILABLE`].
///
/// # Examples
///
/// ```
/// use benchviz::metrics::format_metric;
///
/// assert_eq!(format_metric(Some(125_000.0), 1), "125.0K");
/// assert_eq!(format_metric(Some(2_500_000.0), 2), "2.50M");
/// assert_eq!(format_metric(Some(12.345), 1), "12.3");
/// assert_eq!(format_metric(None, 3), "N/A");
/// ```
pub fn format_metric(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format_compact(v, decimals),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Formats a known value with a K/M magnitude suffix.
pub fn format_compact(value: f64, decimals: usize) -> String {
    if value >= MILLION {
        format!("{:.*}M", decimals, value / MILLION)
    } else if value >= THOUSAND {
        format!("{:.*}K", decimals, value / THOUSAND)
    } else {
        format!("{:.*}", decimals, value)
    }
}

/// Formats a percentage such as `3.4%`, or [`NOT_AVAILABLE`].
pub fn format_percent(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.*}%", decimals, v),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Formats a value with comma thousands separators, e.g. `1,234,567`.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    if value.is_sign_negative() && !is_zero {
        grouped.insert(0, '-');
    }
    grouped
}

/// Scales a value to thousands, rounded to one decimal.
pub fn kilo(value: f64) -> f64 {
    round_to(value / THOUSAND, 1)
}

/// Rounds to a fixed number of decimals.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
