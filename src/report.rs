// src/report.rs
//! The reporter: runs the statistics and search tools over the working
//! tree and assembles the summary record.

use crate::error::{PortstatError, Result};
use crate::tools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Statistics tool, asked for its machine-readable report.
const STATS_TOOL: &str = "tokei";
const STATS_ARGS: &[&str] = &["-o", "json"];

/// Search tool, given the one literal token and nothing else.
const SEARCH_TOOL: &str = "ag";

/// The token whose occurrences are counted across the working tree.
const SEARCH_TOKEN: &str = "unsafe";

const C_LANG: &str = "C";
const RUST_LANG: &str = "Rust";

/// One language's entry in the statistics report. Only the `code` count
/// is consumed; the tool's other fields are ignored.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LanguageEntry {
    pub code: u64,
}

pub type LanguageReport = HashMap<String, LanguageEntry>;

/// The summary record printed at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    #[serde(rename = "C")]
    pub c_lines: u64,
    #[serde(rename = "Rust")]
    pub rust_lines: u64,
    #[serde(rename = "unsafe")]
    pub unsafe_hits: usize,
}

impl Summary {
    /// Serializes the record as one compact JSON object.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn render(&self) -> Result<String> {
        serde_json::to_string(self).map_err(PortstatError::Encode)
    }
}

/// Runs the full sequence: statistics, lookup, search, count, assemble.
///
/// The two tool invocations are strictly sequential; each child is fully
/// consumed before the next starts. No summary is produced on any error
/// path.
///
/// # Errors
/// Returns error if either tool cannot be launched, the statistics report
/// is malformed, or a required language is absent from it.
pub fn run() -> Result<Summary> {
    let stats = tools::capture(STATS_TOOL, STATS_ARGS)?;
    let report = parse_language_report(&stats.stdout)?;
    let c_lines = code_lines(&report, C_LANG)?;
    let rust_lines = code_lines(&report, RUST_LANG)?;

    let search = tools::capture(SEARCH_TOOL, &[SEARCH_TOKEN])?;
    let unsafe_hits = count_token(&search.combined(), SEARCH_TOKEN);

    Ok(Summary {
        c_lines,
        rust_lines,
        unsafe_hits,
    })
}

/// Parses the statistics tool's JSON report into a per-language map.
///
/// # Errors
/// Returns error if `text` is not valid JSON of the expected shape.
pub fn parse_language_report(text: &str) -> Result<LanguageReport> {
    serde_json::from_str(text).map_err(PortstatError::MalformedReport)
}

/// Looks up one language's `code` line count in the parsed report.
///
/// # Errors
/// Returns error if the language has no entry in the report.
pub fn code_lines(report: &LanguageReport, lang: &str) -> Result<u64> {
    report
        .get(lang)
        .map(|entry| entry.code)
        .ok_or_else(|| PortstatError::MissingLanguage(lang.to_string()))
}

/// Counts non-overlapping occurrences of `token` in `haystack`.
#[must_use]
pub fn count_token(haystack: &str, token: &str) -> usize {
    haystack.matches(token).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_token_empty_input_is_zero() {
        assert_eq!(count_token("", "unsafe"), 0);
    }

    #[test]
    fn count_token_spans_lines() {
        let text = "unsafe fn a()\nlet b = unsafe { c() };\n// un-safe\n";
        assert_eq!(count_token(text, "unsafe"), 2);
    }

    #[test]
    fn count_token_counts_every_hit_on_a_line() {
        assert_eq!(count_token("unsafe unsafe unsafe", "unsafe"), 3);
    }

    #[test]
    fn extra_fields_in_report_are_ignored() {
        let text = r#"{"C": {"code": 120, "comments": 4, "blanks": 2}, "Rust": {"code": 4380}}"#;
        let report = parse_language_report(text).unwrap();
        assert_eq!(code_lines(&report, "C").unwrap(), 120);
        assert_eq!(code_lines(&report, "Rust").unwrap(), 4380);
    }

    #[test]
    fn missing_language_is_an_error() {
        let report = parse_language_report(r#"{"C": {"code": 1}}"#).unwrap();
        let err = code_lines(&report, "Rust").unwrap_err();
        assert!(matches!(err, PortstatError::MissingLanguage(_)));
    }

    #[test]
    fn malformed_report_is_an_error() {
        let err = parse_language_report("{ not json").unwrap_err();
        assert!(matches!(err, PortstatError::MalformedReport(_)));
    }

    #[test]
    fn summary_field_order_is_stable() {
        let summary = Summary {
            c_lines: 120,
            rust_lines: 4380,
            unsafe_hits: 7,
        };
        assert_eq!(
            summary.render().unwrap(),
            r#"{"C":120,"Rust":4380,"unsafe":7}"#
        );
    }
}
