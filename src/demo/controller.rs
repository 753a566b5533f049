use std::borrow::Cow;

use tracing::debug;

use super::text::{
    EMPTY_QUERY_PROMPT, INDEX_STATUS, MODEL_STATUS_READY, PLACEHOLDER_HITS, RETRIEVE_CLOSING,
    RETRIEVE_DISCLAIMER,
};

pub const DEFAULT_TOP_K: u32 = 10;
pub const MIN_TOP_K: u32 = 1;
pub const MAX_TOP_K: u32 = 100;

/// Longest query prefix (in characters) echoed back in a retrieval report.
pub const MAX_QUERY_ECHO_CHARS: usize = 120;

// A report always shows the first five template lines, plus one more per
// requested result up to five.
const BASE_REPORT_LINES: usize = 5;
const MAX_EXTRA_REPORT_LINES: u32 = 5;

/// Simulates loading the ColBERT v2.0 checkpoint. No weights are read.
pub fn load_model() -> &'static str {
    MODEL_STATUS_READY
}

/// Describes the (never built) passage index.
pub fn index_status() -> &'static str {
    INDEX_STATUS
}

/// Normalizes an untrusted Top-K value.
///
/// Numbers are rounded and clamped to `[MIN_TOP_K, MAX_TOP_K]`. Anything that
/// is not a finite number falls back to [`DEFAULT_TOP_K`].
pub fn normalize_top_k(raw: Option<f64>) -> u32 {
    match raw {
        Some(value) if value.is_finite() => {
            value.round().clamp(MIN_TOP_K as f64, MAX_TOP_K as f64) as u32
        }
        _ => DEFAULT_TOP_K,
    }
}

/// Returns the query as shown in the report: at most
/// [`MAX_QUERY_ECHO_CHARS`] characters, with `...` appended when cut.
pub fn echo_query(query: &str) -> Cow<'_, str> {
    match query.char_indices().nth(MAX_QUERY_ECHO_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &query[..cut])),
        None => Cow::Borrowed(query),
    }
}

/// Renders the placeholder retrieval report for `query`.
///
/// A blank query yields [`EMPTY_QUERY_PROMPT`] whatever `top_k` is. Otherwise
/// the report is the first `5 + min(k, 5)` lines of a fixed nine-line
/// template, where `k` is the normalized Top-K.
pub fn retrieve(query: &str, top_k: Option<f64>) -> String {
    if query.trim().is_empty() {
        debug!("Blank query, returning input prompt");
        return EMPTY_QUERY_PROMPT.to_string();
    }

    let k = normalize_top_k(top_k);
    let template: [Cow<'_, str>; 9] = [
        Cow::Borrowed(RETRIEVE_DISCLAIMER),
        Cow::Owned(format!("查询：{}", echo_query(query))),
        Cow::Owned(format!("Top-{} 检索结果（占位）：", k)),
        Cow::Borrowed(""),
        Cow::Borrowed(PLACEHOLDER_HITS[0]),
        Cow::Borrowed(PLACEHOLDER_HITS[1]),
        Cow::Borrowed(PLACEHOLDER_HITS[2]),
        Cow::Borrowed(""),
        Cow::Borrowed(RETRIEVE_CLOSING),
    ];

    let shown = (BASE_REPORT_LINES + k.min(MAX_EXTRA_REPORT_LINES) as usize).min(template.len());
    debug!(top_k = k, lines = shown, "Rendered placeholder retrieval report");

    template[..shown].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_count(output: &str) -> usize {
        output.split('\n').count()
    }

    #[test]
    fn test_load_model_is_constant() {
        assert_eq!(load_model(), MODEL_STATUS_READY);
        assert_eq!(load_model(), load_model());
        assert!(load_model().contains("演示模式"));
    }

    #[test]
    fn test_index_status_is_two_lines() {
        let status = index_status();
        assert_eq!(status, index_status());
        assert_eq!(line_count(status), 2);
        assert!(status.starts_with("[演示] 索引状态：未构建。"));
        assert!(status.contains("nbits=2"));
    }

    #[test]
    fn test_blank_query_returns_prompt() {
        assert_eq!(retrieve("", Some(10.0)), EMPTY_QUERY_PROMPT);
        assert_eq!(retrieve("   \t\n", Some(3.0)), EMPTY_QUERY_PROMPT);
        assert_eq!(retrieve("\u{3000}", None), EMPTY_QUERY_PROMPT);
    }

    #[test]
    fn test_normalize_top_k_clamps_and_rounds() {
        assert_eq!(normalize_top_k(Some(10.0)), 10);
        assert_eq!(normalize_top_k(Some(0.0)), 1);
        assert_eq!(normalize_top_k(Some(-7.0)), 1);
        assert_eq!(normalize_top_k(Some(100.0)), 100);
        assert_eq!(normalize_top_k(Some(250.0)), 100);
        assert_eq!(normalize_top_k(Some(7.6)), 8);
        assert_eq!(normalize_top_k(Some(2.4)), 2);
    }

    #[test]
    fn test_normalize_top_k_defaults_for_non_numbers() {
        assert_eq!(normalize_top_k(None), DEFAULT_TOP_K);
        assert_eq!(normalize_top_k(Some(f64::NAN)), DEFAULT_TOP_K);
        assert_eq!(normalize_top_k(Some(f64::INFINITY)), DEFAULT_TOP_K);
    }

    #[test]
    fn test_echo_query_truncation() {
        assert_eq!(echo_query("What is ColBERT?"), "What is ColBERT?");

        let exact = "a".repeat(MAX_QUERY_ECHO_CHARS);
        assert_eq!(echo_query(&exact), exact.as_str());

        let long = "x".repeat(200);
        assert_eq!(echo_query(&long), format!("{}...", "x".repeat(120)));
    }

    #[test]
    fn test_echo_query_counts_characters_not_bytes() {
        let query = "检".repeat(130);
        assert_eq!(echo_query(&query), format!("{}...", "检".repeat(120)));
    }

    #[test]
    fn test_retrieve_scenario() {
        let output = retrieve("What is ColBERT?", Some(10.0));
        let lines: Vec<&str> = output.split('\n').collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], RETRIEVE_DISCLAIMER);
        assert_eq!(lines[1], "查询：What is ColBERT?");
        assert_eq!(lines[2], "Top-10 检索结果（占位）：");
        assert_eq!(&lines[4..7], &PLACEHOLDER_HITS[..]);
        assert_eq!(lines[8], RETRIEVE_CLOSING);
    }

    #[test]
    fn test_retrieve_long_query_with_top_one() {
        let output = retrieve(&"x".repeat(200), Some(1.0));
        let lines: Vec<&str> = output.split('\n').collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], format!("查询：{}...", "x".repeat(120)));
        assert_eq!(lines[2], "Top-1 检索结果（占位）：");
        assert_eq!(lines[5], PLACEHOLDER_HITS[1]);
    }

    #[test]
    fn test_retrieve_line_count_follows_top_k() {
        for (k, expected) in [(1, 6), (2, 7), (3, 8), (4, 9), (5, 9), (50, 9), (100, 9)] {
            let output = retrieve("late interaction", Some(k as f64));
            assert_eq!(line_count(&output), expected, "top_k = {}", k);
        }
    }

    #[test]
    fn test_retrieve_mentions_clamped_k() {
        assert!(retrieve("q", Some(0.0)).contains("Top-1 "));
        assert!(retrieve("q", Some(999.0)).contains("Top-100 "));
        assert!(retrieve("q", None).contains("Top-10 "));
    }

    #[test]
    fn test_retrieve_echoes_untrimmed_query() {
        let output = retrieve("  padded  ", Some(5.0));
        assert!(output.contains("查询：  padded  \n"));
    }
}
