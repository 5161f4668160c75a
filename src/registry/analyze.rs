//! Project summary analysis.
//!
//! Turns a free-text project summary into Memory Bank suggestions. The only
//! thing taken from the summary is a potential project name (its first three
//! words); the rest of the reply is fixed.

const ANALYSIS_TEMPLATE: &str = include_str!("../../docs/analysis.md");

/// Marker in the analysis template replaced by the potential project name.
const NAME_PLACEHOLDER: &str = "{project_name}";

/// Number of leading words used as the potential project name.
const NAME_WORDS: usize = 3;

/// Derives a potential project name from a summary.
///
/// With at least three whitespace-separated words, returns the first three
/// joined by single spaces. Otherwise returns the summary unchanged.
pub fn potential_project_name(summary: &str) -> String {
    let words: Vec<&str> = summary.split_whitespace().collect();
    if words.len() >= NAME_WORDS {
        words[..NAME_WORDS].join(" ")
    } else {
        summary.to_string()
    }
}

/// Builds Memory Bank suggestions for a project summary.
pub fn analyze_summary(summary: &str) -> String {
    ANALYSIS_TEMPLATE.replacen(NAME_PLACEHOLDER, &potential_project_name(summary), 1)
}
