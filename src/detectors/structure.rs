//! Breaking-change detection over *removed* lines.
//!
//! Unlike the other detectors this one looks at deletions: dropping a
//! type/interface/class declaration or a required-field marker usually means
//! a caller somewhere breaks. One issue per file, not per line.

use crate::core::{Issue, IssueType, Severity};
use once_cell::sync::Lazy;
use regex::Regex;

static BREAKING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Deleted type surface.
        r"^\s*(export\s+)?(default\s+)?(abstract\s+)?(interface|type|class|enum)\s+\w+",
        // Deleted or altered function/method signature.
        r"^\s*(export\s+)?(async\s+)?function\s+\w+\s*\(",
        // Required-field markers going away.
        r"(\brequired\b|required\s*:\s*true)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("invalid breaking-change pattern"))
    .collect()
});

/// Flag a file whose removed lines touch declaration or requiredness
/// surface. Emits at most one warning for the whole file.
pub fn detect_breaking_changes(file: &str, removed: &[(usize, &str)]) -> Vec<Issue> {
    let hit = removed
        .iter()
        .any(|(_, content)| BREAKING_PATTERNS.iter().any(|p| p.is_match(content)));

    if !hit {
        return Vec::new();
    }

    vec![Issue {
        issue_type: IssueType::Warning,
        severity: Severity::Medium,
        file: file.to_string(),
        diff_line: 0,
        message: "Possible breaking change: removed or altered declared API surface".to_string(),
        suggestion: Some(
            "Check downstream consumers and deprecate before removing".to_string(),
        ),
    }]
}
