//! Performance rule table: medium-severity hints over added lines.

use super::{scan_lines, PatternRule};
use crate::core::{Issue, IssueType, Severity};
use once_cell::sync::Lazy;

static RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    let suggestion = |name, pattern, message, remedy| {
        PatternRule::new(
            name,
            pattern,
            IssueType::Suggestion,
            Severity::Medium,
            message,
            remedy,
        )
    };
    let warning = |name, pattern, message, remedy| {
        PatternRule::new(
            name,
            pattern,
            IssueType::Warning,
            Severity::Medium,
            message,
            remedy,
        )
    };

    vec![
        warning(
            "empty-effect-deps",
            r"useEffect\s*\(.*,\s*\[\s*\]\s*\)",
            "Effect with an empty dependency array",
            "Confirm the effect really runs once; list its real dependencies",
        ),
        warning(
            "nested-iteration",
            r"(\bfor\s*\([^)]*\).*\bfor\s*\(|\.(forEach|map)\([^)]*\.(forEach|map)\()",
            "Nested iteration on a single line (O(n^2) shape)",
            "Index one collection by key and do a single pass",
        ),
        suggestion(
            "json-round-trip",
            r"JSON\.parse\s*\(\s*JSON\.stringify",
            "Serialize/deserialize round trip used as a deep copy",
            "Use structuredClone or a targeted copy instead",
        ),
        suggestion(
            "uncoordinated-timer",
            r"\bsetInterval\s*\(",
            "setInterval without visible coordination",
            "Prefer a scheduled task or clear the interval on teardown",
        ),
        suggestion(
            "fusable-chain",
            r"(\.map\s*\([^)]*\)\s*\.filter\s*\(|\.filter\s*\([^)]*\)\s*\.map\s*\()",
            "Chained map/filter passes that could be fused",
            "Combine the passes with reduce or a single loop",
        ),
        suggestion(
            "import-fan-in",
            r"^\s*import\s*\{[^}]*,[^}]*,[^}]*,[^}]*,[^}]*,[^}]*\}",
            "Import pulls in six or more names from one module",
            "Import only what the file uses, or split the module",
        ),
    ]
});

/// Scan a file's added lines against the performance rule table.
pub fn detect_performance_issues(file: &str, added: &[(usize, &str)]) -> Vec<Issue> {
    scan_lines(&RULES, file, added)
}

/// The rule table itself, for listings and tooling.
pub fn rules() -> &'static [PatternRule] {
    &RULES
}
