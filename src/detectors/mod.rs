pub mod performance;
pub mod security;
pub mod structure;

use crate::core::{Issue, IssueType, Severity};
use regex::Regex;

/// One entry in a detector's rule table: a lexical pattern plus the fixed
/// issue it emits on a match.
pub struct PatternRule {
    pub name: &'static str,
    pub pattern: Regex,
    pub issue_type: IssueType,
    pub severity: Severity,
    pub message: &'static str,
    pub suggestion: &'static str,
}

impl PatternRule {
    pub fn new(
        name: &'static str,
        pattern: &str,
        issue_type: IssueType,
        severity: Severity,
        message: &'static str,
        suggestion: &'static str,
    ) -> Self {
        Self {
            name,
            // Patterns are static strings exercised by the rule-table tests.
            pattern: Regex::new(pattern)
                .unwrap_or_else(|e| panic!("invalid rule pattern {name}: {e}")),
            issue_type,
            severity,
            message,
            suggestion,
        }
    }
}

/// Run every rule against every (index, content) line. Each match emits one
/// issue; a line matching several unrelated rules emits several issues, by
/// design.
pub fn scan_lines(rules: &[PatternRule], file: &str, lines: &[(usize, &str)]) -> Vec<Issue> {
    let mut issues = Vec::new();

    for &(index, content) in lines {
        for rule in rules {
            if rule.pattern.is_match(content) {
                issues.push(Issue {
                    issue_type: rule.issue_type,
                    severity: rule.severity,
                    file: file.to_string(),
                    diff_line: index,
                    message: rule.message.to_string(),
                    suggestion: Some(rule.suggestion.to_string()),
                });
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &'static str, pattern: &str) -> PatternRule {
        PatternRule::new(
            name,
            pattern,
            IssueType::Warning,
            Severity::Medium,
            "matched",
            "fix it",
        )
    }

    #[test]
    fn one_line_can_match_multiple_rules() {
        let rules = vec![rule("a", r"foo"), rule("b", r"bar")];
        let issues = scan_lines(&rules, "x.js", &[(1, "foo bar")]);
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn matches_carry_the_line_index() {
        let rules = vec![rule("a", r"foo")];
        let issues = scan_lines(&rules, "x.js", &[(3, "nothing"), (7, "foo")]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].diff_line, 7);
    }

    #[test]
    fn no_lines_no_issues() {
        let rules = vec![rule("a", r"foo")];
        assert!(scan_lines(&rules, "x.js", &[]).is_empty());
    }
}
