//! Heuristic cyclomatic complexity over a file's added lines.
//!
//! One base path plus one per decision point found lexically. This is a
//! branching-density proxy for newly introduced code, not a control-flow
//! graph computation and not whole-function complexity.

use crate::config::EngineConfig;
use crate::core::{Issue, IssueType, Severity};
use once_cell::sync::Lazy;
use regex::Regex;

static DECISION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\bif\b",
        r"\bswitch\b",
        r"\bcase\b",
        r"\bfor\b",
        r"\bwhile\b",
        r"\bdo\b",
        r"\bcatch\b",
        r"&&",
        r"\|\|",
        // Ternary; `?.` and `?:` type annotations are excluded, `??` still
        // counts once, which is acceptable noise for a lexical counter.
        r"\?[^.?:]",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("invalid decision pattern"))
    .collect()
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComplexityBand {
    Low,
    Medium,
    High,
    Critical,
}

/// Count decision points across added lines, starting from the single base
/// path. Sixteen `&&` on one line score 17.
pub fn complexity_score(added: &[(usize, &str)]) -> u32 {
    let decisions: usize = added
        .iter()
        .map(|(_, content)| {
            DECISION_PATTERNS
                .iter()
                .map(|p| p.find_iter(content).count())
                .sum::<usize>()
        })
        .sum();

    1 + decisions as u32
}

pub fn classify_band(score: u32, config: &EngineConfig) -> ComplexityBand {
    if score <= config.complexity_low {
        ComplexityBand::Low
    } else if score <= config.complexity_medium {
        ComplexityBand::Medium
    } else if score <= config.complexity_high {
        ComplexityBand::High
    } else {
        ComplexityBand::Critical
    }
}

/// Score a file's added lines and emit the file-level issue for the high
/// and critical bands. Returns (score, band, issues).
pub fn assess_complexity(
    file: &str,
    added: &[(usize, &str)],
    config: &EngineConfig,
) -> (u32, ComplexityBand, Vec<Issue>) {
    let score = complexity_score(added);
    let band = classify_band(score, config);

    let issues = match band {
        ComplexityBand::Critical => vec![Issue {
            issue_type: IssueType::Error,
            severity: Severity::High,
            file: file.to_string(),
            diff_line: 0,
            message: format!("Added code has critical complexity (score {score})"),
            suggestion: Some(
                "Decompose the change into smaller functions with single responsibilities"
                    .to_string(),
            ),
        }],
        ComplexityBand::High => vec![Issue {
            issue_type: IssueType::Warning,
            severity: Severity::Medium,
            file: file.to_string(),
            diff_line: 0,
            message: format!("Added code has high complexity (score {score})"),
            suggestion: Some("Consider extracting helper functions".to_string()),
        }],
        ComplexityBand::Low | ComplexityBand::Medium => Vec::new(),
    };

    (score, band, issues)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    #[test]
    fn empty_added_lines_score_the_base_path() {
        assert_eq!(complexity_score(&[]), 1);
    }

    #[test]
    fn counts_branches_loops_and_operators() {
        let added = [
            (1, "if (a) {"),
            (2, "for (let i = 0; i < n; i++) {"),
            (3, "} catch (e) {"),
            (4, "const x = a && b;"),
        ];
        // if + for + catch + && = 4 decisions.
        assert_eq!(complexity_score(&added), 5);
    }

    #[test]
    fn sixteen_operators_on_one_line_hit_critical() {
        let line = "const ok = a".to_string() + &" && b".repeat(16) + ";";
        let added = [(1, line.as_str())];

        let (score, band, issues) = assess_complexity("guard.js", &added, &config());
        assert_eq!(score, 17);
        assert_eq!(band, ComplexityBand::Critical);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue_type, IssueType::Error);
        assert_eq!(issues[0].severity, Severity::High);
    }

    #[test]
    fn band_boundaries_are_inclusive() {
        let config = config();
        assert_eq!(classify_band(3, &config), ComplexityBand::Low);
        assert_eq!(classify_band(4, &config), ComplexityBand::Medium);
        assert_eq!(classify_band(7, &config), ComplexityBand::Medium);
        assert_eq!(classify_band(8, &config), ComplexityBand::High);
        assert_eq!(classify_band(15, &config), ComplexityBand::High);
        assert_eq!(classify_band(16, &config), ComplexityBand::Critical);
    }

    #[test]
    fn high_band_emits_a_warning_not_an_error() {
        let line = "a".to_string() + &" || b".repeat(9);
        let added = [(1, line.as_str())];

        let (score, band, issues) = assess_complexity("guard.js", &added, &config());
        assert_eq!(score, 10);
        assert_eq!(band, ComplexityBand::High);
        assert_eq!(issues[0].issue_type, IssueType::Warning);
    }

    #[test]
    fn low_complexity_emits_no_issue() {
        let added = [(1, "return items.length;")];
        let (_, band, issues) = assess_complexity("util.js", &added, &config());
        assert_eq!(band, ComplexityBand::Low);
        assert!(issues.is_empty());
    }
}
