//! Block-level duplication over a file's added lines.
//!
//! Exact-match only: a fixed window slides over the trimmed, non-empty added
//! lines and each window is digested with SHA-256. A digest recurring far
//! enough from its anchor flags the later block.

use crate::config::EngineConfig;
use crate::core::{Issue, IssueType, Severity};
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Detect repeated blocks of added lines. `diff_line` on the emitted issue
/// is the window's starting index within the added-line list, pointing at
/// the later occurrence.
pub fn detect_duplication(
    file: &str,
    added: &[(usize, &str)],
    config: &EngineConfig,
) -> Vec<Issue> {
    let window = config.duplication_window;
    let lines: Vec<&str> = added
        .iter()
        .map(|(_, content)| content.trim())
        .filter(|content| !content.is_empty())
        .collect();

    if lines.len() < window {
        return Vec::new();
    }

    let mut anchors: HashMap<String, usize> = HashMap::new();
    let mut issues = Vec::new();

    for start in 0..=lines.len() - window {
        let digest = block_digest(&lines[start..start + window]);

        match anchors.get(&digest) {
            None => {
                anchors.insert(digest, start);
            }
            Some(&anchor) if start - anchor > config.duplication_min_distance => {
                issues.push(Issue {
                    issue_type: IssueType::Suggestion,
                    severity: Severity::Medium,
                    file: file.to_string(),
                    diff_line: start,
                    message: format!(
                        "Duplicated block of {window} added lines (first seen at added line {anchor})"
                    ),
                    suggestion: Some("Extract the repeated block into a shared function".to_string()),
                });
                // Re-anchor so trailing near-copies are not re-reported.
                anchors.insert(digest, start);
            }
            // Within the adjacency distance: overlapping or trivially close,
            // keep the existing anchor.
            Some(_) => {}
        }
    }

    issues
}

fn block_digest(lines: &[&str]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(lines.join("\n").as_bytes());
    format!("{:x}", hasher.finalize())
}
