//! Change grouping and commit change-type inference.
//!
//! Groups partition the changed-file set by status and top-level directory;
//! only the summary issues derived from them reach the result. Change types
//! come from a conventional-commit prefix first, then substring fallbacks.

use crate::config::EngineConfig;
use crate::core::{ChangeGroup, ChangeType, CommitSummary, FileChange, FileStatus, Issue, IssueType, Severity};
use std::collections::BTreeMap;

/// Partition files into addition/removal groups plus one group per
/// top-level directory holding more than one changed file.
pub fn group_changes(files: &[FileChange]) -> Vec<ChangeGroup> {
    let mut groups = Vec::new();

    let added: Vec<usize> = indices_with_status(files, FileStatus::Added);
    if !added.is_empty() {
        groups.push(ChangeGroup {
            name: "addition".to_string(),
            description: "Newly added files".to_string(),
            files: added,
        });
    }

    let removed: Vec<usize> = indices_with_status(files, FileStatus::Removed);
    if !removed.is_empty() {
        groups.push(ChangeGroup {
            name: "removal".to_string(),
            description: "Deleted files".to_string(),
            files: removed,
        });
    }

    // BTreeMap keeps directory group order stable across runs.
    let mut by_dir: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (i, file) in files.iter().enumerate() {
        if let Some(dir) = top_level_dir(&file.path) {
            by_dir.entry(dir).or_default().push(i);
        }
    }
    for (dir, members) in by_dir {
        if members.len() > 1 {
            groups.push(ChangeGroup {
                name: format!("directory:{dir}"),
                description: format!("Changes under {dir}/"),
                files: members,
            });
        }
    }

    groups
}

fn indices_with_status(files: &[FileChange], status: FileStatus) -> Vec<usize> {
    files
        .iter()
        .enumerate()
        .filter(|(_, f)| f.status == status)
        .map(|(i, _)| i)
        .collect()
}

fn top_level_dir(path: &str) -> Option<&str> {
    let dir = path.split('/').next()?;
    (dir != path).then_some(dir)
}

/// Summary issues over the whole change: overly concentrated directories and
/// feature work without accompanying tests.
pub fn derive_group_issues(
    files: &[FileChange],
    commits: &[CommitSummary],
    config: &EngineConfig,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    for group in group_changes(files) {
        let Some(dir) = group.name.strip_prefix("directory:") else {
            continue;
        };
        if group.files.len() > config.directory_group_threshold {
            issues.push(Issue {
                issue_type: IssueType::Warning,
                severity: Severity::Medium,
                file: format!("{dir}/"),
                diff_line: 0,
                message: format!(
                    "Change touches too many files ({}) under {dir}/",
                    group.files.len()
                ),
                suggestion: Some("Split the change into smaller, focused reviews".to_string()),
            });
        }
    }

    let types = infer_change_types(commits);
    let has_tests = files.iter().any(|f| {
        let lower = f.path.to_lowercase();
        lower.contains("test") || lower.contains("spec")
    });
    if types.contains(&ChangeType::Feature) && !has_tests {
        issues.push(Issue {
            issue_type: IssueType::Suggestion,
            severity: Severity::Medium,
            file: String::new(),
            diff_line: 0,
            message: "Feature change contains no test files".to_string(),
            suggestion: Some("Add tests covering the new behavior".to_string()),
        });
    }

    issues
}

/// Infer the change types described by the commit messages. Deduplicated,
/// in first-seen order.
pub fn infer_change_types(commits: &[CommitSummary]) -> Vec<ChangeType> {
    let mut types = Vec::new();
    for commit in commits {
        let inferred = infer_one(&commit.message);
        if !types.contains(&inferred) {
            types.push(inferred);
        }
    }
    types
}

fn infer_one(message: &str) -> ChangeType {
    let lower = message.to_lowercase();

    // Conventional-commit prefix, with or without a scope.
    if let Some(prefix) = lower.split([':', '(']).next() {
        match prefix.trim() {
            "feat" | "feature" => return ChangeType::Feature,
            "fix" | "bugfix" | "hotfix" => return ChangeType::Fix,
            "refactor" => return ChangeType::Refactor,
            "test" | "tests" => return ChangeType::Test,
            "docs" | "doc" => return ChangeType::Docs,
            "chore" | "build" | "ci" => return ChangeType::Chore,
            "perf" => return ChangeType::Perf,
            _ => {}
        }
    }

    // Substring fallbacks, most specific first.
    if lower.contains("refactor") {
        ChangeType::Refactor
    } else if lower.contains("perf") || lower.contains("optimiz") {
        ChangeType::Perf
    } else if lower.contains("test") {
        ChangeType::Test
    } else if lower.contains("doc") {
        ChangeType::Docs
    } else if lower.contains("fix") {
        ChangeType::Fix
    } else if lower.contains("add") || lower.contains("implement") || lower.contains("feature") {
        ChangeType::Feature
    } else {
        ChangeType::Chore
    }
}
