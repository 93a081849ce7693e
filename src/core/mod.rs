pub mod diff;

use serde::{Deserialize, Serialize};

/// Status of a single file within a proposed change.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Added,
    Modified,
    Removed,
    Renamed,
}

/// One changed file as reported by the hosting provider.
///
/// `content` holds the unified-diff body for the file (lines prefixed with
/// `+`, `-` or a space). A missing or empty body means the file contributes
/// no per-line issues; it is never an error.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FileChange {
    pub path: String,
    pub status: FileStatus,
    #[serde(default)]
    pub additions: u32,
    #[serde(default)]
    pub deletions: u32,
    #[serde(default)]
    pub changes: u32,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub previous_path: Option<String>,
}

impl FileChange {
    pub fn new(path: impl Into<String>, status: FileStatus) -> Self {
        Self {
            path: path.into(),
            status,
            additions: 0,
            deletions: 0,
            changes: 0,
            content: None,
            previous_path: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_counts(mut self, additions: u32, deletions: u32) -> Self {
        self.additions = additions;
        self.deletions = deletions;
        self.changes = additions + deletions;
        self
    }
}

/// Commit metadata used only for change-type inference.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CommitSummary {
    pub message: String,
    #[serde(default)]
    pub additions: u32,
    #[serde(default)]
    pub deletions: u32,
}

/// Kind of change a commit message describes.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Feature,
    Fix,
    Refactor,
    Test,
    Docs,
    Chore,
    Perf,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    Error,
    Warning,
    Suggestion,
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IssueType::Error => "error",
            IssueType::Warning => "warning",
            IssueType::Suggestion => "suggestion",
        };
        write!(f, "{s}")
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        };
        write!(f, "{s}")
    }
}

/// A single finding emitted by a detector.
///
/// `diff_line` is a position within the supplied diff text (for duplication,
/// the index into the file's added lines), NOT a reconstructed line number in
/// the file on disk. The engine never parses hunk headers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub severity: Severity,
    pub file: String,
    pub diff_line: usize,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// A named partition of the changed-file set. Internal to the grouper;
/// only the issues derived from groups survive into the result.
#[derive(Clone, Debug)]
pub struct ChangeGroup {
    pub name: String,
    pub description: String,
    /// Indices into the caller-supplied file slice.
    pub files: Vec<usize>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueCounts {
    pub errors: usize,
    pub warnings: usize,
    pub suggestions: usize,
}

impl IssueCounts {
    pub fn tally(issues: &[Issue]) -> Self {
        issues.iter().fold(Self::default(), |mut acc, issue| {
            match issue.issue_type {
                IssueType::Error => acc.errors += 1,
                IssueType::Warning => acc.warnings += 1,
                IssueType::Suggestion => acc.suggestions += 1,
            }
            acc
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnalysisMetrics {
    pub complexity: f64,
    /// `100 - 5 * issue_count`. Deliberately not clamped at zero; a change
    /// with more than twenty findings goes negative. Downstream consumers
    /// rely on the raw value for trend deltas.
    pub coverage: f64,
    pub duplications: u32,
    pub issues: IssueCounts,
}

/// The engine's only output: every issue plus the derived metrics.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub issues: Vec<Issue>,
    pub metrics: AnalysisMetrics,
}
