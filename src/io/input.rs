//! JSON change-set input for the CLI.
//!
//! The provider client (out of scope here) exports the same shape: changed
//! files with their diff bodies plus commit summaries.

use crate::core::{CommitSummary, FileChange};
use crate::errors::{DiffscopeError, DiffscopeResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChangeSet {
    pub files: Vec<FileChange>,
    #[serde(default)]
    pub commits: Vec<CommitSummary>,
}

impl ChangeSet {
    pub fn from_json_file(path: &Path) -> DiffscopeResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DiffscopeError::Input(format!("failed to read change set {}: {e}", path.display()))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            DiffscopeError::Input(format!("failed to parse change set {}: {e}", path.display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::io::Write;

    #[test]
    fn parses_a_minimal_change_set() {
        let json = indoc! {r#"
            {
              "files": [
                {
                  "path": "src/a.ts",
                  "status": "modified",
                  "additions": 3,
                  "deletions": 1,
                  "content": "+let x = 1;\n-let x = 0;"
                }
              ],
              "commits": [
                { "message": "fix: off by one", "additions": 3, "deletions": 1 }
              ]
            }
        "#};

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let set = ChangeSet::from_json_file(file.path()).unwrap();
        assert_eq!(set.files.len(), 1);
        assert_eq!(set.commits.len(), 1);
        assert_eq!(set.files[0].additions, 3);
    }

    #[test]
    fn commits_are_optional() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"files": []}"#).unwrap();

        let set = ChangeSet::from_json_file(file.path()).unwrap();
        assert!(set.commits.is_empty());
    }

    #[test]
    fn bad_json_reports_the_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();

        let err = ChangeSet::from_json_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("parse"));
        assert!(matches!(err, DiffscopeError::Input(_)));
    }
}
