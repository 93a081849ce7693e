//! File impact scoring: change size weighted by what kind of file changed.

use crate::config::EngineConfig;
use crate::core::FileChange;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileCategory {
    Test,
    Style,
    Docs,
    Code,
}

/// Categorize a file by its path. Tests and styling weigh less than code;
/// documentation weighs least.
pub fn categorize(path: &str) -> FileCategory {
    let lower = path.to_lowercase();

    if lower.contains("test") || lower.contains("spec") || lower.contains("__mocks__") {
        FileCategory::Test
    } else if lower.ends_with(".css")
        || lower.ends_with(".scss")
        || lower.ends_with(".less")
        || lower.ends_with(".sass")
    {
        FileCategory::Style
    } else if lower.ends_with(".md")
        || lower.ends_with(".rst")
        || lower.ends_with(".txt")
        || lower.starts_with("docs/")
    {
        FileCategory::Docs
    } else {
        FileCategory::Code
    }
}

fn category_weight(category: FileCategory, config: &EngineConfig) -> f64 {
    match category {
        FileCategory::Test => config.test_weight,
        FileCategory::Style => config.style_weight,
        FileCategory::Docs => config.docs_weight,
        FileCategory::Code => 1.0,
    }
}

/// One file's impact: `(additions + deletions) / 10` times its category
/// weight, capped per file.
pub fn file_impact(file: &FileChange, config: &EngineConfig) -> f64 {
    let raw = f64::from(file.additions + file.deletions) / 10.0;
    let weighted = raw * category_weight(categorize(&file.path), config);
    weighted.min(config.impact_cap)
}

/// Sum of per-file impact scores; feeds the result's complexity metric.
pub fn total_impact(files: &[FileChange], config: &EngineConfig) -> f64 {
    files.iter().map(|f| file_impact(f, config)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FileStatus;

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    #[test]
    fn paths_categorize_by_suffix_and_substring() {
        assert_eq!(categorize("src/engine.ts"), FileCategory::Code);
        assert_eq!(categorize("src/engine.test.ts"), FileCategory::Test);
        assert_eq!(categorize("tests/helpers.js"), FileCategory::Test);
        assert_eq!(categorize("src/theme/dark.scss"), FileCategory::Style);
        assert_eq!(categorize("README.md"), FileCategory::Docs);
        assert_eq!(categorize("docs/setup.adoc"), FileCategory::Docs);
    }

    #[test]
    fn ten_changed_lines_of_code_score_one() {
        let file = FileChange::new("src/engine.ts", FileStatus::Modified).with_counts(6, 4);
        assert_eq!(file_impact(&file, &config()), 1.0);
    }

    #[test]
    fn category_weights_scale_the_score() {
        let config = config();
        let test = FileChange::new("src/a.test.ts", FileStatus::Modified).with_counts(10, 0);
        let docs = FileChange::new("README.md", FileStatus::Modified).with_counts(10, 0);

        assert_eq!(file_impact(&test, &config), 0.5);
        assert!((file_impact(&docs, &config) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn per_file_score_is_capped_before_summation() {
        let config = config();
        let huge = FileChange::new("src/gen.ts", FileStatus::Added).with_counts(50_000, 0);
        assert_eq!(file_impact(&huge, &config), 100.0);

        let files = vec![
            FileChange::new("src/gen.ts", FileStatus::Added).with_counts(50_000, 0),
            FileChange::new("src/b.ts", FileStatus::Modified).with_counts(10, 0),
        ];
        assert_eq!(total_impact(&files, &config), 101.0);
    }
}
