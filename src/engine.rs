//! The analysis engine: runs every detector over a change's files, merges
//! their findings with the summary heuristics, derives metrics, and memoizes
//! the result per (change key, branch).

use crate::cache::{CacheKey, CacheStats, ResultCache};
use crate::complexity::assess_complexity;
use crate::config::EngineConfig;
use crate::core::diff::{added_lines, classify, removed_lines};
use crate::core::{
    AnalysisMetrics, AnalysisResult, CommitSummary, FileChange, Issue, IssueCounts,
};
use crate::detectors::performance::detect_performance_issues;
use crate::detectors::security::detect_security_issues;
use crate::detectors::structure::detect_breaking_changes;
use crate::duplication::detect_duplication;
use crate::grouping::derive_group_issues;
use crate::impact::total_impact;
use std::sync::Arc;

pub struct AnalysisEngine {
    config: EngineConfig,
    cache: ResultCache,
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            cache: ResultCache::new(),
        }
    }

    /// Analyze one change. Repeated calls with the same key return the same
    /// `Arc` without re-running any detector, until the key is invalidated.
    pub fn analyze(
        &self,
        change_key: &str,
        branch: &str,
        files: &[FileChange],
        commits: &[CommitSummary],
    ) -> Arc<AnalysisResult> {
        let key = CacheKey::new(change_key, branch);
        self.cache
            .get_or_compute(key, || self.run_analysis(files, commits))
    }

    /// Drop the cached result for one change.
    pub fn invalidate(&self, change_key: &str, branch: &str) {
        self.cache.invalidate(&CacheKey::new(change_key, branch));
    }

    /// Drop every cached result.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    fn run_analysis(&self, files: &[FileChange], commits: &[CommitSummary]) -> AnalysisResult {
        log::debug!("analyzing {} files, {} commits", files.len(), commits.len());

        let mut issues = Vec::new();
        for file in files {
            issues.extend(self.analyze_file(file));
        }
        issues.extend(derive_group_issues(files, commits, &self.config));

        let metrics = self.derive_metrics(files, &issues);
        AnalysisResult { issues, metrics }
    }

    /// Per-file pipeline. A missing or empty diff body contributes nothing;
    /// that is the degraded path, not an error.
    fn analyze_file(&self, file: &FileChange) -> Vec<Issue> {
        let Some(content) = file.content.as_deref().filter(|c| !c.is_empty()) else {
            log::trace!("{}: no diff content, skipping", file.path);
            return Vec::new();
        };

        let lines = classify(content);
        let added = added_lines(&lines);
        let removed = removed_lines(&lines);

        let mut issues = detect_security_issues(&file.path, &added);
        issues.extend(detect_performance_issues(&file.path, &added));
        issues.extend(detect_breaking_changes(&file.path, &removed));

        let (score, band, complexity_issues) =
            assess_complexity(&file.path, &added, &self.config);
        log::trace!("{}: complexity {score} ({band:?})", file.path);
        issues.extend(complexity_issues);

        issues.extend(detect_duplication(&file.path, &added, &self.config));
        issues
    }

    fn derive_metrics(&self, files: &[FileChange], issues: &[Issue]) -> AnalysisMetrics {
        AnalysisMetrics {
            complexity: total_impact(files, &self.config),
            // Unclamped on purpose; see the field docs on AnalysisMetrics.
            coverage: 100.0 - self.config.coverage_penalty * issues.len() as f64,
            duplications: (files.len() as u32 * 20).min(100),
            issues: IssueCounts::tally(issues),
        }
    }
}
