use crate::errors::{DiffscopeError, DiffscopeResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Thresholds and weights for the analysis engine.
///
/// Defaults reproduce the reference behavior; a TOML file can override any
/// subset of fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Window size (lines) for block duplication detection.
    #[serde(default = "default_duplication_window")]
    pub duplication_window: usize,

    /// Minimum distance between duplicate block starts before flagging.
    #[serde(default = "default_duplication_min_distance")]
    pub duplication_min_distance: usize,

    /// Files in one top-level directory above which the change is flagged
    /// as touching too much of one area.
    #[serde(default = "default_directory_group_threshold")]
    pub directory_group_threshold: usize,

    /// Complexity band upper bounds (inclusive).
    #[serde(default = "default_complexity_low")]
    pub complexity_low: u32,
    #[serde(default = "default_complexity_medium")]
    pub complexity_medium: u32,
    #[serde(default = "default_complexity_high")]
    pub complexity_high: u32,

    /// Coverage metric penalty per issue.
    #[serde(default = "default_coverage_penalty")]
    pub coverage_penalty: f64,

    /// Impact weights by file category.
    #[serde(default = "default_test_weight")]
    pub test_weight: f64,
    #[serde(default = "default_style_weight")]
    pub style_weight: f64,
    #[serde(default = "default_docs_weight")]
    pub docs_weight: f64,

    /// Per-file impact score ceiling applied before summation.
    #[serde(default = "default_impact_cap")]
    pub impact_cap: f64,
}

fn default_duplication_window() -> usize {
    5
}

fn default_duplication_min_distance() -> usize {
    5
}

fn default_directory_group_threshold() -> usize {
    5
}

fn default_complexity_low() -> u32 {
    3
}

fn default_complexity_medium() -> u32 {
    7
}

fn default_complexity_high() -> u32 {
    15
}

fn default_coverage_penalty() -> f64 {
    5.0
}

fn default_test_weight() -> f64 {
    0.5
}

fn default_style_weight() -> f64 {
    0.7
}

fn default_docs_weight() -> f64 {
    0.3
}

fn default_impact_cap() -> f64 {
    100.0
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            duplication_window: default_duplication_window(),
            duplication_min_distance: default_duplication_min_distance(),
            directory_group_threshold: default_directory_group_threshold(),
            complexity_low: default_complexity_low(),
            complexity_medium: default_complexity_medium(),
            complexity_high: default_complexity_high(),
            coverage_penalty: default_coverage_penalty(),
            test_weight: default_test_weight(),
            style_weight: default_style_weight(),
            docs_weight: default_docs_weight(),
            impact_cap: default_impact_cap(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> DiffscopeResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DiffscopeError::Config(format!("failed to read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| {
            DiffscopeError::Config(format!("failed to parse config file {}: {e}", path.display()))
        })?;
        config.validate().map_err(DiffscopeError::Config)?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.duplication_window == 0 {
            return Err("duplication_window must be at least 1".to_string());
        }
        if self.complexity_low > self.complexity_medium
            || self.complexity_medium > self.complexity_high
        {
            return Err("complexity bands must be non-decreasing".to_string());
        }
        for (name, weight) in [
            ("test_weight", self.test_weight),
            ("style_weight", self.style_weight),
            ("docs_weight", self.docs_weight),
        ] {
            if !(0.0..=1.0).contains(&weight) {
                return Err(format!("{name} must be between 0.0 and 1.0"));
            }
        }
        Ok(())
    }
}
