// Export modules for library usage
pub mod cache;
pub mod cli;
pub mod complexity;
pub mod config;
pub mod core;
pub mod detectors;
pub mod duplication;
pub mod engine;
pub mod errors;
pub mod grouping;
pub mod impact;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    AnalysisMetrics, AnalysisResult, ChangeGroup, ChangeType, CommitSummary, FileChange,
    FileStatus, Issue, IssueCounts, IssueType, Severity,
};

pub use crate::cache::{CacheKey, CacheStats, ResultCache};
pub use crate::config::EngineConfig;
pub use crate::engine::AnalysisEngine;
pub use crate::errors::{DiffscopeError, DiffscopeResult};

pub use crate::complexity::{classify_band, complexity_score, ComplexityBand};
pub use crate::duplication::detect_duplication;
pub use crate::grouping::{derive_group_issues, group_changes, infer_change_types};
pub use crate::impact::{categorize, file_impact, total_impact, FileCategory};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
