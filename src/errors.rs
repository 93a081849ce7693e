//! Typed errors for library callers. The engine itself never fails; these
//! cover the loading edges around it. Report writers keep `anyhow::Result`
//! since they only fail on the caller's `Write` sink.

#[derive(Debug, thiserror::Error)]
pub enum DiffscopeError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("input error: {0}")]
    Input(String),
}

/// Result type alias
pub type DiffscopeResult<T> = Result<T, DiffscopeError>;
