//! Error types for the inference and merge engine

use std::io;

/// Errors raised by forge-core operations
///
/// "No applicable default" is never an error: inference returns `Option`
/// and merges return a changed flag. Errors are reserved for user-facing
/// validation failures and for callers breaking a structural contract.
#[derive(Debug, thiserror::Error)]
pub enum ForgeError {
    /// A command precondition failed (e.g. the target file already exists)
    #[error("{0}")]
    Validation(String),

    /// The caller handed over a structurally invalid model or argument
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Template error: {0}")]
    Template(String),
}

impl ForgeError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn contract(msg: impl Into<String>) -> Self {
        Self::ContractViolation(msg.into())
    }

    /// Whether this error should be shown to the user as a command failure
    /// rather than aborting the caller
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type alias for forge-core operations
pub type Result<T> = std::result::Result<T, ForgeError>;
