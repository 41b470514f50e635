//! Error types for plan resolution and validation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlanError>;

#[derive(Debug, Error)]
pub enum PlanError {
    // Invocation errors (fatal, no defaulting)
    #[error("unrecognized mode: {0:?} (expected \"development\" or \"production\")")]
    UnrecognizedMode(String),

    // Construction-time structure errors
    #[error("rules #{first} and #{second} both claim extension .{extension}")]
    OverlappingRules {
        extension: String,
        first: usize,
        second: usize,
    },

    #[error("rule for .{rule} references loader {loader:?} but no registered stage provides it")]
    MissingStage { loader: String, rule: String },

    #[error("stage {stage:?} violates ordering constraint: {constraint}")]
    StageOrdering { stage: String, constraint: String },

    // Plan serialization errors
    #[error("plan serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
