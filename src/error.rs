//! Configuration errors
//!
//! The simulation itself has no failure modes; only loading tuning and level
//! data from outside the binary can go wrong.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid tuning value for `{field}`: {reason}")]
    InvalidTuning { field: &'static str, reason: String },

    #[error("level table is empty")]
    EmptyLevelTable,

    #[error("level {level} has no columns (empty first row)")]
    EmptyLayout { level: usize },
}
