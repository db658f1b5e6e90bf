//! Error types surfaced by the game core.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("position ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },
}

/// A structurally parseable level that breaks the rules of the game.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidLevel {
    #[error("player count: level must contain exactly one player, found {found}")]
    PlayerCount { found: usize },

    #[error(
        "box/goal imbalance: {boxes} boxes vs {goals} goals, counts must match and be at least one"
    )]
    BoxGoalImbalance { boxes: usize, goals: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// `line` and `column` are 1-based.
    #[error("format error at line {line}{}: {reason}", at_column(.column))]
    Format {
        line: usize,
        column: Option<usize>,
        reason: String,
    },

    #[error("invalid level: {0}")]
    Invalid(#[from] InvalidLevel),

    #[error("level {index} does not exist (have {available})")]
    UnknownLevel { index: usize, available: usize },

    #[error("could not read level file {path}: {reason}")]
    Unreadable { path: String, reason: String },
}

impl LevelError {
    pub(crate) fn format(line: usize, column: Option<usize>, reason: impl Into<String>) -> Self {
        LevelError::Format {
            line,
            column,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported save version {found}, expected {expected}")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("corrupted save data: {0}")]
    Corrupted(String),
}

fn at_column(column: &Option<usize>) -> String {
    column.map(|c| format!(", column {c}")).unwrap_or_default()
}
