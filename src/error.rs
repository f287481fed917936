//! Error types.

use std::path::PathBuf;

/// Why a move was rejected by a rules engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("no {side} piece at ({row}, {col})")]
    NotOwnPiece {
        side: crate::core::Side,
        row: usize,
        col: usize,
    },

    #[error("square ({row}, {col}) is already taken")]
    Occupied { row: usize, col: usize },

    #[error("pawns move one row forward, or capture one row diagonally forward")]
    IllegalStep,
}

/// Malformed text from the human. Recovered by asking again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("expected {expected} numbers, got {found}")]
    TokenCount { expected: usize, found: usize },

    #[error("'{0}' is not a board coordinate")]
    NotNumeric(String),
}

/// Failure building a board or state key from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected 9 cells, got {0}")]
    Length(usize),

    #[error("unknown glyph '{0}'")]
    UnknownGlyph(char),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Errors that end a game session.
///
/// Illegal moves and malformed input never surface here; only a frontend that
/// can no longer talk to the human does.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed")]
    InputClosed,
}
