use std::io;

use thiserror::Error;

/// Errors raised while loading passages or other on-disk inputs.
///
/// The typing session itself never fails; these only surface at startup.
#[derive(Debug, Error)]
pub enum TyperushError {
    #[error("failed to read corpus: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse corpus json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corpus has no passages")]
    EmptyCorpus,

    #[error("passage {index} is blank")]
    BlankPassage { index: usize },

    #[error("builtin corpus {0} not found")]
    MissingBuiltin(String),
}

pub type Result<T> = std::result::Result<T, TyperushError>;
