use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZametkiError {
    #[error("Note not found: {0}")]
    NoteNotFound(u64),

    #[error("{0}")]
    Other(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ZametkiError>;
