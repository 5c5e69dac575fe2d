use thiserror::Error;

#[derive(Error, Debug)]
pub enum VocabError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("character not in vocabulary: {0:?}")]
    CharNotFound(char),

    #[error("id not in vocabulary: {0}")]
    IdNotFound(u32),
}

pub type Result<T> = std::result::Result<T, VocabError>;
