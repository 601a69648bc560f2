use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordfitError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Font Error: {0}")]
    Font(String),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type WfResult<T> = Result<T, WordfitError>;
