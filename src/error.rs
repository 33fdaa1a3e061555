use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutlayError {
    #[error("Database error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Format(String),

    #[error("{0}")]
    Validation(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, OutlayError>;
