use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Fixture error: {0}")]
    Fixture(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

pub type Result<T> = std::result::Result<T, DeskError>;

impl From<std::io::Error> for DeskError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for DeskError {
    fn from(err: serde_json::Error) -> Self {
        Self::Fixture(err.to_string())
    }
}
