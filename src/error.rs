use thiserror::Error;

#[derive(Error, Debug)]
pub enum DebugUtilsError {
    #[error("Failed to read targets: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid target list: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DebugUtilsError>;
