#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Generative service credential is not configured")]
    MissingCredential,

    #[error("Generative service returned {status}: {message}")]
    Service { status: u16, message: String },

    #[error("Malformed service response: {0}")]
    MalformedResponse(String),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
