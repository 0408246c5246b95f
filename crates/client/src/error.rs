#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("invalid base url: {0:?}")]
    InvalidBaseUrl(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("expected status {expected}, got {actual}")]
    Status { expected: u16, actual: u16 },

    #[error("expected body {expected:?}, got {actual:?}")]
    Body { expected: String, actual: String },
}

pub type CheckResult<T> = std::result::Result<T, CheckError>;
