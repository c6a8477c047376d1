use thiserror::Error;

/// シード処理の統一エラー型
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Backend API error: {message} (status: {status})")]
    Api { status: u16, message: String },

    #[error("Backend is not running at {0}! Start it with: cargo run --bin backend-server")]
    BackendUnavailable(String),

    #[error("Backend is not healthy! (status: {status})")]
    BackendUnhealthy { status: u16 },

    #[error("Invalid source file: {0}")]
    InvalidSource(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SeedError>;
