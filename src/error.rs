use crate::form::FormError;
use crate::stripe::api_error::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serde JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Form encoding error: {0}")]
    Form(#[from] FormError),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Stripe API error (HTTP {status}): {error}")]
    Api { status: u16, error: Box<ApiError> },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
