use serde_json::Value;
use thiserror::Error;

use crate::types::ApiError;

#[derive(Error, Debug)]
pub enum GoCardlessError {
    #[error("{0}")]
    Configuration(String),

    #[error("Missing url")]
    MissingUrl,

    #[error("Missing body")]
    MissingBody,

    /// The server answered with a non-success status. `body` keeps whatever
    /// payload came back with it so callers can inspect the API error.
    #[error("Request failed with status code {status}")]
    Request { status: u16, body: Option<Value> },

    #[error(transparent)]
    Network(#[from] reqwest::Error),

    #[error("invalid form field {field}: {source}")]
    InvalidForm {
        field: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GoCardlessError {
    /// HTTP status of a failed request, if the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for argument errors raised before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingUrl | Self::MissingBody)
    }

    /// Decode the GoCardless error envelope carried by a failed request.
    pub fn api_error(&self) -> Option<ApiError> {
        match self {
            Self::Request {
                body: Some(body), ..
            } => ApiError::from_envelope(body),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GoCardlessError>;
