use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// Failure of a remote call to the offers API.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("request to {path} failed: {source}")]
    Transport {
        path: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{path} returned {status}")]
    Status {
        path: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("could not decode {path} response: {source}")]
    Decode {
        path: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a port number, got {0:?}")]
    Port(String),

    #[error("OFFER_API_URL must be an absolute http(s) URL, got {0:?}")]
    ApiUrl(String),
}

/// A numeric form field that did not parse. Reported, never blocking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input for {field}: {value:?} is not a number")]
pub struct InputIssue {
    pub field: &'static str,
    pub value: String,
}

impl InputIssue {
    pub fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_owned(),
        }
    }
}
