use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use thiserror::Error;

/// Outcome of a failed upstream adapter call.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),

    #[error("upstream call timed out after {0:?}")]
    Timeout(Duration),

    #[error("upstream returned {status} for {url}")]
    UpstreamStatus { status: StatusCode, url: String },

    #[error("malformed upstream response: {0}")]
    Parse(String),

    #[error("{service} base url or api key is not configured")]
    Configuration { service: &'static str },
}

impl ClientError {
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            ClientError::Timeout(timeout)
        } else if err.is_decode() {
            ClientError::Parse(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
    pub code: StatusCode,
}

impl Serialize for ApiError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
    {
        let mut state = serializer.serialize_struct("ApiError", 1)?;
        state.serialize_field("error", &self.message)?;
        state.end()
    }
}

impl ApiError {
    pub fn new<S: AsRef<str>>(message: S, code: StatusCode) -> Self {
        Self {
            message: message.as_ref().to_string(),
            code,
        }
    }

    pub fn bad_request<S: AsRef<str>>(message: S) -> Self {
        ApiError::new(message, StatusCode::BAD_REQUEST)
    }

    pub fn not_found<S: AsRef<str>>(message: S) -> Self {
        ApiError::new(message, StatusCode::NOT_FOUND)
    }

    /// Translates an adapter failure into the client-facing envelope. The
    /// adapter detail never reaches the client; `generic` is what it sees.
    pub fn from_client_error<S: AsRef<str>>(err: &ClientError, generic: S) -> Self {
        match err {
            ClientError::Configuration { service } => ApiError::new(
                format!("{} is not configured.", service),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            ClientError::Network(_)
            | ClientError::Timeout(_)
            | ClientError::UpstreamStatus { .. }
            | ClientError::Parse(_) => ApiError::new(generic, StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code, Json(&self)).into_response()
    }
}
