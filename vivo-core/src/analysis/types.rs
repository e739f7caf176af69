//! Wire types and errors for the analysis exchange

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Description used when a failed response carries no `error` field.
pub const GENERIC_FAILURE: &str = "Analysis failed";

#[derive(Debug, Serialize)]
pub(crate) struct AnalyzeRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeResponse {
    pub analysis: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
}

/// Failure of a single analysis exchange.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("analysis text must not be empty")]
    EmptyText,
    #[error("analysis service returned {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("network error calling analysis service: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },
    #[error("analysis service returned invalid response: {reason}")]
    InvalidResponse { reason: String },
}

impl AnalysisError {
    pub fn status(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    pub fn network(source: reqwest::Error) -> Self {
        Self::Network { source }
    }

    pub fn invalid_response(reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            reason: reason.into(),
        }
    }

    /// Short text suitable for showing next to the conversation.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::EmptyText => "Type a question before sending.".to_string(),
            AnalysisError::Status { message, .. } => message.clone(),
            AnalysisError::Network { source } => {
                if source.is_connect() {
                    "Could not reach the analysis service.".to_string()
                } else if source.is_timeout() {
                    "The analysis service took too long to respond.".to_string()
                } else {
                    "Network error while contacting the analysis service.".to_string()
                }
            }
            AnalysisError::InvalidResponse { .. } => {
                "The analysis service returned a response that could not be read.".to_string()
            }
        }
    }
}
