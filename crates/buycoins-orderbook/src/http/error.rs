/*
[INPUT]:  Error sources (HTTP, GraphQL, serialization, configuration)
[OUTPUT]: Structured error types tagged with the failing operation
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Main error type for the BuyCoins client
#[derive(Error, Debug)]
pub enum BuycoinsError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request did not complete within the configured timeout
    #[error("Request timeout after {duration:?}")]
    Timeout { duration: Duration },

    /// Server answered with a non-success status and no GraphQL errors
    #[error("API error (code {code}): {message}")]
    Api { code: u16, message: String },

    /// Server reported one or more GraphQL errors
    #[error("GraphQL error: {}", join_messages(.errors))]
    GraphQl { errors: Vec<GraphQlError> },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure of a named remote operation
    #[error("{operation}: {source}")]
    Operation {
        operation: &'static str,
        #[source]
        source: Box<BuycoinsError>,
    },
}

/// A single entry of a GraphQL `errors` array
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub path: Option<Vec<Value>>,
    #[serde(default)]
    pub extensions: Option<Value>,
}

impl BuycoinsError {
    /// Tag this error with the operation that produced it
    pub fn in_operation(self, operation: &'static str) -> Self {
        BuycoinsError::Operation {
            operation,
            source: Box::new(self),
        }
    }

    /// Name of the failing operation, if the error was tagged
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            BuycoinsError::Operation { operation, .. } => Some(operation),
            _ => None,
        }
    }

    /// Innermost error, skipping operation tags
    pub fn root_cause(&self) -> &BuycoinsError {
        match self {
            BuycoinsError::Operation { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Check if the remote reported GraphQL errors
    pub fn is_graphql_error(&self) -> bool {
        matches!(self.root_cause(), BuycoinsError::GraphQl { .. })
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        match self.root_cause() {
            BuycoinsError::Api { code, .. } => *code == 401 || *code == 403,
            BuycoinsError::GraphQl { errors } => errors.iter().any(|e| {
                let message = e.message.to_ascii_lowercase();
                message.contains("authenticat") || message.contains("unauthorized")
            }),
            _ => false,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        BuycoinsError::Api {
            code: status.as_u16(),
            message: message.into(),
        }
    }
}

fn join_messages(errors: &[GraphQlError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for BuyCoins operations
pub type Result<T> = std::result::Result<T, BuycoinsError>;
