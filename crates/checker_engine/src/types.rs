use serde_json::Value;
use thiserror::Error;

/// Completion of one scan request, delivered on the handle's event channel.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanEvent {
    CheckFinished { result: Result<Value, CheckError> },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CheckError {
    pub kind: CheckFailure,
    pub message: String,
}

impl CheckError {
    pub(crate) fn new(kind: CheckFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckFailure {
    /// Response received with a non-success status. `server_message` is
    /// the `error` field of the body when the endpoint supplied one.
    #[error("http status {status}")]
    HttpStatus {
        status: u16,
        server_message: Option<String>,
    },
    #[error("timeout")]
    Timeout,
    #[error("network error")]
    Network,
    /// Success-range response whose body could not be parsed as JSON.
    #[error("malformed response body")]
    MalformedBody,
}
