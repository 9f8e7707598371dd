//! Error types for the remote gateway.
//!
//! # Design
//! Every non-2xx status collapses into `Status`, whose display text is the
//! single user-facing failure message. The raw status and body stay on the
//! variant for logs. Transport and decoding failures display their own text,
//! which is what ends up in the alert.

use thiserror::Error;

/// Message shown to the user whenever the server answers with a non-2xx status.
pub const SERVER_FAILURE_MESSAGE: &str = "Failed to connect with the server! Please try later.";

/// Errors returned by `TodoClient` parse methods and `RemoteGateway` calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connect, DNS, I/O).
    #[error("{0}")]
    Transport(String),

    /// The server returned a non-2xx status.
    #[error("Failed to connect with the server! Please try later.")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
