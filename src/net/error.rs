//! Failure classification for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Transport problems, server rejections, and undecodable bodies are
//! distinct cases: only a 401/403 rejection may invalidate the local
//! session, and only during a user refresh. Everything else surfaces as
//! a user-facing message and leaves session state alone.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::net::types::ApiMessage;

/// Error type for all REST API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("connection failed: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the server rejected the credential itself (expired or
    /// revoked token), as opposed to any other failure.
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, Self::Rejected { status: 401 | 403, .. })
    }

    /// Message suitable for direct display in the UI.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Error al conectar con el servidor".to_owned(),
            Self::Rejected { message, .. } => message.clone(),
            Self::Decode(_) => "Respuesta inválida del servidor".to_owned(),
        }
    }
}

/// Build the `Rejected` variant from a response status and its decoded
/// body, preferring the first field validation message when present.
pub fn rejection(status: u16, body: Option<ApiMessage>) -> ApiError {
    let message = body
        .as_ref()
        .and_then(|msg| {
            msg.first_error()
                .map(ToOwned::to_owned)
                .or_else(|| (!msg.message.is_empty()).then(|| msg.message.clone()))
        })
        .unwrap_or_else(|| format!("request failed: {status}"));
    ApiError::Rejected { status, message }
}
