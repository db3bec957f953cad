//! Client-side failures for calls against the activity board API.
//!
//! Every failure ends up as a banner message; nothing here is fatal.

use thiserror::Error;

use crate::api::Mutation;

/// Shown for a rejected mutation when the server gave no `detail`.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Shown in the list area when the catalog cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load activities. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request never completed
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("HTTP error {status}: {}", .detail.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE))]
    Status { status: u16, detail: Option<String> },

    /// A success status whose body did not match the contract
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Text for the message banner after a failed mutation.
    pub fn user_message(&self, mutation: Mutation) -> String {
        match self {
            ClientError::Status { detail, .. } => detail
                .clone()
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
            ClientError::Network(_) | ClientError::Decode(_) => {
                mutation.failure_message().to_string()
            }
        }
    }

    /// Transport and decode failures are logged; application rejections are
    /// ordinary outcomes.
    pub fn is_unexpected(&self) -> bool {
        !matches!(self, ClientError::Status { .. })
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_with_detail_surfaces_detail() {
        let err = ClientError::Status {
            status: 400,
            detail: Some("Student already signed up".to_string()),
        };
        assert_eq!(err.user_message(Mutation::Signup), "Student already signed up");
        assert!(!err.is_unexpected());
    }

    #[test]
    fn test_status_without_detail_uses_generic_text() {
        let err = ClientError::Status {
            status: 500,
            detail: None,
        };
        assert_eq!(err.user_message(Mutation::Unregister), "An error occurred");
        assert_eq!(err.to_string(), "HTTP error 500: An error occurred");
    }

    #[test]
    fn test_network_error_uses_action_message() {
        let err = ClientError::Network("connection refused".to_string());
        assert_eq!(
            err.user_message(Mutation::Signup),
            "Failed to sign up. Please try again."
        );
        assert_eq!(
            err.user_message(Mutation::Unregister),
            "Failed to unregister. Please try again."
        );
        assert!(err.is_unexpected());
    }

    #[test]
    fn test_decode_error_from_serde() {
        let err: ClientError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ClientError::Decode(_)));
        assert_eq!(
            err.user_message(Mutation::Signup),
            "Failed to sign up. Please try again."
        );
    }
}
