use serde::Deserialize;

use crate::error::{ClientError, ClientResult};

// ============================================================================
// Endpoints
// ============================================================================

/// `GET` — the full activity catalog.
pub fn activities_url(base: &str) -> String {
    format!("{}/activities", base)
}

/// `POST` — add `email` to `activity`.
pub fn signup_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/signup?email={}",
        base,
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

/// `DELETE` — remove `email` from `activity`.
pub fn unregister_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/unregister?email={}",
        base,
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

// ============================================================================
// Mutation API Types
// ============================================================================

/// The two participant-changing calls. Both share one response contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Signup,
    Unregister,
}

impl Mutation {
    pub fn url(self, base: &str, activity: &str, email: &str) -> String {
        match self {
            Mutation::Signup => signup_url(base, activity, email),
            Mutation::Unregister => unregister_url(base, activity, email),
        }
    }

    /// Shown when the request never produced a usable response.
    pub fn failure_message(self) -> &'static str {
        match self {
            Mutation::Signup => "Failed to sign up. Please try again.",
            Mutation::Unregister => "Failed to unregister. Please try again.",
        }
    }
}

/// Body of a successful signup or unregister. A 2xx without `message` still
/// counts as success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Body of a rejected signup or unregister. `detail` may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorDetail {
    /// Pull `detail` out of a failed response body; anything that is not the
    /// expected JSON shape counts as no detail.
    pub fn from_body(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorDetail>(body)
            .ok()
            .and_then(|parsed| parsed.detail)
    }
}

/// Turn a completed mutation response into its outcome. Non-2xx statuses are
/// rejections carrying the server's `detail`; a 2xx body must be JSON.
pub fn classify_mutation(status: u16, body: &str) -> ClientResult<MessageResponse> {
    if !(200..300).contains(&status) {
        return Err(ClientError::Status {
            status,
            detail: ErrorDetail::from_body(body),
        });
    }

    Ok(serde_json::from_str(body)?)
}
