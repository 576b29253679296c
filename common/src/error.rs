use serde_json::Value;
use thiserror::Error;

/// Failure of a call against the remote store or its auth API.
///
/// The `Display` output is the raw message reported by the remote side and
/// is what alerts and banners show after their prefix.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RemoteError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("{0}")]
    Network(String),

    /// The remote side answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Sign-in succeeded but the account has not confirmed its email yet.
    #[error("Email not verified. Please check your email for the verification link.")]
    Unverified,
}

impl RemoteError {
    /// Builds an `Api` error from a failed response, pulling the message out
    /// of the JSON error body when there is one.
    pub fn from_response(status: u16, body: &str) -> Self {
        RemoteError::Api {
            status,
            message: extract_message(status, body),
        }
    }

    /// Raw text shown to the user after an alert or banner prefix.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, RemoteError::Api { status: 401 | 403, .. })
    }
}

impl From<serde_json::Error> for RemoteError {
    fn from(err: serde_json::Error) -> Self {
        RemoteError::Decode(err.to_string())
    }
}

/// Keys checked in order; PostgREST uses `message`, the auth API uses the
/// others depending on the endpoint.
const MESSAGE_KEYS: [&str; 4] = ["message", "msg", "error_description", "error"];

fn extract_message(status: u16, body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in MESSAGE_KEYS {
            if let Some(Value::String(message)) = map.get(key) {
                if !message.trim().is_empty() {
                    return message.clone();
                }
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status)
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postgrest_message_is_used_verbatim() {
        let body = r#"{"code":"22P02","details":null,"hint":null,"message":"invalid input syntax for type bigint: \"abc\""}"#;
        let err = RemoteError::from_response(400, body);
        assert_eq!(
            err.to_string(),
            "invalid input syntax for type bigint: \"abc\""
        );
    }

    #[test]
    fn auth_error_keys_are_checked_in_order() {
        let err = RemoteError::from_response(
            400,
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        );
        assert_eq!(err.to_string(), "Invalid login credentials");

        let err = RemoteError::from_response(422, r#"{"code":422,"msg":"Password should be at least 6 characters"}"#);
        assert_eq!(err.to_string(), "Password should be at least 6 characters");
    }

    #[test]
    fn falls_back_to_body_then_status() {
        assert_eq!(
            RemoteError::from_response(502, "Bad Gateway").to_string(),
            "Bad Gateway"
        );
        assert_eq!(RemoteError::from_response(404, "  ").to_string(), "HTTP 404");
    }

    #[test]
    fn unauthorized_statuses() {
        assert!(RemoteError::from_response(401, "").is_unauthorized());
        assert!(RemoteError::from_response(403, "").is_unauthorized());
        assert!(!RemoteError::from_response(500, "").is_unauthorized());
        assert!(!RemoteError::Network("offline".into()).is_unauthorized());
    }

    #[test]
    fn message_is_the_display_text() {
        assert_eq!(
            RemoteError::Network("Failed to fetch".into()).message(),
            "Failed to fetch"
        );
        assert_eq!(
            RemoteError::Unverified.message(),
            "Email not verified. Please check your email for the verification link."
        );
    }
}
