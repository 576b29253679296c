//! Login and sign-up rules that sit on top of the auth API.

use crate::error::RemoteError;
use crate::model::session::{AuthUser, UserMetadata};
use crate::pages::{query_param, Page};

pub const SIGN_UP_SUCCESS: &str = "🎉 Account created! Please check your email (including spam folder) for a verification link. You must verify your email before you can login.";
pub const LOGIN_SUCCESS: &str = "✅ Login successful! Redirecting...";
pub const EMAIL_VERIFIED: &str = "✅ Email verified successfully! You can now login.";

const INVALID_CREDENTIALS: &str = "Invalid email or password. Please try again.";
const NOT_VERIFIED: &str =
    "Email not verified. Please check your email for the verification link.";

/// Fields of the registration form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl SignUpForm {
    pub fn metadata(&self) -> UserMetadata {
        UserMetadata {
            first_name: Some(self.first_name.clone()),
            last_name: Some(self.last_name.clone()),
            full_name: Some(format!("{} {}", self.first_name, self.last_name)),
            phone: Some(self.phone.clone()),
        }
    }
}

/// A freshly authenticated user only counts as logged in once verified.
pub fn require_verified(user: &AuthUser) -> Result<(), RemoteError> {
    if user.is_verified() {
        Ok(())
    } else {
        Err(RemoteError::Unverified)
    }
}

/// Rewrites known auth failures into friendlier text; anything else is
/// shown as reported.
pub fn friendly_login_error(message: &str) -> String {
    if message.contains("Invalid login credentials") {
        INVALID_CREDENTIALS.to_string()
    } else if message.contains("Email not verified") {
        NOT_VERIFIED.to_string()
    } else {
        message.to_string()
    }
}

pub fn login_error_banner(err: &RemoteError) -> String {
    format!("❌ {}", friendly_login_error(&err.to_string()))
}

pub fn sign_up_error_banner(err: &RemoteError) -> String {
    format!("❌ Error: {}", err)
}

/// Whether the page was opened from the verification email's redirect.
pub fn verification_succeeded(search: &str) -> bool {
    query_param(search, "verification").as_deref() == Some("success")
}

/// Where the verification email sends the user back to.
pub fn email_redirect_url(origin: &str, base_path: &str) -> String {
    format!(
        "{}{}{}",
        origin.trim_end_matches('/'),
        base_path,
        Page::Login.file_name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_builds_full_name() {
        let form = SignUpForm {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: "g@h.io".into(),
            phone: "42".into(),
            password: "pw".into(),
        };
        let metadata = form.metadata();
        assert_eq!(metadata.full_name.as_deref(), Some("Grace Hopper"));
        assert_eq!(metadata.phone.as_deref(), Some("42"));
    }

    #[test]
    fn known_login_errors_are_rewritten() {
        assert_eq!(
            friendly_login_error("Invalid login credentials"),
            "Invalid email or password. Please try again."
        );
        assert_eq!(
            login_error_banner(&RemoteError::Unverified),
            "❌ Email not verified. Please check your email for the verification link."
        );
        assert_eq!(
            friendly_login_error("Too many requests"),
            "Too many requests"
        );
    }

    #[test]
    fn unverified_users_are_refused() {
        let user: AuthUser = serde_json::from_str(r#"{"id":"1","email_confirmed_at":null}"#).unwrap();
        assert_eq!(require_verified(&user), Err(RemoteError::Unverified));

        let user: AuthUser =
            serde_json::from_str(r#"{"id":"1","email_confirmed_at":"2025-01-01T00:00:00Z"}"#).unwrap();
        assert_eq!(require_verified(&user), Ok(()));
    }

    #[test]
    fn verification_flag_and_redirect() {
        assert!(verification_succeeded("?verification=success"));
        assert!(verification_succeeded("?a=1&verification=success"));
        assert!(!verification_succeeded("?verification=failed"));
        assert!(!verification_succeeded(""));

        assert_eq!(
            email_redirect_url("https://site.example/", "/scholar/"),
            "https://site.example/scholar/login.html"
        );
    }

    #[test]
    fn sign_up_errors_keep_the_remote_text() {
        let err = RemoteError::from_response(422, r#"{"msg":"User already registered"}"#);
        assert_eq!(sign_up_error_banner(&err), "❌ Error: User already registered");
    }
}
