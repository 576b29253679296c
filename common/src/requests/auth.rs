use serde::Serialize;

use crate::config::Settings;
use crate::error::RemoteError;
use crate::model::session::UserMetadata;

use super::{encode_query, Method, RestRequest};

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: &'a UserMetadata,
}

#[derive(Serialize)]
struct RefreshBody<'a> {
    refresh_token: &'a str,
}

/// Builds requests for the hosted auth API.
pub struct AuthRequests<'a> {
    settings: &'a Settings,
}

impl<'a> AuthRequests<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    fn request(&self, method: Method, endpoint: &str, bearer: &str) -> RestRequest {
        RestRequest::new(method, self.settings.auth_url(endpoint))
            .authorized(&self.settings.anon_key, bearer)
    }

    /// Registers an account. The verification email links back to
    /// `redirect_to`.
    pub fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: &UserMetadata,
        redirect_to: &str,
    ) -> Result<RestRequest, RemoteError> {
        let endpoint = format!("signup?{}", encode_query([("redirect_to", redirect_to)]));
        self.request(Method::Post, &endpoint, &self.settings.anon_key)
            .json(&SignUpBody {
                email,
                password,
                data: metadata,
            })
    }

    pub fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<RestRequest, RemoteError> {
        self.request(Method::Post, "token?grant_type=password", &self.settings.anon_key)
            .json(&Credentials { email, password })
    }

    pub fn refresh(&self, refresh_token: &str) -> Result<RestRequest, RemoteError> {
        self.request(
            Method::Post,
            "token?grant_type=refresh_token",
            &self.settings.anon_key,
        )
        .json(&RefreshBody { refresh_token })
    }

    pub fn get_user(&self, access_token: &str) -> RestRequest {
        self.request(Method::Get, "user", access_token)
    }

    pub fn sign_out(&self, access_token: &str) -> RestRequest {
        self.request(Method::Post, "logout", access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            supabase_url: "https://demo.supabase.co".into(),
            anon_key: "anon".into(),
            table: "scholarships".into(),
            base_path: "/scholar/".into(),
            log_level: log::LevelFilter::Info,
        }
    }

    #[test]
    fn sign_up_carries_metadata_and_redirect() {
        let s = settings();
        let metadata = UserMetadata {
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            full_name: Some("Ada Lovelace".into()),
            phone: Some("555".into()),
        };
        let req = AuthRequests::new(&s)
            .sign_up(
                "ada@example.org",
                "secret",
                &metadata,
                "https://site.example/scholar/login.html",
            )
            .unwrap();

        assert_eq!(req.method, Method::Post);
        assert_eq!(
            req.url,
            "https://demo.supabase.co/auth/v1/signup?redirect_to=https%3A%2F%2Fsite.example%2Fscholar%2Flogin.html"
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["email"], "ada@example.org");
        assert_eq!(body["data"]["full_name"], "Ada Lovelace");
        assert_eq!(body["data"]["phone"], "555");
    }

    #[test]
    fn password_and_refresh_grants() {
        let s = settings();
        let auth = AuthRequests::new(&s);

        let sign_in = auth.sign_in_with_password("a@b.c", "pw").unwrap();
        assert!(sign_in.url.ends_with("/auth/v1/token?grant_type=password"));
        assert_eq!(sign_in.body.as_deref(), Some(r#"{"email":"a@b.c","password":"pw"}"#));

        let refresh = auth.refresh("r-1").unwrap();
        assert!(refresh.url.ends_with("/auth/v1/token?grant_type=refresh_token"));
        assert_eq!(refresh.body.as_deref(), Some(r#"{"refresh_token":"r-1"}"#));
        assert_eq!(refresh.header_value("Authorization"), Some("Bearer anon"));
    }

    #[test]
    fn user_scoped_calls_use_the_access_token() {
        let s = settings();
        let auth = AuthRequests::new(&s);

        let user = auth.get_user("tok");
        assert_eq!(user.method, Method::Get);
        assert_eq!(user.header_value("Authorization"), Some("Bearer tok"));
        assert_eq!(user.header_value("apikey"), Some("anon"));

        let out = auth.sign_out("tok");
        assert_eq!(out.method, Method::Post);
        assert!(out.url.ends_with("/auth/v1/logout"));
    }
}
