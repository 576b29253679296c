//! Requests against the hosted backend, described as plain data.
//!
//! Builders in this module only assemble URLs, headers and JSON bodies; the
//! frontend executes the resulting [`RestRequest`] with `gloo-net` and hands
//! the status and body to [`crate::responses`].

use serde::Serialize;

use crate::error::RemoteError;

pub mod auth;
pub mod filter;
pub mod table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RestRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    /// Serialized JSON body.
    pub body: Option<String>,
}

impl RestRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, RemoteError> {
        self.body = Some(serde_json::to_string(body)?);
        Ok(self.header("Content-Type", "application/json"))
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// `apikey` plus bearer authorization, as every project endpoint expects.
    pub(crate) fn authorized(self, anon_key: &str, bearer: &str) -> Self {
        self.header("apikey", anon_key)
            .header("Authorization", format!("Bearer {}", bearer))
    }
}

/// Encodes query pairs the way browsers encode form data.
pub(crate) fn encode_query<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}
