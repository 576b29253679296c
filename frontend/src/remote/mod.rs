//! Executes the request descriptions built in `common::requests` with
//! `gloo-net` and decodes the answers.

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;

use common::error::RemoteError;
use common::model::listing::{CategoryRow, Listing, ListingDraft, ListingId};
use common::requests::filter::CategoryFilter;
use common::requests::table::TableRequests;
use common::requests::{Method, RestRequest};
use common::responses::{decode_json, expect_success};

use crate::config::SETTINGS;

pub mod session;

fn network(err: gloo_net::Error) -> RemoteError {
    RemoteError::Network(err.to_string())
}

/// Sends the request and returns the status with the raw body.
pub async fn execute(request: RestRequest) -> Result<(u16, String), RemoteError> {
    let mut builder: RequestBuilder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
        Method::Patch => Request::patch(&request.url),
        Method::Delete => Request::delete(&request.url),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }

    let prepared = match request.body {
        Some(body) => builder.body(body).map_err(network)?,
        None => builder.build().map_err(network)?,
    };
    let response = prepared.send().await.map_err(network)?;
    let status = response.status();
    let body = response.text().await.map_err(network)?;
    log::debug!("{:?} {} -> {}", request.method, request.url, status);
    Ok((status, body))
}

pub async fn call<T: DeserializeOwned>(request: RestRequest) -> Result<T, RemoteError> {
    let (status, body) = execute(request).await?;
    decode_json(status, &body)
}

pub async fn call_unit(request: RestRequest) -> Result<(), RemoteError> {
    let (status, body) = execute(request).await?;
    expect_success(status, &body)
}

/// Table access for one page, optionally on behalf of a signed-in user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Remote {
    token: Option<String>,
}

impl Remote {
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn with_token(token: String) -> Self {
        Self { token: Some(token) }
    }

    fn table(&self) -> TableRequests<'_> {
        TableRequests::new(&SETTINGS, self.token.as_deref())
    }

    /// Newest first.
    pub async fn list_listings(&self, filter: &CategoryFilter) -> Result<Vec<Listing>, RemoteError> {
        call(self.table().list(filter)).await
    }

    pub async fn list_categories(&self) -> Result<Vec<CategoryRow>, RemoteError> {
        call(self.table().list_categories()).await
    }

    pub async fn fetch_listing(&self, id: &ListingId) -> Result<Listing, RemoteError> {
        call(self.table().fetch_one(id)).await
    }

    pub async fn insert_listing(&self, draft: &ListingDraft) -> Result<(), RemoteError> {
        call_unit(self.table().insert(draft)?).await
    }

    pub async fn update_listing(
        &self,
        id: &ListingId,
        draft: &ListingDraft,
    ) -> Result<(), RemoteError> {
        call_unit(self.table().update(id, draft)?).await
    }

    pub async fn delete_listing(&self, id: &ListingId) -> Result<(), RemoteError> {
        call_unit(self.table().delete(id)).await
    }
}
