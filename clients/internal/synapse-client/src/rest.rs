// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Shared JSON-over-HTTP plumbing for the service clients

use std::sync::Arc;

use reqwest::{Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use synapse_api::Page;
use url::Url;

use crate::auth::{self, Audience, AuthConfig};
use crate::error::{Error, Result};

/// One remote service: base URL, `api-version`, and token audience
#[derive(Clone)]
pub(crate) struct RestClient {
    http: reqwest::Client,
    base_url: String,
    api_version: &'static str,
    audience: Audience,
    auth: Arc<AuthConfig>,
}

impl RestClient {
    pub(crate) fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_version: &'static str,
        audience: Audience,
        auth: Arc<AuthConfig>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_version,
            audience,
            auth,
        }
    }

    /// Base URL this client sends requests to
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request URL with `api-version` and extra query pairs
    ///
    /// `path` must already be percent-encoded.
    pub(crate) fn url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            path
        ))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api-version", self.api_version);
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Send a request, turning non-success statuses into [`Error::Api`]
    pub(crate) async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<Response> {
        tracing::debug!(%method, %url, "sending request");

        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let request = auth::add_auth_headers(&self.auth, self.audience, request)?;

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), url = %response.url(), "received response");

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        Err(Error::from_response(status.as_u16(), &text))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.send::<()>(Method::GET, url, None).await?;
        decode(response).await
    }

    /// GET every page of a `{ value, nextLink }` listing
    pub(crate) async fn get_paged<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut next = Some(url);

        while let Some(url) = next.take() {
            let page: Page<T> = self.get(url).await?;
            items.extend(page.value);
            if let Some(link) = page.next_link {
                next = Some(Url::parse(&link)?);
            }
        }

        Ok(items)
    }

    /// Send a request whose response may or may not carry a body
    ///
    /// Long-running ARM operations answer `202 Accepted` with an empty body.
    pub(crate) async fn send_optional<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<Option<T>> {
        let response = self.send(method, url, body).await?;
        decode_optional(response).await
    }

    /// Send a request and ignore any response body
    pub(crate) async fn send_empty<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<()> {
        self.send(method, url, body).await.map(|_| ())
    }
}

pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let url = response.url().to_string();
    decode_optional(response)
        .await?
        .ok_or(Error::EmptyBody(url))
}

pub(crate) async fn decode_optional<T: DeserializeOwned>(response: Response) -> Result<Option<T>> {
    let url = response.url().to_string();
    let bytes = response.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|source| Error::Decode { url, source })
}

/// Percent-encode a single path segment
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
