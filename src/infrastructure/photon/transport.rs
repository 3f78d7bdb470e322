// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::shared::error::{PhotonError, Result};
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// One call against the control plane
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute URL, or a path resolved against the target
    pub link: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(link: impl Into<String>) -> Self {
        Self::new(Method::GET, link, None)
    }

    pub fn post(link: impl Into<String>, body: Value) -> Self {
        Self::new(Method::POST, link, Some(body))
    }

    pub fn delete(link: impl Into<String>) -> Self {
        Self::new(Method::DELETE, link, None)
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    fn new(method: Method, link: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            method,
            link: link.into(),
            query: Vec::new(),
            body,
        }
    }
}

#[async_trait::async_trait]
pub trait PhotonTransport: Send + Sync {
    /// Issue `request` and return the decoded JSON body (`Null` when empty).
    /// Non-2xx responses become [`PhotonError::Api`].
    async fn send(&self, request: ApiRequest) -> Result<Value>;
}

pub struct HttpTransport {
    client: reqwest::Client,
    target: String,
    token: Option<String>,
}

impl HttpTransport {
    pub fn new(target: String, token: Option<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            target: target.trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

#[async_trait::async_trait]
impl PhotonTransport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        let url = resolve_link(&self.target, &request.link);
        debug!(method = %request.method, url = %url, "Sending request");

        let mut builder = self.client.request(request.method, &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &bytes));
        }
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Absolute links are used as given; anything else hangs off the target
pub fn resolve_link(target: &str, link: &str) -> String {
    if link.starts_with("http://") || link.starts_with("https://") {
        link.to_string()
    } else if link.starts_with('/') {
        format!("{}{}", target, link)
    } else {
        format!("{}/{}", target, link)
    }
}

fn api_error(status: u16, body: &[u8]) -> PhotonError {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        code: String,
        #[serde(default)]
        message: String,
    }

    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(err) if !err.code.is_empty() || !err.message.is_empty() => {
            PhotonError::api(status, err.code, err.message)
        }
        _ => PhotonError::api(status, "HttpError", String::from_utf8_lossy(body).trim()),
    }
}
