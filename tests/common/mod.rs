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

//! In-memory control plane used by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use photon_cli::cli::CommandContext;
use photon_cli::{ApiRequest, PhotonClient, PhotonError, PhotonTransport, PollPolicy, Result};
use reqwest::Method;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
pub enum Reply {
    Json(Value),
    Api(u16, &'static str, &'static str),
    Transport,
}

type RequestLog = Arc<Mutex<Vec<ApiRequest>>>;

/// Answers requests from per-route scripts. The last reply of a route
/// repeats once the rest are used up; unscripted routes answer 404.
#[derive(Default)]
pub struct ScriptedTransport {
    routes: Mutex<HashMap<(Method, String), VecDeque<Reply>>>,
    requests: RequestLog,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, method: Method, link: &str, replies: Vec<Reply>) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert((method, link.to_string()), replies.into());
        self
    }

    pub fn log(&self) -> RequestLog {
        Arc::clone(&self.requests)
    }
}

#[async_trait]
impl PhotonTransport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        self.requests.lock().unwrap().push(request.clone());

        let reply = {
            let mut routes = self.routes.lock().unwrap();
            match routes.get_mut(&(request.method.clone(), request.link.clone())) {
                Some(queue) if queue.len() > 1 => queue.pop_front(),
                Some(queue) => queue.front().cloned(),
                None => None,
            }
        };

        match reply {
            Some(Reply::Json(value)) => Ok(value),
            Some(Reply::Api(status, code, message)) => Err(PhotonError::api(status, code, message)),
            Some(Reply::Transport) => Err(PhotonError::Http("connection reset by peer".to_string())),
            None => Err(PhotonError::api(404, "NotFound", "no such route")),
        }
    }
}

pub fn fast_policy() -> PollPolicy {
    PollPolicy {
        interval: Duration::from_millis(100),
        timeout: Duration::from_secs(5),
        retry_count: 3,
    }
}

pub fn client(transport: ScriptedTransport) -> (PhotonClient, RequestLog) {
    let log = transport.log();
    (
        PhotonClient::with_transport(Box::new(transport), fast_policy()),
        log,
    )
}

pub fn task(id: &str, operation: &str, state: &str, entity_id: &str, kind: &str) -> Value {
    json!({
        "id": id,
        "operation": operation,
        "state": state,
        "entity": { "id": entity_id, "kind": kind },
        "selfLink": format!("http://photon:9000/tasks/{}", id),
    })
}

pub fn page(items: Value, next: Option<&str>) -> Value {
    match next {
        Some(link) => json!({ "items": items, "nextPageLink": link, "previousPageLink": "" }),
        None => json!({ "items": items }),
    }
}

/// Run a parsed command line against `client`, returning what it printed
pub async fn run(client: &PhotonClient, argv: &[&str]) -> anyhow::Result<String> {
    use clap::Parser;

    let mut full = vec!["photon"];
    full.extend_from_slice(argv);
    let args = photon_cli::cli::CliArgs::try_parse_from(full)?;
    let ctx = CommandContext::new(client, args.output_mode());

    let mut out = Vec::new();
    args.command.execute(&ctx, &mut out).await?;
    Ok(String::from_utf8(out)?)
}

pub fn links(log: &RequestLog) -> Vec<String> {
    log.lock()
        .unwrap()
        .iter()
        .map(|r| format!("{} {}", r.method, r.link))
        .collect()
}
