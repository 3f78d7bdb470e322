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

use super::transport::{ApiRequest, HttpTransport, PhotonTransport};
use crate::domain::collection::{collect_all, Page};
use crate::domain::config::CliConfig;
use crate::domain::task::{PollPolicy, Task, TaskPoller, TaskSource};
use crate::infrastructure::constants::TASKS_PATH;
use crate::shared::error::{PhotonError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Typed access to the control plane, built once per invocation
pub struct PhotonClient {
    transport: Box<dyn PhotonTransport>,
    poll_policy: PollPolicy,
}

impl PhotonClient {
    pub fn from_config(config: &CliConfig) -> Result<Self> {
        let transport = HttpTransport::new(
            config.target_url()?,
            config.token.clone(),
            config.request_timeout(),
        )?;
        Ok(Self::with_transport(Box::new(transport), config.poll_policy()))
    }

    pub fn with_transport(transport: Box<dyn PhotonTransport>, poll_policy: PollPolicy) -> Self {
        Self {
            transport,
            poll_policy,
        }
    }

    pub fn poll_policy(&self) -> PollPolicy {
        self.poll_policy
    }

    pub fn poller(&self) -> TaskPoller<'_> {
        TaskPoller::new(self, self.poll_policy)
    }

    pub(crate) async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let value = self.transport.send(request).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, link: &str) -> Result<T> {
        self.fetch(ApiRequest::get(link)).await
    }

    pub(crate) fn body<B: Serialize>(spec: &B) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(spec)?)
    }

    /// Send a mutating request and return the task the server queued for it
    pub(crate) async fn submit(&self, request: ApiRequest) -> Result<Task> {
        let task: Task = self.fetch(request).await?;
        if task.id.is_empty() {
            return Err(PhotonError::InvalidResponse(
                "server accepted the request but returned a task without an id".to_string(),
            ));
        }
        debug!(task_id = %task.id, operation = %task.operation, state = %task.state, "Task submitted");
        Ok(task)
    }

    /// Fetch the first page for `request`, then every page linked from it
    pub async fn list_all<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<Vec<T>> {
        let first: Page<T> = self.fetch(request).await?;
        collect_all(first, |link| async move { self.get::<Page<T>>(&link).await }).await
    }
}

#[async_trait::async_trait]
impl TaskSource for PhotonClient {
    async fn get_task(&self, task_id: &str) -> Result<Task> {
        self.get(&format!("{}/{}", TASKS_PATH, task_id)).await
    }
}
