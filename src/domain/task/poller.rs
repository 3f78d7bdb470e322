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

//! Waits for a task to reach a terminal state

use super::model::{Task, TaskState};
use crate::infrastructure::constants::{
    DEFAULT_TASK_POLL_INTERVAL_MS, DEFAULT_TASK_POLL_TIMEOUT_SECS, DEFAULT_TASK_RETRY_COUNT,
};
use crate::shared::error::{PhotonError, Result};
use backon::{BackoffBuilder, ConstantBuilder};
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

/// Anything that can fetch the current state of a task
#[async_trait::async_trait]
pub trait TaskSource: Send + Sync {
    async fn get_task(&self, task_id: &str) -> Result<Task>;
}

/// Timing and retry limits for a single wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Delay between status checks, and between retries of a failed check
    pub interval: Duration,
    /// Wall-clock limit measured from the first status check
    pub timeout: Duration,
    /// Consecutive transient failures tolerated before giving up
    pub retry_count: usize,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(DEFAULT_TASK_POLL_INTERVAL_MS),
            timeout: Duration::from_secs(DEFAULT_TASK_POLL_TIMEOUT_SECS),
            retry_count: DEFAULT_TASK_RETRY_COUNT,
        }
    }
}

impl PollPolicy {
    fn transient_backoff(&self) -> impl Iterator<Item = Duration> {
        ConstantBuilder::default()
            .with_delay(self.interval)
            .with_max_times(self.retry_count)
            .build()
    }
}

pub struct TaskPoller<'a> {
    source: &'a dyn TaskSource,
    policy: PollPolicy,
}

impl<'a> TaskPoller<'a> {
    pub fn new(source: &'a dyn TaskSource, policy: PollPolicy) -> Self {
        Self { source, policy }
    }

    pub fn policy(&self) -> PollPolicy {
        self.policy
    }

    /// Poll `task_id` until it is `COMPLETED`.
    ///
    /// A task ending in `ERROR` yields [`PhotonError::TaskFailed`], exceeding
    /// the deadline yields [`PhotonError::TaskTimeout`] and running out of
    /// retries for a failing status check yields [`PhotonError::TaskPoll`].
    pub async fn wait(&self, task_id: &str) -> Result<Task> {
        self.wait_with_progress(task_id, |_| {}).await
    }

    /// Same as [`TaskPoller::wait`], calling `on_update` with every task
    /// state fetched along the way.
    pub async fn wait_with_progress<F>(&self, task_id: &str, mut on_update: F) -> Result<Task>
    where
        F: FnMut(&Task),
    {
        let started = Instant::now();
        let mut backoff = self.policy.transient_backoff();
        let mut attempt = 0usize;
        let mut failures = 0usize;

        loop {
            attempt += 1;
            debug!(task_id, attempt, "Checking task status");

            let delay = match self.source.get_task(task_id).await {
                Ok(task) => {
                    failures = 0;
                    backoff = self.policy.transient_backoff();
                    on_update(&task);

                    match task.state {
                        TaskState::Completed => {
                            info!(
                                task_id,
                                operation = %task.operation,
                                entity_id = %task.entity.id,
                                "Task completed"
                            );
                            return Ok(task);
                        }
                        TaskState::Error => {
                            return Err(PhotonError::TaskFailed {
                                task_id: task_id.to_string(),
                                operation: task.operation.clone(),
                                detail: task.failure_detail(),
                            });
                        }
                        _ => self.policy.interval,
                    }
                }
                Err(err) if err.is_transient() => {
                    failures += 1;
                    match backoff.next() {
                        Some(delay) => {
                            warn!(task_id, failures, error = %err, "Task status check failed, retrying");
                            delay
                        }
                        None => {
                            return Err(PhotonError::TaskPoll {
                                task_id: task_id.to_string(),
                                attempts: failures,
                                source: Box::new(err),
                            });
                        }
                    }
                }
                Err(err) => {
                    return Err(PhotonError::TaskPoll {
                        task_id: task_id.to_string(),
                        attempts: 1,
                        source: Box::new(err),
                    });
                }
            };

            // Checked after the fetch, so a zero timeout still polls once
            if started.elapsed() >= self.policy.timeout {
                return Err(PhotonError::TaskTimeout {
                    task_id: task_id.to_string(),
                    timeout: self.policy.timeout,
                });
            }
            sleep(delay).await;
        }
    }
}
