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

//! Task records as returned by the control plane

use crate::shared::serde_ext::null_as_default;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Lifecycle state of a task or of one of its steps
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TaskState {
    #[default]
    Queued,
    Started,
    Completed,
    Error,
    /// A state this client does not know about; never terminal
    Unknown(String),
}

impl TaskState {
    pub fn as_str(&self) -> &str {
        match self {
            TaskState::Queued => "QUEUED",
            TaskState::Started => "STARTED",
            TaskState::Completed => "COMPLETED",
            TaskState::Error => "ERROR",
            TaskState::Unknown(s) => s,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskState::Completed | TaskState::Error)
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_uppercase().as_str() {
            "QUEUED" => TaskState::Queued,
            "STARTED" => TaskState::Started,
            "COMPLETED" => TaskState::Completed,
            "ERROR" => TaskState::Error,
            _ => TaskState::Unknown(s.to_string()),
        })
    }
}

impl Serialize for TaskState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TaskState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or(TaskState::Unknown(raw)))
    }
}

/// Reference to the resource a task acted upon
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub kind: String,
}

/// Error or warning attached to a task step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    #[serde(default)]
    pub sequence: i32,
    #[serde(default)]
    pub operation: String,
    #[serde(default)]
    pub state: TaskState,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<ApiErrorDetail>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub warnings: Vec<ApiErrorDetail>,
    #[serde(default)]
    pub queued_time: i64,
    #[serde(default)]
    pub started_time: i64,
    #[serde(default)]
    pub end_time: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub operation: String,
    #[serde(default)]
    pub state: TaskState,
    #[serde(default, deserialize_with = "null_as_default")]
    pub entity: Entity,
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub queued_time: i64,
    #[serde(default)]
    pub started_time: i64,
    #[serde(default)]
    pub end_time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Task {
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Human-readable reason for an `ERROR` task.
    ///
    /// Prefers the top-level error, then the errors of failed steps, then a
    /// generic message naming the failed step.
    pub fn failure_detail(&self) -> String {
        if let Some(error) = self.error.as_deref().filter(|e| !e.is_empty()) {
            return error.to_string();
        }

        let messages: Vec<String> = self
            .steps
            .iter()
            .filter(|step| step.state == TaskState::Error)
            .flat_map(|step| step.errors.iter())
            .map(|e| {
                if e.code.is_empty() {
                    e.message.clone()
                } else {
                    format!("{}: {}", e.code, e.message)
                }
            })
            .collect();

        if !messages.is_empty() {
            return messages.join("; ");
        }

        match self.steps.iter().find(|s| s.state == TaskState::Error) {
            Some(step) => format!("step {} failed", step.operation),
            None => "task ended in ERROR state".to_string(),
        }
    }

    /// Position of the first unfinished step as (1-based index, total), if
    /// the task reports steps at all.
    pub fn step_progress(&self) -> Option<(usize, usize, &Step)> {
        if self.steps.is_empty() {
            return None;
        }
        let total = self.steps.len();
        let mut ordered: Vec<&Step> = self.steps.iter().collect();
        ordered.sort_by_key(|s| s.sequence);
        let (index, step) = ordered
            .iter()
            .enumerate()
            .find(|(_, s)| s.state != TaskState::Completed)
            .map(|(i, s)| (i, *s))
            .unwrap_or((total - 1, ordered[total - 1]));
        Some((index + 1, total, step))
    }

    /// Wall-clock run time in milliseconds, when both timestamps are known
    pub fn duration_millis(&self) -> Option<i64> {
        if self.started_time > 0 && self.end_time >= self.started_time {
            Some(self.end_time - self.started_time)
        } else {
            None
        }
    }
}
