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

//! Asynchronous task domain

pub mod model;
pub mod poller;

pub use self::model::{ApiErrorDetail, Entity, Step, Task, TaskState};
pub use self::poller::{PollPolicy, TaskPoller, TaskSource};

/// Filters accepted by the task listing endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub entity_id: Option<String>,
    pub entity_kind: Option<String>,
    pub state: Option<String>,
}

impl TaskFilter {
    pub fn with_state(state: Option<String>) -> Self {
        Self {
            state,
            ..Default::default()
        }
    }

    /// Query parameters in the order the API documents them, skipping
    /// unset and blank filters
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        [
            ("entityId", &self.entity_id),
            ("entityKind", &self.entity_kind),
            ("state", &self.state),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| {
                    let v = if key == "state" {
                        v.to_ascii_uppercase()
                    } else {
                        v.to_string()
                    };
                    (key.to_string(), v)
                })
        })
        .collect()
    }
}
