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

use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PhotonError>;

#[derive(Error, Debug)]
pub enum PhotonError {
    #[error("Failed to poll task '{task_id}' after {attempts} attempt(s): {source}")]
    TaskPoll {
        task_id: String,
        attempts: usize,
        #[source]
        source: Box<PhotonError>,
    },

    #[error("Timed out after {timeout:?} waiting for task '{task_id}' to finish")]
    TaskTimeout { task_id: String, timeout: Duration },

    #[error("Task '{task_id}' ({operation}) failed: {detail}")]
    TaskFailed {
        task_id: String,
        operation: String,
        detail: String,
    },

    #[error("Failed to fetch page '{link}': {source}")]
    PaginationFetch {
        link: String,
        #[source]
        source: Box<PhotonError>,
    },

    #[error("Usage error: {0}")]
    Usage(String),

    #[error("API error ({status}) {code}: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Only network-level failures map to the retryable `Http` variant
impl From<reqwest::Error> for PhotonError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            PhotonError::Config(format!("invalid request: {}", err))
        } else if err.is_decode() {
            PhotonError::InvalidResponse(err.to_string())
        } else {
            PhotonError::Http(err.to_string())
        }
    }
}

impl PhotonError {
    pub fn usage(context: impl Into<String>) -> Self {
        Self::Usage(context.into())
    }

    pub fn config_error(context: impl Into<String>) -> Self {
        Self::Config(context.into())
    }

    pub fn api(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Whether retrying the same request may succeed: transport failures,
    /// server-side errors and throttling.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::Api { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(PhotonError::Http("connection reset".to_string()).is_transient());
        assert!(PhotonError::api(503, "Unavailable", "try later").is_transient());
        assert!(PhotonError::api(429, "TooManyRequests", "slow down").is_transient());
        assert!(!PhotonError::api(404, "TaskNotFound", "no such task").is_transient());
        assert!(!PhotonError::usage("missing id").is_transient());
    }

    #[test]
    fn test_request_builder_errors_are_not_retried() {
        let err = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        assert!(err.is_builder());

        let err = PhotonError::from(err);
        assert!(matches!(err, PhotonError::Config(_)));
        assert!(!err.is_transient());
    }

    #[test]
    fn test_task_failed_message_carries_detail() {
        let err = PhotonError::TaskFailed {
            task_id: "1".to_string(),
            operation: "CREATE_VM".to_string(),
            detail: "disk full".to_string(),
        };
        assert!(err.to_string().contains("disk full"));
    }
}
