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

//! Client configuration file

use crate::domain::task::PollPolicy;
use crate::infrastructure::constants::{
    CONFIG_DIR, CONFIG_FILE, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TASK_POLL_INTERVAL_MS,
    DEFAULT_TASK_POLL_TIMEOUT_SECS, DEFAULT_TASK_RETRY_COUNT,
};
use crate::shared::error::{PhotonError, Result};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings shared read-only by every command of one invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Base URL of the control plane, e.g. `http://10.0.0.5:9000`
    pub target: Option<String>,
    /// Bearer token sent with every request
    pub token: Option<String>,
    pub request_timeout_secs: u64,
    pub poll: PollConf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            target: None,
            token: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            poll: PollConf::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConf {
    pub interval_ms: u64,
    pub timeout_secs: u64,
    pub retry_count: usize,
}

impl Default for PollConf {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_TASK_POLL_INTERVAL_MS,
            timeout_secs: DEFAULT_TASK_POLL_TIMEOUT_SECS,
            retry_count: DEFAULT_TASK_RETRY_COUNT,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML or YAML file, chosen by extension
    pub fn from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = read_to_string(path).map_err(|e| {
            PhotonError::config_error(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let conf = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            _ => toml::from_str(&content)?,
        };
        Ok(conf)
    }

    /// `$HOME/.photon/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Read `explicit` if given, otherwise the default file when it exists,
    /// otherwise fall back to built-in defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::from(path),
            _ => Ok(Self::default()),
        }
    }

    /// The configured target, validated as an http(s) URL without a trailing slash
    pub fn target_url(&self) -> Result<String> {
        let target = self
            .target
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                PhotonError::config_error(
                    "No target set. Use --target, PHOTON_TARGET or 'target' in the config file",
                )
            })?;

        let url = reqwest::Url::parse(target)
            .map_err(|e| PhotonError::config_error(format!("Invalid target '{}': {}", target, e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(PhotonError::config_error(format!(
                "Invalid target '{}': scheme must be http or https",
                target
            )));
        }

        Ok(target.trim_end_matches('/').to_string())
    }

    pub fn poll_policy(&self) -> PollPolicy {
        PollPolicy {
            interval: Duration::from_millis(self.poll.interval_ms),
            timeout: Duration::from_secs(self.poll.timeout_secs),
            retry_count: self.poll.retry_count,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
