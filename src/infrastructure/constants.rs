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

/// Task polling defaults
pub const DEFAULT_TASK_POLL_INTERVAL_MS: u64 = 100;
pub const DEFAULT_TASK_POLL_TIMEOUT_SECS: u64 = 30 * 60;
pub const DEFAULT_TASK_RETRY_COUNT: usize = 3;

/// HTTP defaults
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Configuration file location, relative to $HOME
pub const CONFIG_DIR: &str = ".photon";
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variables
pub const ENV_CONFIG: &str = "PHOTON_CONFIG";
pub const ENV_TARGET: &str = "PHOTON_TARGET";
pub const ENV_TOKEN: &str = "PHOTON_TOKEN";

/// Resource naming rules
pub const NAME_PATTERN: &str = r"^[a-zA-Z][a-zA-Z0-9_-]*$";
pub const MAX_NAME_LENGTH: usize = 63;

/// API collections
pub const TASKS_PATH: &str = "/tasks";
pub const AVAILABILITY_ZONES_PATH: &str = "/availabilityzones";
pub const NETWORKS_PATH: &str = "/networks";
pub const DEPLOYMENTS_PATH: &str = "/deployments";
