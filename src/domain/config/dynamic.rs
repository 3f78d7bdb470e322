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

//! `-D key=value` overrides applied on top of the config file

use super::cli::CliConfig;
use crate::shared::error::{PhotonError, Result};
use std::collections::HashMap;
use std::str::FromStr;

pub const SUPPORTED_KEYS: &[&str] = &[
    "target",
    "token",
    "request.timeout-secs",
    "poll.interval-ms",
    "poll.timeout-secs",
    "poll.retry-count",
];

pub fn parse_properties(properties: &[String]) -> Result<HashMap<String, String>> {
    let mut map = HashMap::new();

    for property in properties {
        let (key, value) = property.split_once('=').ok_or_else(|| {
            PhotonError::config_error(format!(
                "Invalid property format: '{}'. Expected 'key=value'",
                property
            ))
        })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(PhotonError::config_error(format!(
                "Empty key in property: '{}'",
                property
            )));
        }

        map.insert(key.to_string(), value.trim().to_string());
    }

    Ok(map)
}

pub fn apply_to_cli_config(properties: &HashMap<String, String>, config: &mut CliConfig) -> Result<()> {
    if let Some(key) = properties
        .keys()
        .find(|key| !SUPPORTED_KEYS.contains(&key.as_str()))
    {
        return Err(PhotonError::config_error(format!(
            "Unknown property '{}'. Supported: {}",
            key,
            SUPPORTED_KEYS.join(", ")
        )));
    }

    if let Some(target) = properties.get("target") {
        config.target = Some(target.clone());
    }

    if let Some(token) = properties.get("token") {
        config.token = Some(token.clone());
    }

    if let Some(secs) = properties.get("request.timeout-secs") {
        config.request_timeout_secs = parse_number("request.timeout-secs", secs)?;
    }

    if let Some(ms) = properties.get("poll.interval-ms") {
        config.poll.interval_ms = parse_number("poll.interval-ms", ms)?;
    }

    if let Some(secs) = properties.get("poll.timeout-secs") {
        config.poll.timeout_secs = parse_number("poll.timeout-secs", secs)?;
    }

    if let Some(count) = properties.get("poll.retry-count") {
        config.poll.retry_count = parse_number("poll.retry-count", count)?;
    }

    Ok(())
}

fn parse_number<T: FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.parse::<T>().map_err(|_| {
        PhotonError::config_error(format!(
            "Invalid value '{}' for '{}': expected a non-negative integer",
            raw, key
        ))
    })
}
