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

//! Argument checks performed before any remote call

use crate::infrastructure::constants::{MAX_NAME_LENGTH, NAME_PATTERN};
use crate::shared::error::{PhotonError, Result};
use regex::Regex;

/// Check a resource name against the control plane naming rules
pub fn validate_name(kind: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(PhotonError::usage(format!("Please provide {} name", kind)));
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(PhotonError::usage(format!(
            "Invalid {} name '{}': must be at most {} characters",
            kind, name, MAX_NAME_LENGTH
        )));
    }

    let re = Regex::new(NAME_PATTERN).map_err(|e| PhotonError::config_error(e.to_string()))?;
    if !re.is_match(name) {
        return Err(PhotonError::usage(format!(
            "Invalid {} name '{}': must start with a letter and contain only letters, digits, '-' or '_'",
            kind, name
        )));
    }

    Ok(())
}

/// Return the positional argument or a usage error naming the expected form
pub fn require_arg(value: Option<&str>, usage: &str) -> Result<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(PhotonError::usage(format!("Missing argument. Usage: {}", usage))),
    }
}

/// Split a comma-separated flag value, rejecting empty entries
pub fn parse_list(flag: &str, raw: &str) -> Result<Vec<String>> {
    let items: Vec<String> = raw.split(',').map(|s| s.trim().to_string()).collect();
    if items.iter().any(String::is_empty) {
        return Err(PhotonError::usage(format!(
            "Invalid value '{}' for {}: expected a comma-separated list without empty entries",
            raw, flag
        )));
    }
    Ok(items)
}
