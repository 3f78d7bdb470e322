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


//! Field helpers for lenient JSON decoding

use serde::{Deserialize, Deserializer};

/// Decode an explicit `null` the same way as a missing field
pub fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Tags {
        #[serde(default, deserialize_with = "null_as_default")]
        tags: Vec<String>,
    }

    #[test]
    fn test_null_missing_and_present() {
        let parsed: Tags = serde_json::from_str(r#"{"tags": null}"#).unwrap();
        assert!(parsed.tags.is_empty());

        let parsed: Tags = serde_json::from_str("{}").unwrap();
        assert!(parsed.tags.is_empty());

        let parsed: Tags = serde_json::from_str(r#"{"tags": ["a"]}"#).unwrap();
        assert_eq!(parsed.tags, vec!["a"]);
    }
}
