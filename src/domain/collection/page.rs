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

use crate::shared::serde_ext::null_as_default;
use serde::{Deserialize, Serialize};

/// One batch of a paged list response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_page_link: Option<String>,
}

impl<T> Page<T> {
    /// A final page holding `items`
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_page_link: None,
            previous_page_link: None,
        }
    }

    pub fn with_next(items: Vec<T>, link: impl Into<String>) -> Self {
        Self {
            items,
            next_page_link: Some(link.into()),
            previous_page_link: None,
        }
    }

    /// Link to the following page; an empty link means there is none
    pub fn next_link(&self) -> Option<&str> {
        self.next_page_link
            .as_deref()
            .map(str::trim)
            .filter(|link| !link.is_empty())
    }
}
