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

//! Follows next-page links until a collection is complete

use super::page::Page;
use crate::shared::error::{PhotonError, Result};
use futures::stream::{self, TryStreamExt};
use std::collections::HashSet;
use std::future::Future;
use tracing::debug;

struct Walk<T, F> {
    pending: Option<Page<T>>,
    fetch_next: F,
    followed: HashSet<String>,
}

/// Concatenate `first` with every page reachable through its next-page links.
///
/// Pages are fetched one at a time, in link order. Any failed fetch aborts the
/// walk with [`PhotonError::PaginationFetch`] and nothing collected so far is
/// returned.
pub async fn collect_all<T, F, Fut>(first: Page<T>, fetch_next: F) -> Result<Vec<T>>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let walk = Walk {
        pending: Some(first),
        fetch_next,
        followed: HashSet::new(),
    };

    stream::try_unfold(walk, |mut walk| async move {
        let Some(page) = walk.pending.take() else {
            return Ok(None);
        };

        if let Some(link) = page.next_link().map(str::to_string) {
            if !walk.followed.insert(link.clone()) {
                return Err(PhotonError::PaginationFetch {
                    link,
                    source: Box::new(PhotonError::InvalidResponse(
                        "next page link points to a page that was already fetched".to_string(),
                    )),
                });
            }

            debug!(link = %link, "Fetching next page");
            let next = (walk.fetch_next)(link.clone())
                .await
                .map_err(|source| PhotonError::PaginationFetch {
                    link,
                    source: Box::new(source),
                })?;
            walk.pending = Some(next);
        }

        Ok(Some((page.items, walk)))
    })
    .try_concat()
    .await
}
