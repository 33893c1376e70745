// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Drains a cursor-based listing call into one in-memory sequence.

use std::future::Future;
use tracing::debug;

use super::Page;
use crate::error::{BinderError, Result};

/// Fetch every page of `operation`, in order, and concatenate the items.
///
/// Pages are requested one after another, each with the cursor returned by
/// the previous one, until a page comes back without a cursor. Empty pages
/// with a cursor do not end the sequence. The first failing page aborts the
/// whole listing and the pages fetched so far are dropped. A page that hands
/// back the cursor it was requested with is a failure too, since the rest of
/// the listing can never be reached.
pub async fn paginate<T, F, Fut>(operation: &'static str, mut fetch_page: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut items = Vec::new();
    let mut next_token: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = fetch_page(next_token.clone())
            .await
            .map_err(|e| BinderError::Pagination {
                operation,
                source: Box::new(e),
            })?;
        pages += 1;
        items.extend(page.items);

        match page.next_token.filter(|t| !t.is_empty()) {
            Some(token) if next_token.as_deref() == Some(token.as_str()) => {
                return Err(BinderError::Pagination {
                    operation,
                    source: Box::new(BinderError::Api(format!(
                        "registry repeated continuation token {}",
                        token
                    ))),
                });
            }
            Some(token) => next_token = Some(token),
            None => break,
        }
    }

    debug!(operation, pages, items = items.len(), "Pagination complete");
    Ok(items)
}
