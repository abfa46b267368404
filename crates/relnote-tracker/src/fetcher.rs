//! Paginated fetching of every matching issue

use tracing::{debug, info, instrument};

use crate::client::IssueSearch;
use crate::error::Result;
use crate::query::SearchQuery;
use crate::types::Issue;

/// Page size requested from the tracker
pub const PER_PAGE: u32 = 100;

/// Fetch every merged pull request of `repo` in `milestone`
pub async fn fetch_all<S>(search: &S, repo: &str, milestone: &str) -> Result<Vec<Issue>>
where
    S: IssueSearch + ?Sized,
{
    let query = SearchQuery::merged_in_milestone(repo, milestone);
    fetch_query(search, &query).await
}

/// Fetch every page of `query`.
///
/// Pages are requested one at a time starting from 1. A page holding fewer
/// than [`PER_PAGE`] items is the last one, so a total that is an exact
/// multiple of the page size costs one extra, empty request. The first error
/// aborts the whole fetch; nothing is retried and no partial result escapes.
/// Issues come back in page order, then in-page order, without sorting or
/// deduplication.
#[instrument(skip(search), fields(query = %query))]
pub async fn fetch_query<S>(search: &S, query: &SearchQuery) -> Result<Vec<Issue>>
where
    S: IssueSearch + ?Sized,
{
    let mut issues = Vec::new();
    let mut page = 1;

    loop {
        let batch = search.search_page(query, page, PER_PAGE).await?;
        let batch_len = batch.len();
        debug!(page, batch_len, "fetched page");
        issues.extend(batch);

        if batch_len < PER_PAGE as usize {
            break;
        }
        page += 1;
    }

    info!(pages = page, total = issues.len(), "fetched all issues");
    Ok(issues)
}
