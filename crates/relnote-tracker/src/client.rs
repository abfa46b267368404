//! Issue search clients
//!
//! [`IssueSearch`] is the seam between the fetcher and the tracker API. The
//! GitHub implementation talks to the `/search/issues` endpoint; tests plug in
//! in-memory fakes.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::{FetchError, Result};
use crate::query::SearchQuery;
use crate::types::Issue;

/// Default GitHub REST API base URL
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("relnote/", env!("CARGO_PKG_VERSION"));

/// A paginated issue search endpoint
#[async_trait::async_trait]
pub trait IssueSearch: Send + Sync {
    /// Fetch one page (1-based) of results for `query`
    async fn search_page(&self, query: &SearchQuery, page: u32, per_page: u32)
        -> Result<Vec<Issue>>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: u64,
    number: u64,
    title: String,
    user: Option<SearchUser>,
    #[serde(default)]
    labels: Vec<SearchLabel>,
}

#[derive(Debug, Deserialize)]
struct SearchUser {
    login: String,
}

#[derive(Debug, Deserialize)]
struct SearchLabel {
    name: String,
}

impl From<SearchItem> for Issue {
    fn from(item: SearchItem) -> Self {
        // GitHub reports deleted accounts as a null user; it renders them as "ghost"
        let author = item
            .user
            .map(|u| u.login)
            .unwrap_or_else(|| "ghost".to_string());

        Issue::new(item.id, item.number, item.title, author)
            .with_labels(item.labels.into_iter().map(|l| l.name))
    }
}

/// GitHub issue search client
pub struct GitHubSearch {
    client: Client,
    api_url: String,
}

impl GitHubSearch {
    /// Create a client for the public GitHub API
    pub fn new() -> Self {
        Self::with_api_url(DEFAULT_API_URL)
    }

    /// Create a client for a custom API base URL (GitHub Enterprise, tests)
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            api_url,
        }
    }

    /// API base URL in use
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl Default for GitHubSearch {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IssueSearch for GitHubSearch {
    #[instrument(skip(self), fields(query = %query))]
    async fn search_page(
        &self,
        query: &SearchQuery,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Issue>> {
        if page == 0 {
            return Err(FetchError::InvalidRequest(
                "pages are numbered from 1".to_string(),
            ));
        }

        let url = format!("{}/search/issues", self.api_url);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json")
            .query(&[
                ("q", query.as_str().to_string()),
                ("page", page.to_string()),
                ("per_page", per_page.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FetchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        debug!(page, items = parsed.items.len(), "search page received");

        Ok(parsed.items.into_iter().map(Issue::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PAGE_BODY: &str = r#"{
        "total_count": 2,
        "incomplete_results": false,
        "items": [
            {
                "id": 1001,
                "number": 4512,
                "title": "Fix avatar upload",
                "user": { "login": "alice" },
                "labels": [ { "name": "kind/bug" }, { "name": "kind/ui" } ]
            },
            {
                "id": 1002,
                "number": 4520,
                "title": "Remove dead code",
                "user": null,
                "labels": []
            }
        ]
    }"#;

    #[tokio::test]
    async fn test_search_page_decodes_items() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/issues"))
            .and(query_param("q", r#"repo:o/r is:merged milestone:"1.5.0""#))
            .and(query_param("page", "2"))
            .and(query_param("per_page", "100"))
            .and(header("User-Agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string(PAGE_BODY))
            .expect(1)
            .mount(&mock_server)
            .await;

        let search = GitHubSearch::with_api_url(mock_server.uri());
        let query = SearchQuery::merged_in_milestone("o/r", "1.5.0");
        let issues = search.search_page(&query, 2, 100).await.unwrap();

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].number, 4512);
        assert_eq!(issues[0].author_login, "alice");
        assert_eq!(issues[0].labels, vec!["kind/bug", "kind/ui"]);
        assert_eq!(issues[1].author_login, "ghost");
        assert!(issues[1].is_unlabeled());
    }

    #[tokio::test]
    async fn test_search_page_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/issues"))
            .respond_with(ResponseTemplate::new(422).set_body_string("Validation Failed"))
            .mount(&mock_server)
            .await;

        let search = GitHubSearch::with_api_url(mock_server.uri());
        let err = search
            .search_page(&SearchQuery::raw("repo:o/r"), 1, 100)
            .await
            .unwrap_err();

        match err {
            FetchError::Api { status, message } => {
                assert_eq!(status, 422);
                assert!(message.contains("Validation Failed"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_search_page_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/issues"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"items": "nope"}"#))
            .mount(&mock_server)
            .await;

        let search = GitHubSearch::with_api_url(mock_server.uri());
        let err = search
            .search_page(&SearchQuery::raw("repo:o/r"), 1, 100)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_page_zero_rejected() {
        let search = GitHubSearch::with_api_url("http://127.0.0.1:9");
        let err = search
            .search_page(&SearchQuery::raw("repo:o/r"), 0, 100)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::InvalidRequest(_)));
    }

    #[test]
    fn test_api_url_trailing_slash_trimmed() {
        let search = GitHubSearch::with_api_url("https://ghe.example.com/api/v3/");
        assert_eq!(search.api_url(), "https://ghe.example.com/api/v3");
    }
}
