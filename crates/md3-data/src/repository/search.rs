//! # Search Repository
//!
//! GitHub user search. Results are never cached; a blank query is answered
//! locally with an empty result so screens can clear their list without a
//! round-trip.

use std::sync::Arc;

use tracing::{debug, warn};

use md3_core::validation::validate_search_query;
use md3_core::{FetchResult, GitHubSearchResponse};

use crate::api::ApiService;

const SEARCH_FAILED: &str = "Search failed";

pub struct SearchRepository<S> {
    api: Arc<S>,
}

impl<S: ApiService> SearchRepository<S> {
    pub fn new(api: Arc<S>) -> Self {
        SearchRepository { api }
    }

    /// Searches GitHub users by login.
    pub async fn search_users(&self, query: &str) -> FetchResult<GitHubSearchResponse> {
        let query = match validate_search_query(query) {
            Ok(q) => q,
            Err(e) => return FetchResult::Error(e.to_string()),
        };

        if query.is_empty() {
            return FetchResult::Success(GitHubSearchResponse::default());
        }

        debug!(query = %query, "Searching GitHub users");
        match self.api.search_github_users(&query).await {
            Ok(response) => FetchResult::Success(response),
            Err(e) => {
                warn!(query = %query, error = %e, "GitHub search failed");
                FetchResult::Error(e.user_message(SEARCH_FAILED))
            }
        }
    }
}
