//! # User Repository
//!
//! JSONPlaceholder users and posts. Both lists are cached after the first
//! successful load; single-user lookups always go upstream.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use md3_core::{FetchResult, Post, User};

use crate::api::ApiService;

const UNKNOWN_ERROR: &str = "Unknown error";

/// Repository for user and post reads.
pub struct UserRepository<S> {
    api: Arc<S>,
    users_cache: RwLock<Option<Vec<User>>>,
    posts_cache: RwLock<Option<Vec<Post>>>,
}

impl<S: ApiService> UserRepository<S> {
    pub fn new(api: Arc<S>) -> Self {
        UserRepository {
            api,
            users_cache: RwLock::new(None),
            posts_cache: RwLock::new(None),
        }
    }

    pub async fn users(&self) -> FetchResult<Vec<User>> {
        if let Some(cached) = self.users_cache.read().await.as_ref() {
            return FetchResult::Success(cached.clone());
        }

        match self.api.users().await {
            Ok(users) => {
                debug!(count = users.len(), "Fetched users");
                *self.users_cache.write().await = Some(users.clone());
                FetchResult::Success(users)
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch users");
                FetchResult::Error(e.user_message(UNKNOWN_ERROR))
            }
        }
    }

    /// Single user, not cached.
    pub async fn user(&self, id: i64) -> FetchResult<User> {
        match self.api.user(id).await {
            Ok(user) => FetchResult::Success(user),
            Err(e) => {
                warn!(user_id = id, error = %e, "Failed to fetch user");
                FetchResult::Error(e.user_message(UNKNOWN_ERROR))
            }
        }
    }

    pub async fn posts(&self) -> FetchResult<Vec<Post>> {
        if let Some(cached) = self.posts_cache.read().await.as_ref() {
            return FetchResult::Success(cached.clone());
        }

        match self.api.posts().await {
            Ok(posts) => {
                debug!(count = posts.len(), "Fetched posts");
                *self.posts_cache.write().await = Some(posts.clone());
                FetchResult::Success(posts)
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch posts");
                FetchResult::Error(e.user_message(UNKNOWN_ERROR))
            }
        }
    }
}
