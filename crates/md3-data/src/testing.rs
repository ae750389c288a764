//! Test double for [`ApiService`] that counts upstream calls.

use std::sync::atomic::{AtomicUsize, Ordering};

use md3_core::{GitHubSearchResponse, GitHubUser, Post, Product, ProductId, User};

use crate::api::ApiService;
use crate::error::{DataError, DataResult};

pub(crate) struct CountingApi {
    products: Vec<Product>,
    users: Vec<User>,
    posts: Vec<Post>,
    failure: Option<String>,
    product_list_calls: AtomicUsize,
    product_item_calls: AtomicUsize,
    user_list_calls: AtomicUsize,
    user_item_calls: AtomicUsize,
    post_calls: AtomicUsize,
    search_calls: AtomicUsize,
}

impl CountingApi {
    fn new(products: Vec<Product>, users: Vec<User>, posts: Vec<Post>) -> Self {
        CountingApi {
            products,
            users,
            posts,
            failure: None,
            product_list_calls: AtomicUsize::new(0),
            product_item_calls: AtomicUsize::new(0),
            user_list_calls: AtomicUsize::new(0),
            user_item_calls: AtomicUsize::new(0),
            post_calls: AtomicUsize::new(0),
            search_calls: AtomicUsize::new(0),
        }
    }

    /// Products with ids `1..=count`.
    pub fn with_products(count: i64) -> Self {
        let products = (1..=count)
            .map(|id| Product {
                id,
                title: format!("Product {}", id),
                price: id as f64,
                description: String::new(),
                category: "test".to_string(),
                image: String::new(),
                rating: None,
            })
            .collect();
        CountingApi::new(products, Vec::new(), Vec::new())
    }

    /// Users and posts with ids `1..=count`.
    pub fn with_people(count: i64) -> Self {
        let users = (1..=count)
            .map(|id| User {
                id,
                name: format!("User {}", id),
                username: format!("user{}", id),
                email: format!("user{}@example.com", id),
                address: None,
                phone: None,
                website: None,
                company: None,
            })
            .collect();
        let posts = (1..=count)
            .map(|id| Post {
                id,
                user_id: id,
                title: format!("Post {}", id),
                body: String::new(),
            })
            .collect();
        CountingApi::new(Vec::new(), users, posts)
    }

    /// Every call fails with an upstream error carrying `message`.
    pub fn failing(message: &str) -> Self {
        let mut api = CountingApi::new(Vec::new(), Vec::new(), Vec::new());
        api.failure = Some(message.to_string());
        api
    }

    fn check(&self, counter: &AtomicUsize) -> DataResult<()> {
        counter.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(DataError::upstream(message.clone())),
            None => Ok(()),
        }
    }

    pub fn product_list_calls(&self) -> usize {
        self.product_list_calls.load(Ordering::SeqCst)
    }

    pub fn product_item_calls(&self) -> usize {
        self.product_item_calls.load(Ordering::SeqCst)
    }

    pub fn user_list_calls(&self) -> usize {
        self.user_list_calls.load(Ordering::SeqCst)
    }

    pub fn user_item_calls(&self) -> usize {
        self.user_item_calls.load(Ordering::SeqCst)
    }

    pub fn post_calls(&self) -> usize {
        self.post_calls.load(Ordering::SeqCst)
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }
}

impl ApiService for CountingApi {
    async fn products(&self) -> DataResult<Vec<Product>> {
        self.check(&self.product_list_calls)?;
        Ok(self.products.clone())
    }

    async fn product(&self, id: ProductId) -> DataResult<Product> {
        self.check(&self.product_item_calls)?;
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| DataError::not_found("Product", id))
    }

    async fn users(&self) -> DataResult<Vec<User>> {
        self.check(&self.user_list_calls)?;
        Ok(self.users.clone())
    }

    async fn user(&self, id: i64) -> DataResult<User> {
        self.check(&self.user_item_calls)?;
        self.users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| DataError::not_found("User", id))
    }

    async fn posts(&self) -> DataResult<Vec<Post>> {
        self.check(&self.post_calls)?;
        Ok(self.posts.clone())
    }

    async fn search_github_users(&self, query: &str) -> DataResult<GitHubSearchResponse> {
        self.check(&self.search_calls)?;
        Ok(GitHubSearchResponse::from_items(vec![GitHubUser {
            id: 1,
            login: query.to_string(),
            avatar_url: String::new(),
            html_url: String::new(),
            account_type: "User".to_string(),
        }]))
    }
}
