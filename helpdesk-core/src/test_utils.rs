//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::ArticleDetailController;
use crate::traits::{ApiClient, ArticleStore, ConfirmAction, ConfirmPrompt, Navigator};
use crate::types::{Article, Topic, TopicsSnapshot};

// ===== Fixtures =====

pub fn make_article(id: &str, title: &str) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        content: format!("<p>{title}</p>"),
        last_edited: Utc.with_ymd_and_hms(2016, 4, 16, 14, 27, 0).unwrap(),
    }
}

pub fn make_topic(id: &str, articles: Vec<Article>) -> Topic {
    Topic {
        id: id.to_string(),
        name: format!("Topic {id}"),
        articles,
    }
}

/// `[{id: "t1", articles: [{id: "a1", title: "Hi", content: "<p>x</p>"}]}]`
pub fn sample_topics() -> Vec<Topic> {
    let mut article = make_article("a1", "Hi");
    article.content = "<p>x</p>".to_string();
    vec![make_topic("t1", vec![article])]
}

// ===== MockApiClient =====

pub struct MockApiClient {
    calls: RwLock<Vec<(String, serde_json::Value)>>,
    responses: RwLock<HashMap<String, serde_json::Value>>,
    failures: RwLock<HashMap<String, String>>,
}

impl MockApiClient {
    pub fn new() -> Self {
        Self {
            calls: RwLock::new(Vec::new()),
            responses: RwLock::new(HashMap::new()),
            failures: RwLock::new(HashMap::new()),
        }
    }

    /// Calls received so far, as `(path, data)`
    pub async fn calls(&self) -> Vec<(String, serde_json::Value)> {
        self.calls.read().await.clone()
    }

    pub async fn respond(&self, path: &str, data: serde_json::Value) {
        self.responses.write().await.insert(path.to_string(), data);
    }

    /// Make every call to `path` fail with an API error
    pub async fn fail_path(&self, path: &str, message: &str) {
        self.failures
            .write()
            .await
            .insert(path.to_string(), message.to_string());
    }
}

#[async_trait]
impl ApiClient for MockApiClient {
    async fn call(&self, path: &str, data: serde_json::Value) -> CoreResult<serde_json::Value> {
        self.calls.write().await.push((path.to_string(), data));
        if let Some(message) = self.failures.read().await.get(path) {
            return Err(CoreError::Api {
                path: path.to_string(),
                message: message.clone(),
            });
        }
        Ok(self
            .responses
            .read()
            .await
            .get(path)
            .cloned()
            .unwrap_or(serde_json::Value::Null))
    }
}

// ===== MockArticleStore =====

pub struct MockArticleStore {
    snapshot: RwLock<TopicsSnapshot>,
    warm: AtomicBool,
    initialize_calls: AtomicUsize,
    retrieve_calls: AtomicUsize,
}

impl MockArticleStore {
    pub fn with_topics(topics: Vec<Topic>) -> Self {
        Self {
            snapshot: RwLock::new(TopicsSnapshot::ready(topics)),
            warm: AtomicBool::new(false),
            initialize_calls: AtomicUsize::new(0),
            retrieve_calls: AtomicUsize::new(0),
        }
    }

    pub fn set_warm(&self, warm: bool) {
        self.warm.store(warm, Ordering::SeqCst);
    }

    pub fn initialize_count(&self) -> usize {
        self.initialize_calls.load(Ordering::SeqCst)
    }

    pub fn retrieve_count(&self) -> usize {
        self.retrieve_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleStore for MockArticleStore {
    async fn snapshot(&self) -> TopicsSnapshot {
        self.snapshot.read().await.clone()
    }

    async fn has_warm_cache(&self) -> bool {
        self.warm.load(Ordering::SeqCst)
    }

    async fn initialize(&self) -> CoreResult<()> {
        self.initialize_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn retrieve(&self) -> CoreResult<()> {
        self.retrieve_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ===== MockNavigator =====

#[derive(Default)]
pub struct MockNavigator {
    routes: Mutex<Vec<String>>,
}

impl MockNavigator {
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl Navigator for MockNavigator {
    fn push(&self, route: &str) {
        if let Ok(mut routes) = self.routes.lock() {
            routes.push(route.to_string());
        }
    }
}

// ===== RecordingPrompt =====

#[derive(Default)]
pub struct RecordingPrompt {
    pub opened: Vec<(String, ConfirmAction)>,
}

impl ConfirmPrompt for RecordingPrompt {
    fn open_modal(&mut self, message: &str, on_confirm: ConfirmAction) {
        self.opened.push((message.to_string(), on_confirm));
    }
}

// ===== Factories =====

/// Controller over [`sample_topics`] with fresh mocks
pub fn create_test_controller(
    article_id: &str,
) -> (
    ArticleDetailController,
    Arc<MockArticleStore>,
    Arc<MockApiClient>,
    Arc<MockNavigator>,
) {
    let store = Arc::new(MockArticleStore::with_topics(sample_topics()));
    let api = Arc::new(MockApiClient::new());
    let navigator = Arc::new(MockNavigator::default());
    let controller =
        ArticleDetailController::new(article_id, store.clone(), api.clone(), navigator.clone());
    (controller, store, api, navigator)
}
