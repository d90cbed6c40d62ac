#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `ArticleDetailController` over the caching topic store.
//!
//! The backend is an in-process mock answering `/article/get-all`, `/article/edit`
//! and `/article/delete`; navigation and confirmation are recorded.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use helpdesk_core::error::{CoreError, CoreResult};
use helpdesk_core::services::{ArticleDraft, ArticleScreen, CachedTopicStore, FormEvent};
use helpdesk_core::traits::{
    ApiClient, ArticleStore, ConfirmAction, ConfirmPrompt, InMemoryTopicCache, Navigator,
    TopicCache,
};
use helpdesk_core::{ArticleDetailController, EditorValue};
use tokio::sync::RwLock;

// ===== Mock Implementations =====

/// Backend double: serves a fixed topic list and records every call.
struct FakeBackend {
    calls: RwLock<Vec<(String, serde_json::Value)>>,
    fail_writes: RwLock<bool>,
}

impl FakeBackend {
    fn new() -> Self {
        Self {
            calls: RwLock::new(Vec::new()),
            fail_writes: RwLock::new(false),
        }
    }

    async fn calls_to(&self, path: &str) -> Vec<serde_json::Value> {
        self.calls
            .read()
            .await
            .iter()
            .filter(|(p, _)| p == path)
            .map(|(_, data)| data.clone())
            .collect()
    }
}

#[async_trait]
impl ApiClient for FakeBackend {
    async fn call(&self, path: &str, data: serde_json::Value) -> CoreResult<serde_json::Value> {
        self.calls.write().await.push((path.to_string(), data));
        match path {
            "/article/get-all" => Ok(serde_json::json!([{
                "id": "t1",
                "name": "Getting started",
                "articles": [{
                    "id": "a1",
                    "title": "Hi",
                    "content": "<p>x</p>",
                    "lastEdited": 201604161427i64
                }]
            }])),
            "/article/edit" | "/article/delete" if *self.fail_writes.read().await => {
                Err(CoreError::Network("connection reset by peer".to_string()))
            }
            _ => Ok(serde_json::Value::Null),
        }
    }
}

#[derive(Default)]
struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn push(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_string());
    }
}

#[derive(Default)]
struct Prompt {
    pending: Option<(String, ConfirmAction)>,
}

impl ConfirmPrompt for Prompt {
    fn open_modal(&mut self, message: &str, on_confirm: ConfirmAction) {
        self.pending = Some((message.to_string(), on_confirm));
    }
}

// ===== Helpers =====

struct Harness {
    controller: ArticleDetailController,
    backend: Arc<FakeBackend>,
    navigator: Arc<RecordingNavigator>,
    cache: Arc<InMemoryTopicCache>,
}

async fn mounted(article_id: &str) -> Harness {
    let backend = Arc::new(FakeBackend::new());
    let cache = Arc::new(InMemoryTopicCache::new());
    let store: Arc<dyn ArticleStore> =
        Arc::new(CachedTopicStore::new(backend.clone(), cache.clone()));
    let navigator = Arc::new(RecordingNavigator::default());

    let mut controller =
        ArticleDetailController::new(article_id, store, backend.clone(), navigator.clone());
    controller.mount().await.expect("mount failed");

    Harness {
        controller,
        backend,
        navigator,
        cache,
    }
}

// ===== Scenarios =====

#[tokio::test]
async fn preview_renders_title_and_content() {
    let h = mounted("a1").await;
    let snapshot = h.controller.snapshot().await;

    match h.controller.view().screen(&snapshot) {
        ArticleScreen::Preview(article) => {
            assert_eq!(article.title, "Hi");
            assert_eq!(article.content, "<p>x</p>");
        }
        other => panic!("expected preview, got {other:?}"),
    }
    assert_eq!(h.backend.calls_to("/article/get-all").await.len(), 1);
    assert!(h.cache.load().await.unwrap().is_some());
}

#[tokio::test]
async fn missing_article_renders_not_found() {
    let h = mounted("missing").await;
    let snapshot = h.controller.snapshot().await;
    assert_eq!(h.controller.view().screen(&snapshot), ArticleScreen::NotFound);
}

#[tokio::test]
async fn save_updates_then_refreshes_once() {
    let mut h = mounted("a1").await;
    assert!(h.controller.edit().await);

    h.controller
        .submit(ArticleDraft {
            title: "Hi2".to_string(),
            content: EditorValue::from_html("<p>y</p>"),
        })
        .await
        .unwrap();

    assert_eq!(
        h.backend.calls_to("/article/edit").await,
        vec![serde_json::json!({"articleId": "a1", "title": "Hi2", "content": "<p>y</p>"})]
    );
    // mount + exactly one refresh
    assert_eq!(h.backend.calls_to("/article/get-all").await.len(), 2);
    assert!(!h.controller.view().is_editing());
    assert!(h.controller.view().draft().is_none());
}

#[tokio::test]
async fn failed_save_stays_in_edit() {
    let mut h = mounted("a1").await;
    *h.backend.fail_writes.write().await = true;
    h.controller.edit().await;

    let result = h
        .controller
        .submit(ArticleDraft {
            title: "Hi2".to_string(),
            content: EditorValue::from_html("<p>y</p>"),
        })
        .await;

    assert!(result.is_err());
    assert!(h.controller.view().is_editing());
    assert_eq!(h.controller.view().draft().unwrap().title, "Hi2");
    assert_eq!(h.backend.calls_to("/article/get-all").await.len(), 1);
}

#[tokio::test]
async fn cancel_makes_no_calls() {
    let mut h = mounted("a1").await;
    h.controller.edit().await;
    let before = h.backend.calls.read().await.len();

    let mut event = FormEvent::new();
    assert!(h.controller.cancel(&mut event));

    assert!(event.is_default_prevented());
    assert_eq!(h.backend.calls.read().await.len(), before);
    let snapshot = h.controller.snapshot().await;
    assert!(matches!(
        h.controller.view().screen(&snapshot),
        ArticleScreen::Preview(_)
    ));
}

#[tokio::test]
async fn confirmed_delete_navigates_to_list_once() {
    let mut h = mounted("a1").await;
    let mut prompt = Prompt::default();

    assert!(h.controller.delete(&mut prompt, "Delete this article?").await);
    let (message, action) = prompt.pending.take().unwrap();
    assert_eq!(message, "Delete this article?");

    h.controller.confirm(action).await.unwrap();

    assert_eq!(
        h.backend.calls_to("/article/delete").await,
        vec![serde_json::json!({"articleId": "a1"})]
    );
    assert_eq!(
        *h.navigator.routes.lock().unwrap(),
        vec!["/admin/panel/articles/list-articles".to_string()]
    );
}

#[tokio::test]
async fn declined_delete_issues_nothing() {
    let h = mounted("a1").await;
    let mut prompt = Prompt::default();

    h.controller.delete(&mut prompt, "Delete this article?").await;
    prompt.pending = None;

    assert!(h.backend.calls_to("/article/delete").await.is_empty());
    assert!(h.navigator.routes.lock().unwrap().is_empty());
}

#[tokio::test]
async fn failed_delete_does_not_navigate() {
    let mut h = mounted("a1").await;
    *h.backend.fail_writes.write().await = true;

    let result = h
        .controller
        .confirm(ConfirmAction::DeleteArticle {
            article_id: "a1".to_string(),
        })
        .await;

    assert!(matches!(result, Err(CoreError::Network(_))));
    assert!(h.navigator.routes.lock().unwrap().is_empty());
    assert!(h.controller.view().notice().is_some());
}
