#![allow(clippy::unwrap_used, clippy::expect_used)]
//! 测试辅助：内存中的 store / API 替身，以及驱动 Backend 消息的小工具

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use helpdesk_core::types::{Article, Topic, TopicsSnapshot};
use helpdesk_core::{ApiClient, ArticleStore, CoreError, CoreResult};
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::backend::Backend;
use crate::message::AppMessage;
use crate::model::App;

pub fn sample_topics() -> Vec<Topic> {
    vec![Topic {
        id: "t1".to_string(),
        name: "Getting started".to_string(),
        articles: vec![Article {
            id: "a1".to_string(),
            title: "Hi".to_string(),
            content: "<p>x</p>".to_string(),
            last_edited: Utc.with_ymd_and_hms(2016, 4, 16, 14, 27, 0).unwrap(),
        }],
    }]
}

pub struct StubStore {
    topics: Vec<Topic>,
    retrieve_calls: AtomicUsize,
}

impl StubStore {
    pub fn retrieve_count(&self) -> usize {
        self.retrieve_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleStore for StubStore {
    async fn snapshot(&self) -> TopicsSnapshot {
        TopicsSnapshot::ready(self.topics.clone())
    }

    async fn has_warm_cache(&self) -> bool {
        false
    }

    async fn initialize(&self) -> CoreResult<()> {
        Ok(())
    }

    async fn retrieve(&self) -> CoreResult<()> {
        self.retrieve_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingApi {
    calls: Mutex<Vec<(String, serde_json::Value)>>,
    fail: AtomicBool,
}

impl RecordingApi {
    pub fn calls(&self) -> Vec<(String, serde_json::Value)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn fail_writes(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ApiClient for RecordingApi {
    async fn call(&self, path: &str, data: serde_json::Value) -> CoreResult<serde_json::Value> {
        self.calls.lock().unwrap().push((path.to_string(), data));
        if self.fail.load(Ordering::SeqCst) {
            return Err(CoreError::Network("connection refused".to_string()));
        }
        Ok(serde_json::Value::Null)
    }
}

pub struct Harness {
    pub app: App,
    pub store: Arc<StubStore>,
    pub api: Arc<RecordingApi>,
    runtime: Runtime,
    rx: UnboundedReceiver<AppMessage>,
}

/// App 打开 `article_id`，话题已加载
pub fn test_app(article_id: &str) -> Harness {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    let (tx, rx) = mpsc::unbounded_channel();
    let store = Arc::new(StubStore {
        topics: sample_topics(),
        retrieve_calls: AtomicUsize::new(0),
    });
    let api = Arc::new(RecordingApi::default());
    let backend = Backend::new(runtime.handle().clone(), store.clone(), api.clone(), tx);

    let mut app = App::new(article_id, backend);
    app.topics = TopicsSnapshot::ready(sample_topics());

    Harness {
        app,
        store,
        api,
        runtime,
        rx,
    }
}

/// 运行已 spawn 的任务，直到收到下一条 Backend 消息
pub fn drain_one(harness: &mut Harness) -> AppMessage {
    let rx = &mut harness.rx;
    harness
        .runtime
        .block_on(rx.recv())
        .expect("backend channel closed")
}
