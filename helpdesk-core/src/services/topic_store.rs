//! Caching topic store
//!
//! Implements [`ArticleStore`] on top of the backend `/article/get-all` call and a
//! session-scoped [`TopicCache`].

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::remote::ARTICLE_GET_ALL_PATH;
use crate::traits::{ApiClient, ArticleStore, TopicCache};
use crate::types::{Topic, TopicsPayload, TopicsSnapshot};

/// Topic store backed by the API and a topic cache
pub struct CachedTopicStore {
    api: Arc<dyn ApiClient>,
    cache: Arc<dyn TopicCache>,
    state: RwLock<TopicsSnapshot>,
}

impl CachedTopicStore {
    #[must_use]
    pub fn new(api: Arc<dyn ApiClient>, cache: Arc<dyn TopicCache>) -> Self {
        Self {
            api,
            cache,
            state: RwLock::new(TopicsSnapshot::default()),
        }
    }

    async fn begin_loading(&self) {
        self.state.write().await.loading = true;
    }

    async fn finish(&self, topics: Vec<Topic>) {
        *self.state.write().await = TopicsSnapshot::ready(topics);
    }

    /// A failed load keeps whatever topics were shown before
    async fn abort_loading(&self) {
        self.state.write().await.loading = false;
    }

    async fn fetch(&self) -> CoreResult<Vec<Topic>> {
        let data = self
            .api
            .call(ARTICLE_GET_ALL_PATH, serde_json::json!({}))
            .await?;
        let payload: TopicsPayload =
            serde_json::from_value(data).map_err(|e| CoreError::Serialization(e.to_string()))?;
        Ok(payload.into_topics())
    }
}

#[async_trait]
impl ArticleStore for CachedTopicStore {
    async fn snapshot(&self) -> TopicsSnapshot {
        self.state.read().await.clone()
    }

    async fn has_warm_cache(&self) -> bool {
        match self.cache.load().await {
            Ok(cached) => cached.is_some(),
            Err(e) => {
                e.log("Reading topic cache failed");
                false
            }
        }
    }

    async fn initialize(&self) -> CoreResult<()> {
        self.begin_loading().await;
        match self.cache.load().await {
            Ok(Some(topics)) => {
                log::info!("Initialized {} topics from cache", topics.len());
                self.finish(topics).await;
                Ok(())
            }
            Ok(None) => {
                log::info!("Topic cache is empty, retrieving");
                self.retrieve().await
            }
            Err(e) => {
                self.abort_loading().await;
                Err(e)
            }
        }
    }

    async fn retrieve(&self) -> CoreResult<()> {
        self.begin_loading().await;
        match self.fetch().await {
            Ok(topics) => {
                log::info!("Retrieved {} topics", topics.len());
                if let Err(e) = self.cache.save(&topics).await {
                    e.log("Writing topic cache failed");
                }
                self.finish(topics).await;
                Ok(())
            }
            Err(e) => {
                e.log("Retrieving topics failed");
                self.abort_loading().await;
                Err(e)
            }
        }
    }
}
