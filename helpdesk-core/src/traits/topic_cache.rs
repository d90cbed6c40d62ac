//! Topic cache abstract Trait

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::CoreResult;
use crate::types::Topic;

/// Session-scoped copy of the last fetched topic list
///
/// Platform implementation:
/// - Console: `JsonFileTopicCache` (JSON file in the user cache directory)
/// - Default: `InMemoryTopicCache`
#[async_trait]
pub trait TopicCache: Send + Sync {
    /// Cached topics, `None` when nothing was stored yet
    async fn load(&self) -> CoreResult<Option<Vec<Topic>>>;

    /// Replace the cached topics
    async fn save(&self, topics: &[Topic]) -> CoreResult<()>;
}

/// In-memory topic cache
#[derive(Clone, Default)]
pub struct InMemoryTopicCache {
    topics: Arc<RwLock<Option<Vec<Topic>>>>,
}

impl InMemoryTopicCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TopicCache for InMemoryTopicCache {
    async fn load(&self) -> CoreResult<Option<Vec<Topic>>> {
        Ok(self.topics.read().await.clone())
    }

    async fn save(&self, topics: &[Topic]) -> CoreResult<()> {
        *self.topics.write().await = Some(topics.to_vec());
        Ok(())
    }
}
