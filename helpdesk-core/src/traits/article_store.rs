//! Topic store abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::TopicsSnapshot;

/// Reactive holder of the topic collection
///
/// The article view only reads snapshots and asks for refreshes; it never writes topics.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Current topics and loading flag
    async fn snapshot(&self) -> TopicsSnapshot;

    /// Whether a previously fetched topic list is available without a round trip
    async fn has_warm_cache(&self) -> bool;

    /// Cheap re-initialization from cached data
    async fn initialize(&self) -> CoreResult<()>;

    /// Full retrieval from the backend
    async fn retrieve(&self) -> CoreResult<()>;
}
