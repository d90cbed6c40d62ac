//! Remote call abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;

/// Backend request function
///
/// Platform implementation:
/// - Console: `HttpApiClient` (reqwest)
/// - Tests: `MockApiClient`
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Issue a call and resolve with the response `data` on success
    ///
    /// # Arguments
    /// * `path` - Endpoint path, e.g. `/article/edit`
    /// * `data` - JSON object payload
    async fn call(&self, path: &str, data: serde_json::Value) -> CoreResult<serde_json::Value>;
}
