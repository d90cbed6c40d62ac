//! Remote call payloads

use serde::{Deserialize, Serialize};

/// `/article/edit` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditArticleRequest {
    /// Article ID
    pub article_id: String,
    /// New title
    pub title: String,
    /// New HTML body
    pub content: String,
}

/// `/article/delete` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteArticleRequest {
    /// Article ID
    pub article_id: String,
}
