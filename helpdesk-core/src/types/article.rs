//! Topic and article type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A help-center article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Article ID (unique across all topics)
    #[serde(deserialize_with = "crate::utils::id::deserialize")]
    pub id: String,
    /// Title
    pub title: String,
    /// HTML body
    pub content: String,
    /// Last edit time
    #[serde(with = "crate::utils::datetime")]
    pub last_edited: DateTime<Utc>,
}

/// A topic grouping an ordered list of articles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// Topic ID
    #[serde(deserialize_with = "crate::utils::id::deserialize")]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Articles in display order
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// Read model exposed by an [`ArticleStore`](crate::traits::ArticleStore)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicsSnapshot {
    pub topics: Vec<Topic>,
    /// A load is in progress (or nothing was loaded yet)
    pub loading: bool,
}

impl TopicsSnapshot {
    /// Loaded snapshot
    #[must_use]
    pub fn ready(topics: Vec<Topic>) -> Self {
        Self {
            topics,
            loading: false,
        }
    }
}

impl Default for TopicsSnapshot {
    fn default() -> Self {
        Self {
            topics: Vec::new(),
            loading: true,
        }
    }
}
