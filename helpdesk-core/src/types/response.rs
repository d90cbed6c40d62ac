//! 后端响应相关类型定义

use serde::{Deserialize, Serialize};

use super::Topic;

/// Outcome flag of the backend envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Fail,
}

/// Response envelope wrapping every backend answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope {
    /// 是否成功
    pub status: ApiStatus,
    /// Error code or human readable message
    #[serde(default)]
    pub message: Option<String>,
    /// 响应数据
    #[serde(default)]
    pub data: serde_json::Value,
}

/// `data` of a successful `/article/get-all` call
///
/// The backend returns the topic list directly; a `{ "topics": [...] }` wrapper is accepted too.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TopicsPayload {
    List(Vec<Topic>),
    Wrapped { topics: Vec<Topic> },
}

impl TopicsPayload {
    #[must_use]
    pub fn into_topics(self) -> Vec<Topic> {
        match self {
            Self::List(topics) | Self::Wrapped { topics } => topics,
        }
    }
}
