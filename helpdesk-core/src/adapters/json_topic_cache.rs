//! Topic cache
//!
//! 使用 JSON 文件存储最近一次获取的话题列表
//! 实现 TopicCache trait

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::{CoreError, CoreResult};
use crate::traits::TopicCache;
use crate::types::Topic;

/// JSON-file backed [`TopicCache`]
pub struct JsonFileTopicCache {
    path: PathBuf,
}

impl JsonFileTopicCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `{cache_dir}/helpdesk-console/topics.json`
    pub fn default_path() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("helpdesk-console")
            .join("topics.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileTopicCache {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

#[async_trait]
impl TopicCache for JsonFileTopicCache {
    async fn load(&self) -> CoreResult<Option<Vec<Topic>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CoreError::Storage(e.to_string()))?;

        let topics: Vec<Topic> = serde_json::from_str(&content)
            .map_err(|e| CoreError::Serialization(e.to_string()))?;

        Ok(Some(topics))
    }

    async fn save(&self, topics: &[Topic]) -> CoreResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| CoreError::Storage(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(topics)
            .map_err(|e| CoreError::Serialization(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| CoreError::Storage(e.to_string()))?;

        Ok(())
    }
}
