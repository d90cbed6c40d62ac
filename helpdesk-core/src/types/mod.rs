//! 类型定义模块

mod article;
mod request;
mod response;

pub use article::{Article, Topic, TopicsSnapshot};
pub use request::{DeleteArticleRequest, EditArticleRequest};
pub use response::{ApiEnvelope, ApiStatus, TopicsPayload};
