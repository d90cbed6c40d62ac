//! Port trait definitions
//!
//! Everything the article view talks to outside its own state is injected through these traits.

mod api_client;
mod article_store;
mod confirm_prompt;
mod navigator;
mod topic_cache;

pub use api_client::ApiClient;
pub use article_store::ArticleStore;
pub use confirm_prompt::{ConfirmAction, ConfirmPrompt};
pub use navigator::{Navigator, ARTICLE_LIST_ROUTE};
pub use topic_cache::{InMemoryTopicCache, TopicCache};
