//! Helpdesk Console Core Library
//!
//! Provides the platform-independent logic behind the admin article detail view:
//! - Article locator (lookup across the nested topic collection)
//! - View/edit state machine (`ArticleView`) and its async driver
//! - Remote article calls (`/article/edit`, `/article/delete`)
//! - A caching topic store fed by `/article/get-all`
//!
//! Storage, transport, navigation and confirmation prompts are abstracted through traits,
//! so the terminal console and the tests can inject their own implementations.

pub mod adapters;
pub mod error;
pub mod rich_text;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use rich_text::EditorValue;
pub use services::{ArticleDetailController, ArticleView};
pub use traits::{ApiClient, ArticleStore, ConfirmPrompt, Navigator, TopicCache};
