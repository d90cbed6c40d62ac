//! Message 层：事件被翻译成消息，再交给 Update 层消费
//!
//! - `AppMessage`: 顶层消息
//! - `ArticleMessage`: 文章详情页（预览与编辑表单）
//! - `ModalMessage`: 弹窗
//! - `StoreMessage`: 话题数据加载结果（由 Backend 发回）

mod app;
mod article;
mod modal;
mod store;

pub use app::AppMessage;
pub use article::ArticleMessage;
pub use modal::ModalMessage;
pub use store::StoreMessage;
