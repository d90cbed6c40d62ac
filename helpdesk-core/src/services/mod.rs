//! 业务逻辑服务层

mod article_detail_controller;
mod article_locator;
mod article_view;
mod remote;
mod topic_store;

pub use article_detail_controller::ArticleDetailController;
pub use article_locator::{locate_article, locate_article_with_topic};
pub use article_view::{
    ArticleDraft, ArticleScreen, ArticleView, FormEvent, MountRequest, Notice,
    ViewEffect, ViewMode,
};
pub use remote::{RemoteCall, RemoteOutcome, ARTICLE_DELETE_PATH, ARTICLE_EDIT_PATH, ARTICLE_GET_ALL_PATH};
pub use topic_store::CachedTopicStore;
