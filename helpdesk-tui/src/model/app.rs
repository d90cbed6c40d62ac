use std::time::{Duration, Instant};

use helpdesk_core::types::TopicsSnapshot;
use helpdesk_core::ArticleView;

use super::{EditorState, ModalState, Route, Router};
use crate::backend::Backend;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 路由（同时作为核心库的 Navigator）
    pub router: Router,

    /// 最近一次的话题快照
    pub topics: TopicsSnapshot,

    /// 文章详情页状态机
    pub article: ArticleView,

    /// 编辑表单焦点
    pub editor: EditorState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 状态栏消息
    pub status_message: Option<String>,
    status_since: Option<Instant>,

    /// 异步服务
    pub backend: Backend,
}

impl App {
    /// 打开 `article_id` 的详情页
    pub fn new(article_id: &str, backend: Backend) -> Self {
        Self {
            should_quit: false,
            router: Router::new(Route::ViewArticle {
                article_id: article_id.to_string(),
            }),
            topics: TopicsSnapshot::default(),
            article: ArticleView::new(article_id),
            editor: EditorState::new(),
            modal: ModalState::new(),
            status_message: None,
            status_since: None,
            backend,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_since = Some(Instant::now());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_since = None;
    }

    /// 状态消息已显示超过 `ttl`
    pub fn status_expired(&self, ttl: Duration) -> bool {
        self.status_since.is_some_and(|since| since.elapsed() >= ttl)
    }
}
