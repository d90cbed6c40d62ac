//! 路由
//!
//! 路由字符串与网页管理面板一致，`Router` 同时充当核心库的 [`Navigator`]。

use std::sync::{Mutex, PoisonError};

use helpdesk_core::traits::{Navigator, ARTICLE_LIST_ROUTE};

const VIEW_ARTICLE_PREFIX: &str = "/admin/panel/articles/view-article/";

/// 页面路由
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// 文章详情
    ViewArticle { article_id: String },
    /// 文章列表
    ListArticles,
}

impl Route {
    /// 解析路由字符串
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        if path == ARTICLE_LIST_ROUTE {
            return Some(Self::ListArticles);
        }
        path.strip_prefix(VIEW_ARTICLE_PREFIX)
            .filter(|id| !id.is_empty() && !id.contains('/'))
            .map(|id| Self::ViewArticle {
                article_id: id.to_string(),
            })
    }

    pub fn to_path(&self) -> String {
        match self {
            Self::ViewArticle { article_id } => format!("{VIEW_ARTICLE_PREFIX}{article_id}"),
            Self::ListArticles => ARTICLE_LIST_ROUTE.to_string(),
        }
    }
}

/// 路由历史
#[derive(Debug)]
pub struct Router {
    history: Mutex<Vec<Route>>,
}

impl Router {
    pub fn new(initial: Route) -> Self {
        Self {
            history: Mutex::new(vec![initial]),
        }
    }

    pub fn current(&self) -> Route {
        let history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
        history
            .last()
            .cloned()
            .unwrap_or(Route::ListArticles)
    }

    /// 返回上一页；已在第一页时返回 false
    pub fn back(&self) -> bool {
        let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
        if history.len() > 1 {
            history.pop();
            true
        } else {
            false
        }
    }

    /// 用 `route` 替换当前页，被替换的页面不会再出现在历史里
    pub fn replace(&self, route: &str) {
        let Some(route) = parse_or_warn(route) else {
            return;
        };
        log::info!("Replacing current page with {}", route.to_path());
        let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
        history.pop();
        history.push(route);
    }
}

fn parse_or_warn(path: &str) -> Option<Route> {
    let route = Route::parse(path);
    if route.is_none() {
        log::warn!("Ignoring navigation to unknown route {path}");
    }
    route
}

impl Navigator for Router {
    fn push(&self, route: &str) {
        let Some(route) = parse_or_warn(route) else {
            return;
        };
        log::info!("Navigating to {}", route.to_path());
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }
}
