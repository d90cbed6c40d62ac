//! Navigation abstract Trait

/// Route shown after an article is deleted
pub const ARTICLE_LIST_ROUTE: &str = "/admin/panel/articles/list-articles";

/// Host router
pub trait Navigator: Send + Sync {
    /// Navigate to `route`
    fn push(&self, route: &str);
}
