//! 翻译键定义
//!
//! 每个页面/组件一组文本，所有语言表都必须填满同样的字段。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本
    pub common: CommonTexts,
    /// 文章详情页
    pub article: ArticleTexts,
    /// 文章列表页
    pub list: ListTexts,
    /// 弹窗
    pub modal: ModalTexts,
    /// 状态栏
    pub status_bar: StatusBarTexts,
    /// 帮助弹窗
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub back: &'static str,
    pub quit: &'static str,
    pub refresh: &'static str,
    pub help: &'static str,
}

// ============================================================================
// 文章详情页
// ============================================================================

pub struct ArticleTexts {
    pub page_title: &'static str,
    pub article_not_found: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    /// 含 `{date}` 占位符
    pub last_edited_in: &'static str,
    pub delete_article_description: &'static str,
    pub editing: &'static str,
    pub content_hint: &'static str,
}

// ============================================================================
// 文章列表页
// ============================================================================

pub struct ListTexts {
    pub title: &'static str,
    pub article_removed: &'static str,
    pub list_elsewhere: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

pub struct ModalTexts {
    pub confirm_title: &'static str,
    pub error_title: &'static str,
    pub close_hint: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

pub struct StatusBarTexts {
    pub refreshing: &'static str,
    pub saving: &'static str,
    pub deleting: &'static str,
    pub saved: &'static str,
    pub load_failed: &'static str,
    pub next_field: &'static str,
    pub submit: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

pub struct HelpTexts {
    pub title: &'static str,
    pub preview_section: &'static str,
    pub edit_section: &'static str,
    pub edit_article: &'static str,
    pub delete_article: &'static str,
    pub refresh_topics: &'static str,
    pub switch_field: &'static str,
    pub save_draft: &'static str,
    pub cancel_edit: &'static str,
    pub quit: &'static str,
}
