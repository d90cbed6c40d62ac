//! 简体中文

use super::keys::{
    ArticleTexts, CommonTexts, HelpTexts, ListTexts, ModalTexts, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "帮助中心控制台",
        loading: "加载中...",
        back: "返回",
        quit: "退出",
        refresh: "刷新",
        help: "帮助",
    },

    article: ArticleTexts {
        page_title: "文章",
        article_not_found: "未找到文章",
        edit: "编辑",
        delete: "删除",
        save: "保存",
        cancel: "取消",
        title: "标题",
        content: "内容",
        last_edited_in: "最后编辑于 {date}",
        delete_article_description: "确定要删除这篇文章吗？此操作无法撤销。",
        editing: "编辑中",
        content_hint: "HTML 标记，Enter 换行",
    },

    list: ListTexts {
        title: "文章列表",
        article_removed: "文章已删除。",
        list_elsewhere: "请在网页管理面板中打开文章列表继续操作。",
    },

    modal: ModalTexts {
        confirm_title: "请确认",
        error_title: "请求失败",
        close_hint: "按 Esc 或 Enter 关闭",
    },

    status_bar: StatusBarTexts {
        refreshing: "正在刷新话题...",
        saving: "正在保存文章...",
        deleting: "正在删除文章...",
        saved: "文章已保存",
        load_failed: "无法加载话题",
        next_field: "下一字段",
        submit: "提交",
    },

    help: HelpTexts {
        title: "帮助",
        preview_section: "查看文章",
        edit_section: "编辑",
        edit_article: "编辑文章",
        delete_article: "删除文章",
        refresh_topics: "重新加载话题",
        switch_field: "切换字段",
        save_draft: "保存",
        cancel_edit: "取消编辑",
        quit: "退出",
    },
};
