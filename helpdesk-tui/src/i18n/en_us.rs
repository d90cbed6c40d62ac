//! English (United States)

use super::keys::{
    ArticleTexts, CommonTexts, HelpTexts, ListTexts, ModalTexts, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Helpdesk Console",
        loading: "Loading...",
        back: "Back",
        quit: "Quit",
        refresh: "Refresh",
        help: "Help",
    },

    article: ArticleTexts {
        page_title: "Article",
        article_not_found: "Article not found",
        edit: "Edit",
        delete: "Delete",
        save: "Save",
        cancel: "Cancel",
        title: "Title",
        content: "Content",
        last_edited_in: "Last edited in {date}",
        delete_article_description: "Are you sure you want to delete this article? This action cannot be undone.",
        editing: "Editing",
        content_hint: "HTML markup, Enter for a new line",
    },

    list: ListTexts {
        title: "Articles",
        article_removed: "The article was deleted.",
        list_elsewhere: "Open the article list in the web admin panel to continue.",
    },

    modal: ModalTexts {
        confirm_title: "Please confirm",
        error_title: "Request failed",
        close_hint: "Press Esc or Enter to close",
    },

    status_bar: StatusBarTexts {
        refreshing: "Refreshing topics...",
        saving: "Saving article...",
        deleting: "Deleting article...",
        saved: "Article saved",
        load_failed: "Could not load topics",
        next_field: "Next field",
        submit: "Submit",
    },

    help: HelpTexts {
        title: "Help",
        preview_section: "Viewing an article",
        edit_section: "Editing",
        edit_article: "Edit article",
        delete_article: "Delete article",
        refresh_topics: "Reload topics",
        switch_field: "Switch field",
        save_draft: "Save",
        cancel_edit: "Cancel editing",
        quit: "Quit",
    },
};
