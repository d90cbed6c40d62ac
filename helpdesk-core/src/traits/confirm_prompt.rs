//! Confirmation prompt abstract Trait

/// Continuation carried by a confirmation prompt, executed when the user accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteArticle { article_id: String },
}

/// "Are you sure?" dialog
pub trait ConfirmPrompt {
    /// Show `message`; `on_confirm` is handed back to the view if the user accepts
    fn open_modal(&mut self, message: &str, on_confirm: ConfirmAction);
}
