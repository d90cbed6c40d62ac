//! Rich-text editor value
//!
//! The console edits article bodies in markup mode: the editor value holds the HTML source
//! the user is working on, and submission sends that source back untouched.
//! Sanitizing only happens on the way to the terminal, in [`html_to_text`].

/// Internal value of the content editor
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorValue {
    markup: String,
}

impl EditorValue {
    /// Seed the editor from an article's stored HTML
    pub fn from_html(html: &str) -> Self {
        Self {
            markup: html.to_string(),
        }
    }

    /// HTML for submission, exactly as edited
    pub fn to_html(&self) -> String {
        self.markup.clone()
    }

    /// Raw markup as currently typed
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn is_empty(&self) -> bool {
        self.markup.trim().is_empty()
    }

    pub fn push(&mut self, ch: char) {
        self.markup.push(ch);
    }

    pub fn newline(&mut self) {
        self.markup.push('\n');
    }

    pub fn backspace(&mut self) {
        self.markup.pop();
    }
}

/// Render HTML as wrapped plain text for terminal display.
///
/// Script and style blocks are cleaned out first. Falls back to the raw markup
/// when the converter rejects the input.
pub fn html_to_text(html: &str, width: usize) -> String {
    let cleaned = ammonia::clean(html);
    match html2text::from_read(cleaned.as_bytes(), width.max(1)) {
        Ok(text) => text,
        Err(e) => {
            log::debug!("html2text failed ({e}), showing raw markup");
            html.to_string()
        }
    }
}
