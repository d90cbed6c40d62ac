use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ArticleMessage, ModalMessage};
use crate::model::{App, EditorField, Modal, Route};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resize 等事件由下一次绘制处理
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press，避免 Windows 终端上的重复按键
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 弹窗优先
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    match app.router.current() {
        Route::ViewArticle { .. } if app.article.is_editing() => {
            handle_edit_keys(key, app.editor.focus)
        }
        Route::ViewArticle { .. } => handle_preview_keys(key),
        Route::ListArticles => AppMessage::Noop,
    }
}

/// 预览模式
fn handle_preview_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Article(ArticleMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Article(ArticleMessage::Delete);
    }
    if key.modifiers.is_empty() && key.code == KeyCode::Char('?') {
        return AppMessage::ShowHelp;
    }
    AppMessage::Noop
}

/// 编辑表单
fn handle_edit_keys(key: KeyEvent, focus: EditorField) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Article(ArticleMessage::Submit);
    }

    let typing = !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    match key.code {
        KeyCode::Tab => AppMessage::Article(ArticleMessage::NextField),
        KeyCode::BackTab => AppMessage::Article(ArticleMessage::PrevField),
        KeyCode::Enter => AppMessage::Article(ArticleMessage::Enter),
        KeyCode::Backspace if focus.is_input() => AppMessage::Article(ArticleMessage::Backspace),
        KeyCode::Char(ch) if focus.is_input() && typing => {
            AppMessage::Article(ArticleMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}

/// 弹窗
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::Confirm { .. } => match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                AppMessage::Modal(ModalMessage::ToggleFocus)
            }
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
        Modal::Error { .. } | Modal::Help => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
    }
}
