use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Route};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    for (i, (key, desc)) in get_hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let mut hints = Vec::new();

    match app.router.current() {
        Route::ViewArticle { .. } if app.article.is_editing() => {
            hints.push(("Tab", texts.status_bar.next_field));
            hints.push(("Ctrl+s", texts.status_bar.submit));
            hints.push(("Esc", texts.article.cancel));
        }
        Route::ViewArticle { .. } => {
            hints.push(("Alt+e", texts.article.edit));
            hints.push(("Alt+d", texts.article.delete));
            hints.push(("Alt+r", texts.common.refresh));
        }
        Route::ListArticles => {
            hints.push(("Esc", texts.common.back));
        }
    }

    hints.push(("Alt+h", texts.common.help));
    hints.push(("Alt+q", texts.common.quit));
    hints
}
