//! 文章详情页：预览与编辑表单

use helpdesk_core::rich_text::html_to_text;
use helpdesk_core::services::{ArticleDraft, ArticleScreen};
use helpdesk_core::types::Article;
use helpdesk_core::utils::datetime::to_display_string;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::{last_edited_in, t};
use crate::model::{App, EditorField};
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    match app.article.screen(&app.topics) {
        ArticleScreen::Loading => render_message(frame, area, t().common.loading, Styles::muted()),
        ArticleScreen::NotFound => render_message(
            frame,
            area,
            t().article.article_not_found,
            Style::default().fg(colors().error),
        ),
        ArticleScreen::Preview(article) => render_preview(app, article, frame, area),
        ArticleScreen::Edit { draft, .. } => render_edit(app, draft, frame, area),
    }
}

fn render_message(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let content = vec![Line::from(""), Line::styled(format!("  {text}"), style)];
    frame.render_widget(Paragraph::new(content), area);
}

fn render_preview(app: &App, article: &Article, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let notice_height = u16::from(app.article.notice().is_some());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // 操作按钮
            Constraint::Length(2),             // 标题
            Constraint::Min(1),                // 正文
            Constraint::Length(1),             // 最后编辑时间
            Constraint::Length(notice_height), // 提示
        ])
        .split(area);

    let buttons = Line::from(vec![
        Span::styled(" Alt+e ", Styles::hint_key()),
        Span::styled(texts.article.edit, Style::default().fg(c.fg)),
        Span::raw("    "),
        Span::styled(" Alt+d ", Styles::hint_key()),
        Span::styled(texts.article.delete, Style::default().fg(c.error)),
    ]);
    frame.render_widget(Paragraph::new(buttons), rows[0]);

    let title = Paragraph::new(Line::styled(
        article.title.as_str(),
        Styles::title().add_modifier(Modifier::UNDERLINED),
    ));
    frame.render_widget(title, rows[1]);

    let body = html_to_text(&article.content, usize::from(rows[2].width));
    frame.render_widget(
        Paragraph::new(body)
            .style(Style::default().fg(c.fg))
            .wrap(Wrap { trim: false }),
        rows[2],
    );

    let edited = last_edited_in(&to_display_string(&article.last_edited));
    frame.render_widget(Paragraph::new(edited).style(Styles::muted()), rows[3]);

    if let Some(notice) = app.article.notice() {
        frame.render_widget(
            Paragraph::new(notice.message.as_str()).style(Style::default().fg(c.error)),
            rows[4],
        );
    }
}

fn render_edit(app: &App, draft: &ArticleDraft, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let focus = app.editor.focus;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题输入框
            Constraint::Min(3),    // 内容输入框
            Constraint::Length(1), // 按钮
        ])
        .split(area);

    let input_block = |label: &str, field: EditorField| {
        Block::default()
            .title(format!(" {label} "))
            .borders(Borders::ALL)
            .border_style(Styles::border(focus == field))
    };

    let title_block = input_block(texts.article.title, EditorField::Title);
    let title_inner = title_block.inner(rows[0]);
    frame.render_widget(
        Paragraph::new(draft.title.as_str())
            .style(Style::default().fg(c.fg))
            .block(title_block),
        rows[0],
    );

    let content_label = format!("{} ({})", texts.article.content, texts.article.content_hint);
    let content_block = input_block(&content_label, EditorField::Content);
    let content_inner = content_block.inner(rows[1]);
    frame.render_widget(
        Paragraph::new(draft.content.markup())
            .style(Style::default().fg(c.fg))
            .block(content_block),
        rows[1],
    );

    let button = |label: &str, field: EditorField| {
        let style = if focus == field {
            Styles::selected()
        } else {
            Style::default().fg(c.fg)
        };
        Span::styled(format!(" {label} "), style)
    };
    let mut buttons = vec![
        button(texts.article.save, EditorField::Save),
        Span::raw("  "),
        button(texts.article.cancel, EditorField::Cancel),
    ];
    if app.editor.submitting {
        buttons.push(Span::styled(
            format!("  {}", texts.status_bar.saving),
            Style::default().fg(c.warning),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(buttons)), rows[2]);

    // 光标位于当前输入框的文本末尾
    match focus {
        EditorField::Title => {
            let x = title_inner.x + text_width(&draft.title);
            frame.set_cursor_position((x.min(title_inner.right().saturating_sub(1)), title_inner.y));
        }
        EditorField::Content => {
            let (col, row) = end_of_text(draft.content.markup());
            let x = (content_inner.x + col).min(content_inner.right().saturating_sub(1));
            let y = (content_inner.y + row).min(content_inner.bottom().saturating_sub(1));
            frame.set_cursor_position((x, y));
        }
        EditorField::Save | EditorField::Cancel => {}
    }
}

fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// 文本末尾所在的 (列, 行)
fn end_of_text(text: &str) -> (u16, u16) {
    let row = text.matches('\n').count();
    let last_line = text.rsplit('\n').next().unwrap_or_default();
    (
        text_width(last_line),
        u16::try_from(row).unwrap_or(u16::MAX),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_follows_last_line() {
        assert_eq!(end_of_text(""), (0, 0));
        assert_eq!(end_of_text("<p>x</p>"), (8, 0));
        assert_eq!(end_of_text("<p>\n中文"), (4, 1));
    }
}
