use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::{colors, Styles};

/// 渲染弹窗
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Confirm { message, focus, .. } => render_confirm(frame, message, *focus),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn modal_block(title: &str, border: ratatui::style::Color) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors().modal_bg))
}

/// 确认弹窗
fn render_confirm(frame: &mut Frame, message: &str, focus: usize) {
    let texts = t();
    let c = colors();
    let area = centered_rect(54, 10, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block(texts.modal.confirm_title, c.error);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cancel_style = if focus == 0 {
        Styles::selected()
    } else {
        Style::default().fg(c.fg)
    };
    let confirm_style = if focus == 1 {
        Style::default().fg(c.selected_fg).bg(c.error)
    } else {
        Style::default().fg(c.error)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(message, Style::default().fg(c.fg)),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {} ", texts.article.cancel), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.article.delete), confirm_style),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let area = centered_rect(54, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block(title, c.error);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::styled(message, Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled(t().modal.close_hint, Styles::muted()),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let c = colors();
    let area = centered_rect(52, 17, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block(texts.help.title, c.border_focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let section = |title: &'static str| {
        Line::styled(
            title,
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        )
    };
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<11}"), Styles::hint_key()),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        section(texts.help.preview_section),
        entry("Alt+e", texts.help.edit_article),
        entry("Alt+d", texts.help.delete_article),
        entry("Alt+r", texts.help.refresh_topics),
        Line::from(""),
        section(texts.help.edit_section),
        entry("Tab/S-Tab", texts.help.switch_field),
        entry("Ctrl+s", texts.help.save_draft),
        entry("Esc", texts.help.cancel_edit),
        Line::from(""),
        entry("Alt+q", texts.help.quit),
        Line::from(""),
        Line::styled(texts.modal.close_hint, Styles::muted()),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
