//! 文章列表页
//!
//! 列表本身在网页管理面板中，这里只提示删除已完成。

use ratatui::{layout::Rect, style::Style, text::Line, widgets::Paragraph, Frame};

use crate::i18n::t;
use crate::view::theme::{colors, Styles};

pub fn render(frame: &mut Frame, area: Rect) {
    let texts = t();
    let content = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", texts.list.article_removed),
            Style::default().fg(colors().success),
        ),
        Line::from(""),
        Line::styled(format!("  {}", texts.list.list_elsewhere), Styles::muted()),
    ];
    frame.render_widget(Paragraph::new(content), area);
}
