use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use helpdesk_core::services::locate_article_with_topic;

use crate::i18n::t;
use crate::model::{App, Route};

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_title_bar(frame, main_layout[0]);
    render_page_content(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 弹窗在最上层
    components::modal::render(app, frame);
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(" {} v{}", t().common.app_name, env!("CARGO_PKG_VERSION")))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 根据当前路由渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let route = app.router.current();
    let page_title = page_title(app, &route);

    let block = Block::default()
        .title(format!(" {page_title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(!app.modal.is_open()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match route {
        Route::ViewArticle { .. } => pages::article::render(app, frame, inner_area),
        Route::ListArticles => pages::article_list::render(frame, inner_area),
    }
}

/// 页面标题；文章页带上所属话题作为面包屑
fn page_title(app: &App, route: &Route) -> String {
    let texts = t();
    match route {
        Route::ViewArticle { article_id } => {
            let topic = if app.topics.loading {
                None
            } else {
                locate_article_with_topic(&app.topics.topics, article_id)
                    .map(|(topic, _)| topic.name.as_str())
                    .filter(|name| !name.is_empty())
            };
            let mut title = match topic {
                Some(name) => format!("{name} › {}", texts.article.page_title),
                None => texts.article.page_title.to_string(),
            };
            if app.article.is_editing() {
                title = format!("{title} · {}", texts.article.editing);
            }
            title
        }
        Route::ListArticles => texts.list.title.to_string(),
    }
}
