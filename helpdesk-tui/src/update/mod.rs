//! Update 层：消费消息，修改 Model，并通过 Backend 发起异步调用

mod article;
mod modal;
mod store;

use helpdesk_core::services::FormEvent;

use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::App;

/// 启动时调用一次：探测缓存，之后由 `StoreMessage::CacheProbed` 完成挂载
pub fn init(app: &App) {
    app.backend.probe_cache();
}

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::GoBack => go_back(app),

        AppMessage::Refresh => {
            app.set_status(t().status_bar.refreshing);
            app.backend.refresh();
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Article(article_msg) => article::update(app, article_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Store(store_msg) => store::update(app, store_msg),

        AppMessage::Remote(outcome) => article::apply_outcome(app, &outcome),

        AppMessage::Noop => {}
    }
}

/// Esc：关闭弹窗；编辑中则取消编辑并阻止默认的返回动作；否则回到上一页
fn go_back(app: &mut App) {
    if app.modal.is_open() {
        app.modal.close();
        app.clear_status();
        return;
    }

    let mut event = FormEvent::new();
    if app.article.cancel_edit(&mut event) {
        app.editor.reset();
        app.clear_status();
    }
    if event.is_default_prevented() {
        return;
    }

    if app.router.back() {
        app.clear_status();
    }
}
