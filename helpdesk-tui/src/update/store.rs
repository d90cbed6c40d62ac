use crate::i18n::t;
use crate::message::StoreMessage;
use crate::model::App;

/// 处理话题数据消息
pub fn update(app: &mut App, msg: StoreMessage) {
    match msg {
        StoreMessage::CacheProbed { warm } => {
            if let Some(request) = app.article.mount(warm) {
                log::debug!("Mounting article page with {request:?}");
                app.backend.load(request);
            }
        }

        StoreMessage::Updated { snapshot, error } => {
            app.topics = snapshot;
            if let Some(error) = error {
                app.set_status(format!("{}: {error}", t().status_bar.load_failed));
            }
        }
    }
}
