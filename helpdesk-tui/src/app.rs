//! 应用主循环
//!
//! 每一轮：绘制 → 轮询按键（100ms）→ 消费 Backend 发回的消息 → 过期状态消息清理。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 状态栏消息的显示时长
const STATUS_TTL: Duration = Duration::from_secs(4);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, rx: &mut UnboundedReceiver<AppMessage>) -> Result<()> {
    update::init(app);

    loop {
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }

        while let Ok(msg) = rx.try_recv() {
            update::update(app, msg);
        }

        if app.status_expired(STATUS_TTL) {
            update::update(app, AppMessage::ClearStatus);
        }
    }

    Ok(())
}
