use crate::i18n::t;
use crate::message::ModalMessage;
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Confirm { .. } => handle_confirm(app, msg),
        Modal::Error { .. } | Modal::Help => handle_simple_modal(app, msg),
    }
}

/// 确认弹窗：焦点在“确认”上按 Enter 才执行携带的动作，其余情况直接丢弃
fn handle_confirm(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::ToggleFocus => {
            if let Some(Modal::Confirm { ref mut focus, .. }) = app.modal.active {
                *focus = usize::from(*focus == 0);
            }
        }

        ModalMessage::Confirm => {
            let Some(Modal::Confirm { action, focus, .. }) = app.modal.active.take() else {
                return;
            };
            if focus == 1 {
                let call = app.article.confirm(action);
                app.set_status(t().status_bar.deleting);
                app.backend.execute(call);
            } else {
                app.clear_status();
            }
        }
    }
}

/// 错误/帮助弹窗：关闭时一并清掉文章页上的提示
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close | ModalMessage::Confirm => {
            app.modal.close();
            app.article.dismiss_notice();
        }
        ModalMessage::ToggleFocus => {}
    }
}
