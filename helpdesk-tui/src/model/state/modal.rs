//! 弹窗状态

use helpdesk_core::traits::{ConfirmAction, ConfirmPrompt};

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 确认弹窗，接受后执行 `action`
    Confirm {
        message: String,
        action: ConfirmAction,
        /// 焦点：0=取消, 1=确认
        focus: usize,
    },

    /// 错误提示
    Error { title: String, message: String },

    /// 帮助
    Help,
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}

impl ConfirmPrompt for ModalState {
    fn open_modal(&mut self, message: &str, on_confirm: ConfirmAction) {
        self.active = Some(Modal::Confirm {
            message: message.to_string(),
            action: on_confirm,
            focus: 0,
        });
    }
}
