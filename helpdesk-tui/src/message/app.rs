use helpdesk_core::services::RemoteOutcome;

use super::{ArticleMessage, ModalMessage, StoreMessage};

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 返回上一页（编辑中时先取消编辑）
    GoBack,

    /// 重新获取话题
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 清除状态消息
    ClearStatus,

    /// 文章详情页消息
    Article(ArticleMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 话题数据
    Store(StoreMessage),

    /// 远程调用结果
    Remote(RemoteOutcome),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
