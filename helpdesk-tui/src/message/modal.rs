/// 弹窗相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 在确认弹窗中切换焦点
    ToggleFocus,

    /// 确认/提交
    Confirm,
}
