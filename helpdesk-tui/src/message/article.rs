/// 文章详情页消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleMessage {
    /// 进入编辑
    Edit,

    /// 请求删除（弹出确认框）
    Delete,

    /// 下一个表单元素
    NextField,

    /// 上一个表单元素
    PrevField,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// Enter：内容框换行，按钮上触发按钮
    Enter,

    /// 提交表单（Ctrl+S）
    Submit,
}
