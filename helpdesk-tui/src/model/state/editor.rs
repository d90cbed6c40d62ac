//! 编辑表单状态
//!
//! 草稿本身由 `ArticleView` 持有，这里只记录表单焦点。

/// 编辑表单中的可聚焦元素
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorField {
    #[default]
    Title,
    Content,
    Save,
    Cancel,
}

impl EditorField {
    const ORDER: [EditorField; 4] = [Self::Title, Self::Content, Self::Save, Self::Cancel];

    fn index(self) -> usize {
        match self {
            Self::Title => 0,
            Self::Content => 1,
            Self::Save => 2,
            Self::Cancel => 3,
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// 是否为文本输入框
    pub fn is_input(self) -> bool {
        matches!(self, Self::Title | Self::Content)
    }
}

/// 编辑表单状态
#[derive(Debug, Default)]
pub struct EditorState {
    pub focus: EditorField,
    /// 更新请求已发出、尚未收到结果
    pub submitting: bool,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 进入编辑时重置
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
