//! 页面状态

mod editor;
mod modal;

pub use editor::{EditorField, EditorState};
pub use modal::{Modal, ModalState};
