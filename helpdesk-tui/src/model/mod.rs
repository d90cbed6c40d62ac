//! Model 层：应用状态
//!
//! Update 层修改这里的状态，View 层只读。

mod app;
mod route;
pub mod state;

pub use app::App;
pub use route::{Route, Router};
pub use state::{EditorField, EditorState, Modal, ModalState};
