//! View 层：只读 Model，渲染到终端

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
