pub mod modal;
pub mod statusbar;
