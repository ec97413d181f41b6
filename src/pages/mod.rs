//! Application pages

mod editor;

pub use editor::Editor;
