//! Reusable form components for the editor panel

mod button;
mod input;
mod switch;

pub use button::*;
pub use input::*;
pub use switch::*;
