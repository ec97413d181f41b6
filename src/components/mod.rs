//! UI Components for the Cardsmith editor.
//!
//! Every component reads the card store from context and mutates it only
//! through the store's operations.

mod appearance_panel;
mod business_card;
mod editable_field;
mod export_button;
pub mod images;
mod nav_header;
mod social_panel;

pub use appearance_panel::AppearancePanel;
pub use business_card::{BusinessCard, OrientationToggle};
pub use editable_field::EditableField;
pub use export_button::ExportButton;
pub use nav_header::NavHeader;
pub use social_panel::SocialPanel;
