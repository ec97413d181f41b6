//! Core types for Cardsmith
//!
//! The card configuration is split by concern:
//! - [`appearance`]: theme, colors, border width, font, orientation
//! - [`social`]: the fixed five-platform handle list
//! - [`image`]: avatar and background image sources
//! - [`config`]: the `CardConfiguration` entity and its typed field updates

pub mod appearance;
pub mod config;
pub mod image;
pub mod social;

pub use appearance::{BorderWidth, FontFamily, HexColor, Orientation, Theme};
pub use config::{Appearance, CardConfiguration, FieldUpdate, IdentityField};
pub use image::CardImage;
pub use social::{SocialHandle, SocialLinks, SocialPlatform};
