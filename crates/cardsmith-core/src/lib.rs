//! Cardsmith Core Library
//!
//! State model and presentation rules for a WYSIWYG digital business card.
//!
//! ## Overview
//!
//! One [`CardStore`] per editor holds the [`CardConfiguration`] and the
//! inline edit session. Input handlers only ever go through the store; the
//! view derives everything it draws from [`CardStyle::from_config`].
//!
//! - **Themes**: five fixed bundles plus `custom`, the only theme whose colors
//!   and font are user controlled
//! - **Edit session**: at most one identity field open for typing
//! - **Images**: picked files become data URIs; only the newest read per slot
//!   may land
//! - **Export**: SVG scene rasterized to PNG
//!
//! ## Quick Start
//!
//! ```
//! use cardsmith_core::{CardStore, CardStyle, IdentityField, Theme};
//!
//! let mut store = CardStore::default();
//! store.set_identity(IdentityField::Name, "Ada Lovelace");
//! store.apply_theme(Theme::Vintage);
//!
//! let style = CardStyle::from_config(store.config());
//! assert!(style.to_css().contains("aspect-ratio: 90 / 54"));
//! ```

pub mod acquire;
pub mod edit;
pub mod error;
pub mod export;
pub mod fonts;
pub mod i18n;
pub mod presentation;
pub mod store;
pub mod theme;
pub mod types;

// Re-exports
pub use acquire::{ImageRequests, ImageSlot, ImageTicket};
pub use edit::{EditKey, EditSession};
pub use error::{CardError, CardResult};
pub use export::{ExportFormat, EXPORT_FILE_NAME};
pub use i18n::{Language, Strings};
pub use presentation::{CardGeometry, CardStyle};
pub use store::CardStore;
pub use types::*;
