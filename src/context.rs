//! Editor context for Cardsmith.
//!
//! The card store and the interface language live in signals provided by the
//! `App` component. Each editor instance owns its own store; nothing is
//! global.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = use_card_store();
//! store.write().toggle_orientation();
//!
//! let strings = use_strings();
//! rsx! { "{strings.save_image}" }
//! ```

use cardsmith_core::i18n::{strings, Language, Strings};
use cardsmith_core::CardStore;
use dioxus::prelude::*;

pub use crate::{launch_settings, LaunchSettings};

/// Hook to access the card store from context.
pub fn use_card_store() -> Signal<CardStore> {
    use_context::<Signal<CardStore>>()
}

/// Hook to access the interface language.
pub fn use_language() -> Signal<Language> {
    use_context::<Signal<Language>>()
}

/// String table for the current language.
///
/// Reading the language subscribes the calling component, so it re-renders
/// when the language is toggled.
pub fn use_strings() -> &'static Strings {
    let language = use_language();
    let current = *language.read();
    strings(current)
}
