use cardsmith_core::{fonts, CardConfiguration, CardStore};
use dioxus::prelude::*;

use crate::context::launch_settings;
use crate::pages::Editor;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the font stylesheets, and the editor context.
#[component]
pub fn App() -> Element {
    let settings = launch_settings();

    let store: Signal<CardStore> = use_signal(|| {
        let mut store = CardStore::new(CardConfiguration::default());
        if store.config().theme() != settings.theme {
            store.apply_theme(settings.theme);
        }
        if store.config().orientation() != settings.orientation {
            store.toggle_orientation();
        }
        store
    });
    let language = use_signal(|| settings.language);

    use_context_provider(|| store);
    use_context_provider(|| language);

    // Requested once; a failed font load falls back to the generic family
    let font_sheets = use_hook(fonts::stylesheet_urls);

    rsx! {
        for href in font_sheets {
            document::Link { key: "{href}", rel: "stylesheet", href: "{href}" }
        }
        style { {GLOBAL_STYLES} }
        Editor {}
    }
}
