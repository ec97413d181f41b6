//! Editor header: title plus the language switch.

use cardsmith_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use crate::context::{use_language, use_strings};

#[component]
pub fn NavHeader() -> Element {
    let mut language = use_language();
    let strings = use_strings();
    let next = language().toggled();

    rsx! {
        header { class: "editor-header",
            h1 { class: "editor-title", "{strings.title}" }
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| {
                    let next = language().toggled();
                    tracing::debug!(language = %next, "switching language");
                    language.set(next);
                },
                "{next.native_name()}"
            }
        }
    }
}
