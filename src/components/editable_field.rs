//! Click-to-edit identity line on the card.

use cardsmith_core::{EditKey, IdentityField};
use cardsmith_ui::IconButton;
use dioxus::prelude::*;

use crate::context::{use_card_store, use_strings};

/// One identity line. Shows the text with an edit button, or an input while
/// this field owns the edit session.
///
/// Each keystroke is written to the store immediately; blur or Enter only
/// closes the input.
#[component]
pub fn EditableField(field: IdentityField) -> Element {
    let mut store = use_card_store();
    let strings = use_strings();

    let editing = store.read().session().is_editing(field);
    let value = store.read().config().identity(field).to_string();
    let line_class = format!("card-field card-field--{}", field);

    if editing {
        rsx! {
            div { class: "{line_class}",
                input {
                    class: "inline-edit-input",
                    r#type: "text",
                    value: "{value}",
                    autofocus: true,
                    oninput: move |e| store.write().set_identity(field, e.value()),
                    onblur: move |_| store.write().end_edit(),
                    onkeydown: move |e: KeyboardEvent| {
                        let key = match e.key() {
                            Key::Enter => EditKey::Enter,
                            Key::Escape => EditKey::Escape,
                            _ => EditKey::Other,
                        };
                        store.write().edit_key(key);
                    },
                }
            }
        }
    } else {
        rsx! {
            div { class: "{line_class} editable",
                span { "{value}" }
                IconButton {
                    onclick: move |_| store.write().begin_edit(field),
                    aria_label: format!("{} {}", strings.edit, strings.field_label(field)),
                    "✎"
                }
            }
        }
    }
}
