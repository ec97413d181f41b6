//! Social visibility switch and per-platform username inputs.

use cardsmith_core::SocialPlatform;
use cardsmith_ui::{Input, Switch};
use dioxus::prelude::*;

use crate::context::{use_card_store, use_strings};

#[component]
pub fn SocialPanel() -> Element {
    let mut store = use_card_store();
    let strings = use_strings();
    let show_social = store.read().config().show_social();

    rsx! {
        section { class: "controls",
            Switch {
                id: "showSocial".to_string(),
                label: strings.show_social.to_string(),
                checked: show_social,
                onchange: move |checked: bool| {
                    if checked != store.read().config().show_social() {
                        store.write().toggle_social();
                    }
                },
            }

            if show_social {
                div { class: "social-inputs",
                    for platform in SocialPlatform::ALL {
                        div { key: "{platform}", class: "social-input-row",
                            span { class: "social-icon", "{platform.icon()}" }
                            Input {
                                id: format!("social-{}", platform.id()),
                                value: store.read().config().social_media().username(platform).to_string(),
                                placeholder: format!("{} {}", platform.id(), strings.username),
                                oninput: move |text: String| {
                                    store.write().set_social_username(platform, text)
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
