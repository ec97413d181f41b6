//! Business Card Component
//!
//! Live preview of the card. Geometry, colors and font all come from
//! `CardStyle`; this component only arranges the pieces.

use cardsmith_core::{CardStyle, IdentityField, ImageSlot};
use cardsmith_ui::{Button, IconButton};
use dioxus::prelude::*;

use super::images::ImagePicker;
use super::EditableField;
use crate::context::{use_card_store, use_strings};

#[component]
pub fn BusinessCard() -> Element {
    let mut store = use_card_store();
    let strings = use_strings();

    let (style, avatar_src) = {
        let guard = store.read();
        let config = guard.config();
        (
            CardStyle::from_config(config),
            config.image().src().map(str::to_string),
        )
    };
    let css = style.to_css();

    rsx! {
        div {
            id: "business-card",
            class: "business-card",
            style: "{css}",

            div { class: style.content_class(),
                div { class: "card-avatar",
                    if let Some(src) = avatar_src {
                        img {
                            class: "card-avatar__image",
                            src: "{src}",
                            alt: "{strings.change_photo}",
                        }
                        IconButton {
                            onclick: move |_| store.write().clear_avatar(),
                            aria_label: strings.remove_photo.to_string(),
                            class: "card-avatar__remove".to_string(),
                            "×"
                        }
                    } else {
                        DefaultAvatar {}
                    }
                    ImagePicker {
                        slot: ImageSlot::Avatar,
                        label: strings.change_photo.to_string(),
                        icon_only: true,
                        class: "card-avatar__change".to_string(),
                    }
                }

                div { class: "card-identity",
                    for field in IdentityField::ALL {
                        EditableField { key: "{field}", field }
                    }
                }
            }

            if !style.social.is_empty() {
                div { class: style.social_class(),
                    for chip in style.social.iter() {
                        a {
                            key: "{chip.platform}",
                            class: "social-chip",
                            href: "{chip.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            span { "{chip.icon}" }
                            span { "{chip.username}" }
                        }
                    }
                }
            }
        }
    }
}

/// Placeholder silhouette shown until a photo is picked
#[component]
fn DefaultAvatar() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 100 100",
            class: "card-avatar__default",
            circle { cx: "50", cy: "50", r: "50", fill: "currentColor", fill_opacity: "0.25" }
            circle { cx: "50", cy: "35", r: "20", fill: "currentColor" }
            path { d: "M 20 80 Q 20 55, 50 55 Q 80 55, 80 80", fill: "currentColor" }
        }
    }
}

/// Button under the card that flips landscape/portrait
#[component]
pub fn OrientationToggle() -> Element {
    let mut store = use_card_store();
    let strings = use_strings();
    let label = strings.layout_button(store.read().config().orientation());

    rsx! {
        Button {
            onclick: move |_| store.write().toggle_orientation(),
            "⟳ {label}"
        }
    }
}
