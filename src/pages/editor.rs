//! The single editor page: controls on the left, live card on the right.

use dioxus::prelude::*;

use crate::components::{
    AppearancePanel, BusinessCard, ExportButton, NavHeader, OrientationToggle, SocialPanel,
};
use crate::context::use_language;

#[component]
pub fn Editor() -> Element {
    let language = use_language();

    rsx! {
        div { class: "editor-page", lang: language().code(),
            NavHeader {}
            div { class: "editor-body",
                aside { class: "editor-panel",
                    AppearancePanel {}
                    SocialPanel {}
                }
                main { class: "card-stage",
                    BusinessCard {}
                    OrientationToggle {}
                    ExportButton {}
                }
            }
        }
    }
}
