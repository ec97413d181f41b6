//! Appearance Panel
//!
//! Theme picker plus the custom-only controls. Colors, border width,
//! background and font are owned by the theme unless it is `custom`, so
//! those controls are hidden or disabled for every other theme.

use cardsmith_core::{CardStore, FieldUpdate, FontFamily, HexColor, ImageSlot, Theme};
use cardsmith_ui::{ColorInput, IconButton, Input, NumberInput};
use dioxus::prelude::*;

use super::images::ImagePicker;
use crate::context::{use_card_store, use_strings};

#[component]
pub fn AppearancePanel() -> Element {
    let store = use_card_store();
    let strings = use_strings();
    let custom = store.read().config().theme().is_custom();

    rsx! {
        section { class: "controls",
            ThemeOptions {}
            if custom {
                ColorControls {}
                BackgroundControls {}
            }
            div { class: "form-field",
                label { class: "input-label", r#for: "font", "{strings.font}" }
                FontSelect { disabled: !custom }
                if !custom {
                    p { class: "input-hint", "{strings.locked_by_theme}" }
                }
            }
        }
    }
}

#[component]
fn ThemeOptions() -> Element {
    let mut store = use_card_store();
    let strings = use_strings();
    let current = store.read().config().theme();

    rsx! {
        div { class: "form-field",
            span { class: "input-label", "{strings.theme}" }
            div { class: "theme-options", "role": "radiogroup",
                for theme in Theme::ALL {
                    label { key: "{theme}", class: "theme-option",
                        input {
                            r#type: "radio",
                            name: "theme",
                            value: theme.as_str(),
                            checked: theme == current,
                            onchange: move |_| store.write().apply_theme(theme),
                        }
                        "{strings.theme_label(theme)}"
                    }
                }
            }
        }
    }
}

#[component]
fn ColorControls() -> Element {
    let mut store = use_card_store();
    let strings = use_strings();
    let appearance = store.read().config().appearance();
    let border_width = store.read().config().border_width();

    rsx! {
        ColorInput {
            id: "backgroundColor".to_string(),
            label: strings.background_color.to_string(),
            value: appearance.background_color.to_string(),
            oninput: move |text: String| set_color(store, &text, FieldUpdate::BackgroundColor),
        }
        ColorInput {
            id: "textColor".to_string(),
            label: strings.text_color.to_string(),
            value: appearance.text_color.to_string(),
            oninput: move |text: String| set_color(store, &text, FieldUpdate::TextColor),
        }
        NumberInput {
            id: "borderWidth".to_string(),
            label: strings.border_width.to_string(),
            value: i64::from(border_width.get()),
            min: 0,
            max: 10,
            unit: "px".to_string(),
            oninput: move |text: String| {
                if let Err(e) = store.write().set_border_width_input(&text) {
                    tracing::debug!(error = %e, "border width rejected");
                }
            },
        }
        ColorInput {
            id: "borderColor".to_string(),
            label: strings.border_color.to_string(),
            value: appearance.border_color.to_string(),
            oninput: move |text: String| set_color(store, &text, FieldUpdate::BorderColor),
        }
    }
}

/// Color pickers always emit `#rrggbb`; anything else is dropped
fn set_color(mut store: Signal<CardStore>, text: &str, build: fn(HexColor) -> FieldUpdate) {
    match HexColor::parse(text) {
        Ok(color) => {
            if let Err(e) = store.write().replace_field(build(color)) {
                tracing::debug!(error = %e, "color change rejected");
            }
        }
        Err(e) => tracing::debug!(error = %e, "ignoring color input"),
    }
}

#[component]
fn BackgroundControls() -> Element {
    let mut store = use_card_store();
    let strings = use_strings();
    let background = store.read().config().background_image().cloned();
    let url_value = background
        .as_ref()
        .filter(|image| !image.is_embedded())
        .and_then(|image| image.src())
        .unwrap_or_default()
        .to_string();

    rsx! {
        div { class: "form-field",
            span { class: "input-label", "{strings.background_image}" }
            if let Some(src) = background.as_ref().and_then(|image| image.src()) {
                div { class: "background-thumb",
                    img { src: "{src}", alt: "{strings.background_image}" }
                    IconButton {
                        onclick: move |_| store.write().clear_background_image(),
                        aria_label: strings.remove_background.to_string(),
                        class: "btn-danger".to_string(),
                        "×"
                    }
                }
            } else {
                ImagePicker {
                    slot: ImageSlot::Background,
                    label: strings.upload_background.to_string(),
                }
            }
        }
        Input {
            id: "backgroundImageUrl".to_string(),
            label: strings.background_image_url.to_string(),
            value: url_value,
            placeholder: "https://".to_string(),
            oninput: move |text: String| store.write().set_background_image_input(&text),
        }
    }
}

#[component]
fn FontSelect(disabled: bool) -> Element {
    let mut store = use_card_store();
    let current = store.read().config().font();

    rsx! {
        select {
            id: "font",
            class: "input-field",
            disabled: disabled,
            onchange: move |e| {
                let chosen = FontFamily::ALL.into_iter().find(|f| f.name() == e.value());
                if let Some(font) = chosen {
                    if let Err(e) = store.write().replace_field(FieldUpdate::Font(font)) {
                        tracing::debug!(error = %e, "font change rejected");
                    }
                }
            },
            for font in FontFamily::ALL {
                option {
                    key: "{font}",
                    value: font.name(),
                    selected: font == current,
                    style: "font-family: {font.name()}",
                    "{font.name()}"
                }
            }
        }
    }
}
