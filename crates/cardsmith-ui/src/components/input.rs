//! Input Field Components
//!
//! Labelled text, color and number inputs for the appearance panel.
//! Inputs are controlled: the current value comes in through props and every
//! keystroke is reported through `oninput` as raw text. Parsing and
//! validation belong to the caller.

use dioxus::prelude::*;

use super::button::join_class;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Element id, also used for label association
    pub id: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Text input with an optional label
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         id: "backgroundImageUrl".to_string(),
///         value: url(),
///         oninput: move |s| url.set(s),
///         label: "Background Image URL".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let input_class = join_class("input-field", props.class.as_deref());

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{props.id}",
                    "{label}"
                }
            }
            input {
                id: "{props.id}",
                class: "{input_class}",
                r#type: "text",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the ColorInput component
#[derive(Clone, PartialEq, Props)]
pub struct ColorInputProps {
    pub id: String,
    pub label: String,
    /// Current `#rrggbb` value
    pub value: String,
    /// Receives the picked `#rrggbb` value
    pub oninput: EventHandler<String>,
    #[props(default = false)]
    pub disabled: bool,
}

/// Color swatch picker with the hex value shown next to it
#[component]
pub fn ColorInput(props: ColorInputProps) -> Element {
    rsx! {
        div { class: "form-field",
            label {
                class: "input-label",
                r#for: "{props.id}",
                "{props.label}"
            }
            div { class: "color-row",
                input {
                    id: "{props.id}",
                    class: "color-swatch",
                    r#type: "color",
                    value: "{props.value}",
                    disabled: props.disabled,
                    oninput: move |e| props.oninput.call(e.value()),
                }
                span { class: "color-value", "{props.value}" }
            }
        }
    }
}

/// Properties for the NumberInput component
#[derive(Clone, PartialEq, Props)]
pub struct NumberInputProps {
    pub id: String,
    pub label: String,
    pub value: i64,
    pub min: i64,
    pub max: i64,
    /// Unit suffix shown after the box (e.g. "px")
    #[props(default)]
    pub unit: Option<String>,
    /// Receives the raw text typed into the box
    pub oninput: EventHandler<String>,
}

/// Bounded integer input.
///
/// The browser bounds are advisory only; the raw text is handed to the
/// caller, which decides whether to accept it.
#[component]
pub fn NumberInput(props: NumberInputProps) -> Element {
    rsx! {
        div { class: "form-field",
            label {
                class: "input-label",
                r#for: "{props.id}",
                "{props.label}"
            }
            div { class: "number-row",
                input {
                    id: "{props.id}",
                    class: "input-field number-input",
                    r#type: "number",
                    min: "{props.min}",
                    max: "{props.max}",
                    value: "{props.value}",
                    oninput: move |e| props.oninput.call(e.value()),
                }
                if let Some(unit) = &props.unit {
                    span { class: "input-unit", "{unit}" }
                }
            }
        }
    }
}
