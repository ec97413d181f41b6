//! Toggle switch

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct SwitchProps {
    pub id: String,
    pub label: String,
    pub checked: bool,
    /// Receives the new checked state
    pub onchange: EventHandler<bool>,
}

/// Checkbox styled as a sliding switch
#[component]
pub fn Switch(props: SwitchProps) -> Element {
    let checked = props.checked;
    let track_class = switch_class(checked);

    rsx! {
        div { class: "switch-field",
            button {
                id: "{props.id}",
                class: "{track_class}",
                r#type: "button",
                "role": "switch",
                "aria-checked": "{checked}",
                onclick: move |_| props.onchange.call(!checked),
                span { class: "switch-thumb" }
            }
            label {
                class: "input-label switch-label",
                r#for: "{props.id}",
                "{props.label}"
            }
        }
    }
}

fn switch_class(checked: bool) -> &'static str {
    if checked {
        "switch switch--on"
    } else {
        "switch"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switch_class_reflects_state() {
        assert_eq!(switch_class(true), "switch switch--on");
        assert_eq!(switch_class(false), "switch");
    }
}
