//! Image Picker Component
//!
//! Opens the native file dialog, reads the file off the UI thread and lands
//! the result in the card store as an embedded data URI.

use std::path::{Path, PathBuf};

use cardsmith_core::acquire::{prepare_image, MAX_EMBED_EDGE};
use cardsmith_core::ImageSlot;
use cardsmith_ui::{Button, ButtonVariant, IconButton};
use dioxus::prelude::*;
use rfd::FileDialog;

use crate::context::use_card_store;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Button that replaces the image in `slot`
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     ImagePicker {
///         slot: ImageSlot::Background,
///         label: "Upload Background".to_string(),
///     }
/// }
/// ```
#[component]
pub fn ImagePicker(
    slot: ImageSlot,
    label: String,
    /// Show only an icon (label becomes the tooltip)
    #[props(default = false)]
    icon_only: bool,
    #[props(default)] class: Option<String>,
) -> Element {
    let mut store = use_card_store();
    let mut loading = use_signal(|| false);

    let pick = move |_: ()| {
        let ticket = store.write().begin_image(slot);
        loading.set(true);

        spawn(async move {
            // Dialog and decode both block, so they run off the UI thread
            let result = tokio::task::spawn_blocking(move || {
                let path = pick_image_file()?;
                Some(read_image(&path))
            })
            .await;

            match result {
                Ok(Some(Ok(data_uri))) => {
                    if !store.write().commit_image(ticket, data_uri) {
                        tracing::debug!(?slot, "image read superseded");
                    }
                }
                Ok(Some(Err(e))) => {
                    tracing::warn!(?slot, error = %e, "failed to read image");
                    store.write().abandon_image(ticket);
                }
                Ok(None) => {
                    tracing::debug!(?slot, "image selection cancelled");
                    store.write().abandon_image(ticket);
                }
                Err(e) => {
                    tracing::error!(?slot, error = %e, "file picker task failed");
                    store.write().abandon_image(ticket);
                }
            }
            loading.set(false);
        });
    };

    if icon_only {
        rsx! {
            IconButton {
                onclick: pick,
                aria_label: label,
                class: class.clone().unwrap_or_default(),
                if loading() { "…" } else { "📷" }
            }
        }
    } else {
        rsx! {
            Button {
                variant: ButtonVariant::Outline,
                onclick: pick,
                disabled: loading(),
                class: class.clone().unwrap_or_default(),
                "{label}"
            }
        }
    }
}

fn pick_image_file() -> Option<PathBuf> {
    FileDialog::new()
        .add_filter("images", IMAGE_EXTENSIONS)
        .set_title("Select Image")
        .pick_file()
}

fn read_image(path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(prepare_image(&bytes, MAX_EMBED_EDGE)?)
}
