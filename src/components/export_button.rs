//! Save-as-image button.

use std::path::PathBuf;

use cardsmith_core::{export, CardConfiguration, ExportFormat, EXPORT_FILE_NAME};
use cardsmith_ui::Button;
use dioxus::prelude::*;
use rfd::FileDialog;

use crate::context::{launch_settings, use_card_store, use_strings};

#[component]
pub fn ExportButton() -> Element {
    let store = use_card_store();
    let strings = use_strings();
    let mut saving = use_signal(|| false);
    let mut failed = use_signal(|| false);

    let save = move |_: ()| {
        if saving() {
            return;
        }
        let config = store.read().config().clone();
        saving.set(true);
        failed.set(false);

        spawn(async move {
            let result = tokio::task::spawn_blocking(move || save_card(&config)).await;
            match result {
                Ok(Ok(Some(path))) => tracing::info!(path = %path.display(), "card saved"),
                Ok(Ok(None)) => tracing::debug!("save cancelled"),
                Ok(Err(e)) => {
                    tracing::error!(error = %e, "failed to save card");
                    failed.set(true);
                }
                Err(e) => {
                    tracing::error!(error = %e, "save task failed");
                    failed.set(true);
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        div { class: "editor-footer",
            Button {
                onclick: save,
                disabled: saving(),
                if saving() { "{strings.saving_image}" } else { "{strings.save_image}" }
            }
            if failed() {
                p { class: "export-error", "{strings.save_failed}" }
            }
        }
    }
}

/// Render the card to PNG and write it where the user picks.
/// `Ok(None)` means the dialog was dismissed.
fn save_card(config: &CardConfiguration) -> anyhow::Result<Option<PathBuf>> {
    let settings = launch_settings();
    let png = anyhow::Context::context(
        export::export(config, ExportFormat::Png, settings.export_scale),
        "rendering card",
    )?;

    let mut dialog = FileDialog::new()
        .add_filter("PNG image", &["png"])
        .set_file_name(EXPORT_FILE_NAME);
    if let Some(dir) = &settings.export_dir {
        dialog = dialog.set_directory(dir);
    }
    let Some(path) = dialog.save_file() else {
        return Ok(None);
    };

    anyhow::Context::with_context(std::fs::write(&path, png), || {
        format!("writing {}", path.display())
    })?;
    Ok(Some(path))
}
