#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use cardsmith_core::{Language, Orientation, Theme};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Launch options, set once from the command line
static LAUNCH: OnceLock<LaunchSettings> = OnceLock::new();

/// Options that shape the editor when it mounts
#[derive(Debug, Clone)]
pub struct LaunchSettings {
    pub language: Language,
    pub theme: Theme,
    pub orientation: Orientation,
    /// Folder the save dialog opens in
    pub export_dir: Option<PathBuf>,
    /// Pixel density of the exported PNG
    pub export_scale: f32,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            language: Language::English,
            theme: Theme::Custom,
            orientation: Orientation::Landscape,
            export_dir: dirs::download_dir(),
            export_scale: 2.0,
        }
    }
}

/// Get the launch settings (set from command line or default)
pub fn launch_settings() -> LaunchSettings {
    LAUNCH.get().cloned().unwrap_or_default()
}

/// Cardsmith - WYSIWYG business card editor
#[derive(Parser, Debug)]
#[command(name = "cardsmith-desktop")]
#[command(about = "Cardsmith - design a digital business card and save it as an image")]
struct Args {
    /// Interface language (en, zh)
    #[arg(short, long, default_value = "en")]
    lang: Language,

    /// Theme selected at start (modern, vintage, trendy, minimal, bold, custom)
    #[arg(short, long, default_value = "custom")]
    theme: Theme,

    /// Card orientation at start (landscape, portrait)
    #[arg(short, long, default_value = "landscape")]
    orientation: Orientation,

    /// Folder the save dialog opens in (default: Downloads)
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Pixel density of the exported PNG (1-8)
    #[arg(long, default_value_t = 2.0)]
    export_scale: f32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let settings = LaunchSettings {
        language: args.lang,
        theme: args.theme,
        orientation: args.orientation,
        export_dir: args.export_dir.or_else(dirs::download_dir),
        export_scale: args.export_scale.clamp(1.0, cardsmith_core::export::MAX_SCALE),
    };

    tracing::info!(
        language = %settings.language,
        theme = %settings.theme,
        orientation = %settings.orientation,
        "Starting Cardsmith"
    );

    let _ = LAUNCH.set(settings);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Cardsmith")
            .with_inner_size(dioxus::desktop::LogicalSize::new(820.0, 960.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
