//! Cardsmith CLI
//!
//! Headless companion to the desktop editor. Renders through the same
//! export path the editor's save button uses.
//!
//! ## Usage
//!
//! ```bash
//! # Print the default card configuration as JSON
//! cardsmith default > card.json
//!
//! # List the built-in themes
//! cardsmith themes
//!
//! # Render a configuration to PNG at 2x
//! cardsmith render --config card.json --out business-card.png
//!
//! # Render as SVG with the bold theme applied first
//! cardsmith render --config card.json --out card.svg --format svg --theme bold
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use cardsmith_core::export::{self, ExportFormat};
use cardsmith_core::theme::{apply_theme, style as theme_style};
use cardsmith_core::{CardConfiguration, FieldUpdate, Orientation, Theme};
use clap::{Parser, Subcommand};

/// Cardsmith - digital business cards
#[derive(Parser)]
#[command(name = "cardsmith")]
#[command(version = "0.1.0")]
#[command(about = "Cardsmith - render digital business cards")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the default configuration as JSON
    Default,

    /// List the built-in themes and their colors
    Themes,

    /// Render a configuration file to an image
    Render {
        /// Configuration JSON file
        #[arg(short, long)]
        config: PathBuf,

        /// Output file
        #[arg(short, long)]
        out: PathBuf,

        /// Output format (png, svg)
        #[arg(short, long, default_value = "png")]
        format: ExportFormat,

        /// Pixel density for PNG output
        #[arg(short, long, default_value_t = 2.0)]
        scale: f32,

        /// Apply a theme before rendering
        #[arg(short, long)]
        theme: Option<Theme>,

        /// Override the card orientation
        #[arg(long)]
        orientation: Option<Orientation>,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Default => {
            println!("{}", CardConfiguration::default().to_json()?);
        }

        Commands::Themes => {
            println!("{:<8} {:<9} {:<9} {:<9} FONT", "THEME", "BG", "TEXT", "BORDER");
            for theme in Theme::ALL {
                let style = theme_style(theme);
                let background = match &style.gradient {
                    Some(_) => "gradient",
                    None => style.background,
                };
                println!(
                    "{:<8} {:<9} {:<9} {:<9} {}",
                    theme.as_str(),
                    background,
                    style.text,
                    style.border,
                    style.font
                );
            }
        }

        Commands::Render {
            config,
            out,
            format,
            scale,
            theme,
            orientation,
        } => {
            let json = std::fs::read_to_string(&config)
                .with_context(|| format!("reading {}", config.display()))?;
            let mut card = CardConfiguration::from_json(&json)
                .with_context(|| format!("parsing {}", config.display()))?;

            if let Some(theme) = theme {
                card = apply_theme(&card, theme);
            }
            if let Some(orientation) = orientation {
                card = card.with_update(FieldUpdate::Orientation(orientation))?;
            }

            tracing::info!(
                theme = %card.theme(),
                orientation = %card.orientation(),
                ?format,
                scale,
                "rendering card"
            );

            let bytes = export::export(&card, format, scale)?;
            std::fs::write(&out, &bytes).with_context(|| format!("writing {}", out.display()))?;

            println!("Wrote {} ({} bytes)", out.display(), bytes.len());
        }
    }

    Ok(())
}
