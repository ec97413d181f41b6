//! Presentation mapper
//!
//! Pure mapping from a [`CardConfiguration`] to the visual attributes of the
//! rendered card. Card geometry (width, aspect ratio, content direction)
//! is decided here and nowhere else; both the desktop view and the exporter
//! read it from [`CardStyle`].

use std::fmt::Write as _;

use crate::fonts;
use crate::theme::{self, GradientDirection};
use crate::types::{CardConfiguration, HexColor, Orientation, SocialPlatform};

/// Landscape width:height ratio. Portrait uses the inverse.
pub const LANDSCAPE_RATIO: (u32, u32) = (90, 54);

/// Card geometry for one orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardGeometry {
    pub orientation: Orientation,
    /// Width relative to the viewport
    pub width_vw: u32,
    /// Upper bound on the width in pixels
    pub max_width_px: u32,
    /// Fixed width:height ratio, `None` when the height follows the content
    pub aspect_ratio: Option<(u32, u32)>,
}

impl CardGeometry {
    pub fn new(orientation: Orientation, show_social: bool) -> Self {
        let (ratio, width_vw, max_width_px) = match orientation {
            Orientation::Landscape => (LANDSCAPE_RATIO, 90, 450),
            Orientation::Portrait => ((LANDSCAPE_RATIO.1, LANDSCAPE_RATIO.0), 54, 270),
        };
        Self {
            orientation,
            width_vw,
            max_width_px,
            aspect_ratio: (!show_social).then_some(ratio),
        }
    }

    /// Height at full width when the ratio is fixed
    pub fn fixed_height_px(&self) -> Option<u32> {
        self.aspect_ratio
            .map(|(w, h)| (self.max_width_px * h + w / 2) / w)
    }

    /// Height at full width given the height the content needs
    pub fn height_px(&self, content_height: u32) -> u32 {
        self.fixed_height_px().unwrap_or(content_height)
    }
}

/// Resolved card background
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    Solid(HexColor),
    Gradient {
        direction: GradientDirection,
        stops: Vec<HexColor>,
    },
}

/// Resolved card border
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Border {
    pub width: u8,
    pub color: HexColor,
}

/// Flow of avatar and text block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentDirection {
    Row,
    Column,
}

/// Horizontal alignment of the social chip row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialAlign {
    Center,
    Start,
}

/// A social handle as shown on the card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialChip {
    pub platform: SocialPlatform,
    pub username: String,
    pub url: String,
    pub icon: &'static str,
}

/// Everything the view needs to draw the card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStyle {
    pub geometry: CardGeometry,
    pub background: Background,
    pub background_image: Option<String>,
    pub text_color: HexColor,
    pub border: Option<Border>,
    pub font_family: String,
    pub direction: ContentDirection,
    pub social_align: SocialAlign,
    /// Chips to draw; empty when social display is off
    pub social: Vec<SocialChip>,
}

impl CardStyle {
    pub fn from_config(config: &CardConfiguration) -> Self {
        let geometry = CardGeometry::new(config.orientation, config.show_social);

        let background = match theme::style(config.theme).gradient {
            Some(gradient) if !config.theme.is_custom() => Background::Gradient {
                direction: gradient.direction,
                stops: gradient
                    .stops
                    .iter()
                    .copied()
                    .map(theme::table_color)
                    .collect(),
            },
            _ => Background::Solid(config.background_color.clone()),
        };

        let bordered = config.theme.is_custom() && !config.border_width.is_none();
        let border = bordered.then(|| Border {
            width: config.border_width.get(),
            color: config.border_color.clone(),
        });

        let (direction, social_align) = match config.orientation {
            Orientation::Landscape => (ContentDirection::Row, SocialAlign::Center),
            Orientation::Portrait => (ContentDirection::Column, SocialAlign::Start),
        };

        let social = if config.show_social {
            config
                .social_media
                .visible()
                .map(|h| SocialChip {
                    platform: h.platform,
                    username: h.username.trim().to_string(),
                    url: h.profile_url(),
                    icon: h.platform.icon(),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            geometry,
            background,
            background_image: config
                .background_image
                .as_ref()
                .and_then(|img| img.src())
                .map(str::to_string),
            text_color: config.text_color.clone(),
            border,
            font_family: fonts::css_family(config.font),
            direction,
            social_align,
            social,
        }
    }

    /// Inline CSS for the card element
    pub fn to_css(&self) -> String {
        let g = &self.geometry;
        let mut css = String::new();
        let _ = write!(css, "width: {}vw; max-width: {}px; ", g.width_vw, g.max_width_px);
        match g.aspect_ratio {
            Some((w, h)) => {
                let _ = write!(css, "aspect-ratio: {} / {}; ", w, h);
            }
            None => css.push_str("aspect-ratio: auto; "),
        }

        let mut layers = Vec::new();
        if let Some(src) = &self.background_image {
            layers.push(format!("url(\"{}\")", src.replace('"', "%22")));
        }
        match &self.background {
            Background::Solid(color) => {
                let _ = write!(css, "background-color: {}; ", color);
            }
            Background::Gradient { direction, stops } => {
                if let Some(base) = stops.first() {
                    let _ = write!(css, "background-color: {}; ", base);
                    let stops: Vec<&str> = stops.iter().map(HexColor::as_str).collect();
                    layers.push(format!(
                        "linear-gradient({}, {})",
                        direction.css(),
                        stops.join(", ")
                    ));
                }
            }
        }
        if !layers.is_empty() {
            let _ = write!(
                css,
                "background-image: {}; background-size: cover; background-position: center; ",
                layers.join(", ")
            );
        }

        let _ = write!(css, "color: {}; ", self.text_color);
        match &self.border {
            Some(border) => {
                let _ = write!(css, "border: {}px solid {}; ", border.width, border.color);
            }
            None => css.push_str("border-style: none; "),
        }
        let _ = write!(css, "font-family: {};", self.font_family);
        css
    }

    /// Layout class for the avatar + text block
    pub fn content_class(&self) -> &'static str {
        match self.direction {
            ContentDirection::Row => "card-content card-content--row",
            ContentDirection::Column => "card-content card-content--column",
        }
    }

    /// Alignment class for the social chip row
    pub fn social_class(&self) -> &'static str {
        match self.social_align {
            SocialAlign::Center => "card-social card-social--center",
            SocialAlign::Start => "card-social card-social--start",
        }
    }
}
