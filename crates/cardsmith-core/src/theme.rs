//! Static theme table and theme application
//!
//! Non-custom themes own the background, text and border colors and the
//! font. Applying one rewrites those from the table, drops the border and
//! leaves identity, social handles, orientation and the avatar untouched.
//! Borders are only drawn under the custom theme.

use tracing::debug;

use crate::types::{BorderWidth, CardConfiguration, CardImage, FontFamily, HexColor, Theme};

/// Direction of a theme gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientDirection {
    ToRight,
    ToBottomRight,
}

impl GradientDirection {
    /// CSS `linear-gradient` direction keyword
    pub fn css(&self) -> &'static str {
        match self {
            GradientDirection::ToRight => "to right",
            GradientDirection::ToBottomRight => "to bottom right",
        }
    }

    /// End point of the gradient vector in unit box coordinates
    pub fn end_point(&self) -> (u8, u8) {
        match self {
            GradientDirection::ToRight => (1, 0),
            GradientDirection::ToBottomRight => (1, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub direction: GradientDirection,
    pub stops: &'static [&'static str],
}

/// Appearance bundle for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeStyle {
    /// Base background color (first gradient stop when a gradient is set)
    pub background: &'static str,
    /// Gradient drawn over the base color
    pub gradient: Option<Gradient>,
    pub text: &'static str,
    pub border: &'static str,
    pub font: FontFamily,
}

const MODERN: ThemeStyle = ThemeStyle {
    background: "#dbeafe",
    gradient: Some(Gradient {
        direction: GradientDirection::ToBottomRight,
        stops: &["#dbeafe", "#c7d2fe"],
    }),
    text: "#1f2937",
    border: "#93c5fd",
    font: FontFamily::Inter,
};

const VINTAGE: ThemeStyle = ThemeStyle {
    background: "#fffbeb",
    gradient: None,
    text: "#78350f",
    border: "#fde68a",
    font: FontFamily::Lora,
};

const TRENDY: ThemeStyle = ThemeStyle {
    background: "#f9a8d4",
    gradient: Some(Gradient {
        direction: GradientDirection::ToRight,
        stops: &["#f9a8d4", "#d8b4fe", "#818cf8"],
    }),
    text: "#1f2937",
    border: "#d8b4fe",
    font: FontFamily::Montserrat,
};

const MINIMAL: ThemeStyle = ThemeStyle {
    background: "#ffffff",
    gradient: None,
    text: "#111827",
    border: "#e5e7eb",
    font: FontFamily::Inter,
};

const BOLD: ThemeStyle = ThemeStyle {
    background: "#000000",
    gradient: None,
    text: "#ffffff",
    border: "#facc15",
    font: FontFamily::Oswald,
};

// Only used for the theme picker swatch; custom values come from CUSTOM_DEFAULTS.
const CUSTOM: ThemeStyle = ThemeStyle {
    background: "#ffffff",
    gradient: None,
    text: "#111827",
    border: "#e5e7eb",
    font: FontFamily::Inter,
};

/// Values loaded when the user switches to the custom theme
pub struct CustomDefaults {
    pub background: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub border_width: u8,
}

pub const CUSTOM_DEFAULTS: CustomDefaults = CustomDefaults {
    background: "#f0f0f0",
    text: "#333333",
    border: "#666666",
    border_width: 2,
};

/// Table entry for a theme
pub fn style(theme: Theme) -> &'static ThemeStyle {
    match theme {
        Theme::Modern => &MODERN,
        Theme::Vintage => &VINTAGE,
        Theme::Trendy => &TRENDY,
        Theme::Minimal => &MINIMAL,
        Theme::Bold => &BOLD,
        Theme::Custom => &CUSTOM,
    }
}

pub(crate) fn table_color(literal: &'static str) -> HexColor {
    HexColor::from_static(literal)
}

fn table_width(width: u8) -> BorderWidth {
    BorderWidth::new(width as i64).unwrap_or_default()
}

/// Produce the configuration that results from selecting `theme`.
pub fn apply_theme(config: &CardConfiguration, theme: Theme) -> CardConfiguration {
    let mut next = config.clone();
    next.theme = theme;

    if theme.is_custom() {
        next.background_color = table_color(CUSTOM_DEFAULTS.background);
        next.text_color = table_color(CUSTOM_DEFAULTS.text);
        next.border_color = table_color(CUSTOM_DEFAULTS.border);
        next.border_width = table_width(CUSTOM_DEFAULTS.border_width);
        next.background_image = Some(CardImage::default_background());
    } else {
        let style = style(theme);
        next.background_color = table_color(style.background);
        next.text_color = table_color(style.text);
        next.border_color = table_color(style.border);
        next.border_width = BorderWidth::default();
        next.font = style.font;
        next.background_image = None;
    }

    debug!(theme = %theme, "applied theme");
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldUpdate, Orientation, SocialPlatform};

    #[test]
    fn table_literals_are_normalized_colors() {
        for theme in Theme::ALL {
            let s = style(theme);
            let mut literals = vec![s.background, s.text, s.border];
            if let Some(gradient) = s.gradient {
                literals.extend(gradient.stops);
            }
            for literal in literals {
                assert_eq!(HexColor::parse(literal).unwrap().as_str(), literal);
            }
        }
        for literal in [CUSTOM_DEFAULTS.background, CUSTOM_DEFAULTS.text, CUSTOM_DEFAULTS.border] {
            assert_eq!(HexColor::parse(literal).unwrap().as_str(), literal);
        }
    }

    #[test]
    fn gradient_starts_at_base_color() {
        for theme in Theme::ALL {
            let s = style(theme);
            if let Some(gradient) = s.gradient {
                assert_eq!(gradient.stops.first().copied(), Some(s.background));
                assert!(gradient.stops.len() >= 2);
            }
        }
    }

    #[test]
    fn custom_theme_loads_custom_bundle() {
        let config = apply_theme(&CardConfiguration::default(), Theme::Vintage);
        let custom = apply_theme(&config, Theme::Custom);
        assert_eq!(custom.background_color.as_str(), "#f0f0f0");
        assert_eq!(custom.text_color.as_str(), "#333333");
        assert_eq!(custom.border_color.as_str(), "#666666");
        assert_eq!(custom.border_width.get(), 2);
        assert_eq!(custom.background_image, Some(CardImage::default_background()));
        // font carries over from the previous theme
        assert_eq!(custom.font, FontFamily::Lora);
    }

    #[test]
    fn non_custom_theme_preserves_identity_and_social() {
        let config = CardConfiguration::default()
            .with_update(FieldUpdate::SocialUsername(SocialPlatform::Twitter, "jd".into()))
            .unwrap()
            .with_update(FieldUpdate::ShowSocial(true))
            .unwrap()
            .with_update(FieldUpdate::Orientation(Orientation::Portrait))
            .unwrap()
            .with_update(FieldUpdate::Image(CardImage::from_data_uri(
                "data:image/png;base64,AA".into(),
            )))
            .unwrap();

        let themed = apply_theme(&config, Theme::Trendy);
        assert_eq!(themed.name, config.name);
        assert_eq!(themed.email, config.email);
        assert_eq!(themed.social_media, config.social_media);
        assert!(themed.show_social);
        assert_eq!(themed.orientation, Orientation::Portrait);
        assert_eq!(themed.image, config.image);
        assert_eq!(themed.background_image, None);
        assert_eq!(themed.font, FontFamily::Montserrat);
    }

    #[test]
    fn non_custom_themes_drop_the_border() {
        for theme in Theme::ALL.into_iter().filter(|t| !t.is_custom()) {
            let themed = apply_theme(&CardConfiguration::default(), theme);
            assert!(themed.border_width.is_none(), "{theme} kept a border");
        }
        let bold = apply_theme(&CardConfiguration::default(), Theme::Bold);
        let back = apply_theme(&bold, Theme::Custom);
        assert_eq!(back.border_width.get(), 2);
    }
}
