//! Appearance value types
//!
//! Every appearance value is a closed enum or a validated newtype so that an
//! unknown theme, font or malformed color is rejected at the boundary instead
//! of reaching the configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

/// Named appearance bundle. `Custom` is the only theme whose colors and font
/// are user-controlled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Modern,
    Vintage,
    Trendy,
    Minimal,
    Bold,
    Custom,
}

impl Theme {
    /// All themes in display order
    pub const ALL: [Theme; 6] = [
        Theme::Modern,
        Theme::Vintage,
        Theme::Trendy,
        Theme::Minimal,
        Theme::Bold,
        Theme::Custom,
    ];

    /// Stable lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Modern => "modern",
            Theme::Vintage => "vintage",
            Theme::Trendy => "trendy",
            Theme::Minimal => "minimal",
            Theme::Bold => "bold",
            Theme::Custom => "custom",
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Theme::Custom)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CardError::UnknownTheme(s.to_string()))
    }
}

/// Card layout mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
}

impl Orientation {
    /// The other orientation
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Landscape => Orientation::Portrait,
            Orientation::Portrait => Orientation::Landscape,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "landscape" | "horizontal" => Ok(Orientation::Landscape),
            "portrait" | "vertical" => Ok(Orientation::Portrait),
            _ => Err(CardError::UnknownOrientation(s.to_string())),
        }
    }
}

/// The six supported font families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Inter,
    Roboto,
    #[serde(rename = "Playfair Display")]
    PlayfairDisplay,
    Montserrat,
    Lora,
    Oswald,
}

impl FontFamily {
    pub const ALL: [FontFamily; 6] = [
        FontFamily::Inter,
        FontFamily::Roboto,
        FontFamily::PlayfairDisplay,
        FontFamily::Montserrat,
        FontFamily::Lora,
        FontFamily::Oswald,
    ];

    /// Family name as published by the font host
    pub fn name(&self) -> &'static str {
        match self {
            FontFamily::Inter => "Inter",
            FontFamily::Roboto => "Roboto",
            FontFamily::PlayfairDisplay => "Playfair Display",
            FontFamily::Montserrat => "Montserrat",
            FontFamily::Lora => "Lora",
            FontFamily::Oswald => "Oswald",
        }
    }

    /// Generic fallback used when the web font fails to load
    pub fn generic_family(&self) -> &'static str {
        match self {
            FontFamily::PlayfairDisplay | FontFamily::Lora => "serif",
            _ => "sans-serif",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FontFamily {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        FontFamily::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CardError::UnknownFont(s.to_string()))
    }
}

/// A `#rrggbb` color, stored lowercase.
///
/// `#rgb` shorthand is expanded on parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse a hex color from user input
    pub fn parse(input: &str) -> CardResult<Self> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| CardError::InvalidColor(input.to_string()))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CardError::InvalidColor(input.to_string()));
        }

        let expanded = match digits.len() {
            6 => digits.to_ascii_lowercase(),
            3 => digits
                .chars()
                .flat_map(|c| [c, c])
                .collect::<String>()
                .to_ascii_lowercase(),
            _ => return Err(CardError::InvalidColor(input.to_string())),
        };

        Ok(Self(format!("#{}", expanded)))
    }

    /// Table literal known to be lowercase `#rrggbb`
    pub(crate) fn from_static(literal: &'static str) -> Self {
        Self(literal.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// RGB components
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or(0);
        (channel(1), channel(3), channel(5))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

/// Border width in pixels, always within `0..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct BorderWidth(u8);

impl BorderWidth {
    pub const MAX: u8 = 10;

    /// Build from an integer, rejecting anything outside `0..=10`
    pub fn new(value: i64) -> CardResult<Self> {
        if (0..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(CardError::BorderWidthOutOfRange(value))
        }
    }

    /// Parse text from a numeric input box.
    ///
    /// Non-numeric input and out-of-range values are both rejected; the
    /// caller keeps the previous width.
    pub fn parse(input: &str) -> CardResult<Self> {
        let value: i64 = input
            .trim()
            .parse()
            .map_err(|_| CardError::InvalidBorderWidth(input.to_string()))?;
        Self::new(value)
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn is_none(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for BorderWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl TryFrom<i64> for BorderWidth {
    type Error = CardError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BorderWidth> for u8 {
    fn from(width: BorderWidth) -> Self {
        width.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_parse_is_case_insensitive() {
        assert_eq!("Modern".parse::<Theme>().unwrap(), Theme::Modern);
        assert_eq!(" custom ".parse::<Theme>().unwrap(), Theme::Custom);
        assert!(matches!(
            "neon".parse::<Theme>(),
            Err(CardError::UnknownTheme(_))
        ));
    }

    #[test]
    fn orientation_toggle_flips() {
        assert_eq!(Orientation::Landscape.toggled(), Orientation::Portrait);
        assert_eq!(Orientation::Portrait.toggled(), Orientation::Landscape);
    }

    #[test]
    fn orientation_accepts_layout_aliases() {
        assert_eq!("vertical".parse::<Orientation>().unwrap(), Orientation::Portrait);
        assert!("diagonal".parse::<Orientation>().is_err());
    }

    #[test]
    fn font_names_round_trip() {
        for font in FontFamily::ALL {
            assert_eq!(font.name().parse::<FontFamily>().unwrap(), font);
        }
        assert!(matches!(
            "Comic Sans".parse::<FontFamily>(),
            Err(CardError::UnknownFont(_))
        ));
    }

    #[test]
    fn font_serializes_with_display_name() {
        let json = serde_json::to_string(&FontFamily::PlayfairDisplay).unwrap();
        assert_eq!(json, "\"Playfair Display\"");
    }

    #[test]
    fn hex_color_normalizes() {
        assert_eq!(HexColor::parse("#FF0000").unwrap().as_str(), "#ff0000");
        assert_eq!(HexColor::parse("#abc").unwrap().as_str(), "#aabbcc");
        assert_eq!(HexColor::parse("#336699").unwrap().rgb(), (0x33, 0x66, 0x99));
    }

    #[test]
    fn hex_color_rejects_garbage() {
        for bad in ["red", "#12345", "#ggg", "", "#1234567"] {
            assert!(HexColor::parse(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn border_width_bounds() {
        assert_eq!(BorderWidth::new(0).unwrap().get(), 0);
        assert_eq!(BorderWidth::new(10).unwrap().get(), 10);
        assert!(matches!(
            BorderWidth::new(15),
            Err(CardError::BorderWidthOutOfRange(15))
        ));
        assert!(BorderWidth::new(-1).is_err());
    }

    #[test]
    fn border_width_parse_rejects_non_numeric() {
        assert_eq!(BorderWidth::parse(" 4 ").unwrap().get(), 4);
        assert!(matches!(
            BorderWidth::parse("four"),
            Err(CardError::InvalidBorderWidth(_))
        ));
        assert!(BorderWidth::parse("").is_err());
    }

    #[test]
    fn border_width_deserialize_enforces_range() {
        assert!(serde_json::from_str::<BorderWidth>("3").is_ok());
        assert!(serde_json::from_str::<BorderWidth>("42").is_err());
    }
}
