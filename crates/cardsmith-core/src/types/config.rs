//! The card configuration entity
//!
//! `CardConfiguration` is a plain value. Updates never mutate it in place:
//! [`CardConfiguration::with_update`] returns a new configuration with exactly
//! one field replaced.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::appearance::{BorderWidth, FontFamily, HexColor, Orientation, Theme};
use super::image::CardImage;
use super::social::{SocialLinks, SocialPlatform};
use crate::error::{CardError, CardResult};
use crate::theme;

/// Identity text fields that can be edited in place on the card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityField {
    Name,
    Position,
    Company,
    Email,
    Phone,
}

impl IdentityField {
    /// Fields in card order
    pub const ALL: [IdentityField; 5] = [
        IdentityField::Name,
        IdentityField::Position,
        IdentityField::Company,
        IdentityField::Email,
        IdentityField::Phone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IdentityField::Name => "name",
            IdentityField::Position => "position",
            IdentityField::Company => "company",
            IdentityField::Email => "email",
            IdentityField::Phone => "phone",
        }
    }
}

impl fmt::Display for IdentityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentityField {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IdentityField::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CardError::UnknownField(s.to_string()))
    }
}

/// The theme-controlled appearance quadruple
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    pub background_color: HexColor,
    pub text_color: HexColor,
    pub border_color: HexColor,
    pub font: FontFamily,
}

/// Complete set of editable attributes for one business card.
///
/// Fields are read through accessors outside this crate; every change goes
/// through [`CardConfiguration::with_update`] or
/// [`crate::theme::apply_theme`]. Deserializing checks that a non-custom
/// theme carries exactly its table colors and font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawCardConfiguration")]
pub struct CardConfiguration {
    pub(crate) name: String,
    pub(crate) position: String,
    pub(crate) company: String,
    pub(crate) email: String,
    pub(crate) phone: String,
    pub(crate) theme: Theme,
    pub(crate) background_color: HexColor,
    pub(crate) text_color: HexColor,
    pub(crate) border_width: BorderWidth,
    pub(crate) border_color: HexColor,
    pub(crate) background_image: Option<CardImage>,
    pub(crate) font: FontFamily,
    pub(crate) orientation: Orientation,
    pub(crate) show_social: bool,
    pub(crate) social_media: SocialLinks,
    pub(crate) image: CardImage,
}

/// Wire shape of [`CardConfiguration`] before cross-field checks
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCardConfiguration {
    name: String,
    position: String,
    company: String,
    email: String,
    phone: String,
    theme: Theme,
    background_color: HexColor,
    text_color: HexColor,
    border_width: BorderWidth,
    border_color: HexColor,
    background_image: Option<CardImage>,
    font: FontFamily,
    orientation: Orientation,
    show_social: bool,
    social_media: SocialLinks,
    image: CardImage,
}

impl TryFrom<RawCardConfiguration> for CardConfiguration {
    type Error = CardError;

    fn try_from(raw: RawCardConfiguration) -> Result<Self, Self::Error> {
        let config = CardConfiguration {
            name: raw.name,
            position: raw.position,
            company: raw.company,
            email: raw.email,
            phone: raw.phone,
            theme: raw.theme,
            background_color: raw.background_color,
            text_color: raw.text_color,
            border_width: raw.border_width,
            border_color: raw.border_color,
            background_image: raw.background_image,
            font: raw.font,
            orientation: raw.orientation,
            show_social: raw.show_social,
            social_media: raw.social_media,
            image: raw.image,
        };
        config.check_theme_appearance()?;
        Ok(config)
    }
}

impl Default for CardConfiguration {
    fn default() -> Self {
        Self {
            name: "Joe Dove".to_string(),
            position: "VP".to_string(),
            company: "FirstMeet Corp".to_string(),
            email: "joe.dove@fmcorp.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            theme: Theme::Custom,
            background_color: theme::table_color("#f0f0f0"),
            text_color: theme::table_color("#ccddff"),
            border_width: BorderWidth::new(2).unwrap_or_default(),
            border_color: theme::table_color("#000000"),
            background_image: Some(CardImage::default_background()),
            font: FontFamily::Inter,
            orientation: Orientation::Landscape,
            show_social: false,
            social_media: SocialLinks::default(),
            image: CardImage::Placeholder,
        }
    }
}

/// A single typed field replacement.
///
/// This is the closed set of things an input handler may change. The theme
/// itself is not here: switching themes rewrites several fields at once and
/// goes through [`crate::theme::apply_theme`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Identity(IdentityField, String),
    BackgroundColor(HexColor),
    TextColor(HexColor),
    BorderColor(HexColor),
    BorderWidth(BorderWidth),
    BackgroundImage(Option<CardImage>),
    Font(FontFamily),
    Image(CardImage),
    ShowSocial(bool),
    Orientation(Orientation),
    SocialUsername(SocialPlatform, String),
}

impl FieldUpdate {
    /// Serialized name of the field this update targets
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldUpdate::Identity(field, _) => field.as_str(),
            FieldUpdate::BackgroundColor(_) => "backgroundColor",
            FieldUpdate::TextColor(_) => "textColor",
            FieldUpdate::BorderColor(_) => "borderColor",
            FieldUpdate::BorderWidth(_) => "borderWidth",
            FieldUpdate::BackgroundImage(_) => "backgroundImage",
            FieldUpdate::Font(_) => "font",
            FieldUpdate::Image(_) => "image",
            FieldUpdate::ShowSocial(_) => "showSocial",
            FieldUpdate::Orientation(_) => "orientation",
            FieldUpdate::SocialUsername(_, _) => "socialMedia",
        }
    }

    /// Whether the active theme owns this field
    pub(crate) fn is_theme_owned(&self) -> bool {
        matches!(
            self,
            FieldUpdate::BackgroundColor(_)
                | FieldUpdate::TextColor(_)
                | FieldUpdate::BorderColor(_)
                | FieldUpdate::Font(_)
        )
    }
}

impl CardConfiguration {
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn background_color(&self) -> &HexColor {
        &self.background_color
    }

    pub fn text_color(&self) -> &HexColor {
        &self.text_color
    }

    pub fn border_width(&self) -> BorderWidth {
        self.border_width
    }

    pub fn border_color(&self) -> &HexColor {
        &self.border_color
    }

    pub fn background_image(&self) -> Option<&CardImage> {
        self.background_image.as_ref()
    }

    pub fn font(&self) -> FontFamily {
        self.font
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn show_social(&self) -> bool {
        self.show_social
    }

    pub fn social_media(&self) -> &SocialLinks {
        &self.social_media
    }

    /// Avatar image
    pub fn image(&self) -> &CardImage {
        &self.image
    }

    /// Text of an identity field
    pub fn identity(&self, field: IdentityField) -> &str {
        match field {
            IdentityField::Name => &self.name,
            IdentityField::Position => &self.position,
            IdentityField::Company => &self.company,
            IdentityField::Email => &self.email,
            IdentityField::Phone => &self.phone,
        }
    }

    /// The four theme-controlled appearance values
    pub fn appearance(&self) -> Appearance {
        Appearance {
            background_color: self.background_color.clone(),
            text_color: self.text_color.clone(),
            border_color: self.border_color.clone(),
            font: self.font,
        }
    }

    /// A non-custom theme must carry its table colors and font
    fn check_theme_appearance(&self) -> CardResult<()> {
        if self.theme.is_custom() {
            return Ok(());
        }
        let table = theme::style(self.theme);
        let mismatch = if self.background_color.as_str() != table.background {
            Some("backgroundColor")
        } else if self.text_color.as_str() != table.text {
            Some("textColor")
        } else if self.border_color.as_str() != table.border {
            Some("borderColor")
        } else if self.font != table.font {
            Some("font")
        } else {
            None
        };
        match mismatch {
            Some(field) => Err(CardError::ThemeLocked {
                field,
                theme: self.theme.as_str(),
            }),
            None => Ok(()),
        }
    }

    /// Produce a new configuration with one field replaced.
    ///
    /// Colors and font are rejected with [`CardError::ThemeLocked`] unless the
    /// theme is custom; `self` is never modified.
    pub fn with_update(&self, update: FieldUpdate) -> CardResult<Self> {
        if update.is_theme_owned() && !self.theme.is_custom() {
            return Err(CardError::ThemeLocked {
                field: update.field_name(),
                theme: self.theme.as_str(),
            });
        }

        Ok(self.replaced(update))
    }

    /// `update` applied without the theme lock check
    pub(crate) fn replaced(&self, update: FieldUpdate) -> Self {
        let mut next = self.clone();
        match update {
            FieldUpdate::Identity(field, text) => match field {
                IdentityField::Name => next.name = text,
                IdentityField::Position => next.position = text,
                IdentityField::Company => next.company = text,
                IdentityField::Email => next.email = text,
                IdentityField::Phone => next.phone = text,
            },
            FieldUpdate::BackgroundColor(color) => next.background_color = color,
            FieldUpdate::TextColor(color) => next.text_color = color,
            FieldUpdate::BorderColor(color) => next.border_color = color,
            FieldUpdate::BorderWidth(width) => next.border_width = width,
            FieldUpdate::BackgroundImage(image) => next.background_image = image,
            FieldUpdate::Font(font) => next.font = font,
            FieldUpdate::Image(image) => next.image = image,
            FieldUpdate::ShowSocial(show) => next.show_social = show,
            FieldUpdate::Orientation(orientation) => next.orientation = orientation,
            FieldUpdate::SocialUsername(platform, username) => {
                next.social_media = self.social_media.with_username(platform, username)
            }
        }
        next
    }

    /// Load a configuration from JSON
    pub fn from_json(json: &str) -> CardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty JSON representation
    pub fn to_json(&self) -> CardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_first_mount() {
        let config = CardConfiguration::default();
        assert_eq!(config.name, "Joe Dove");
        assert_eq!(config.theme, Theme::Custom);
        assert_eq!(config.border_width.get(), 2);
        assert_eq!(config.orientation, Orientation::Landscape);
        assert!(!config.show_social);
        assert!(config.image.is_placeholder());
        assert_eq!(config.social_media.len(), 5);
    }

    #[test]
    fn identity_update_replaces_one_field() {
        let config = CardConfiguration::default();
        let next = config
            .with_update(FieldUpdate::Identity(IdentityField::Email, "a@b.c".into()))
            .unwrap();
        assert_eq!(next.email, "a@b.c");
        assert_eq!(config.email, "joe.dove@fmcorp.com");
        assert_eq!(next.name, config.name);
    }

    #[test]
    fn colors_locked_outside_custom_theme() {
        let config = crate::theme::apply_theme(&CardConfiguration::default(), Theme::Bold);
        let err = config
            .with_update(FieldUpdate::BorderColor(HexColor::parse("#ff0000").unwrap()))
            .unwrap_err();
        assert!(matches!(err, CardError::ThemeLocked { field: "borderColor", theme: "bold" }));

        let err = config
            .with_update(FieldUpdate::Font(FontFamily::Lora))
            .unwrap_err();
        assert!(matches!(err, CardError::ThemeLocked { field: "font", .. }));
    }

    #[test]
    fn non_appearance_fields_open_under_any_theme() {
        let config = crate::theme::apply_theme(&CardConfiguration::default(), Theme::Minimal);
        let next = config.with_update(FieldUpdate::ShowSocial(true)).unwrap();
        assert!(next.show_social);
    }

    #[test]
    fn json_round_trip_preserves_config() {
        let config = CardConfiguration::default()
            .with_update(FieldUpdate::SocialUsername(SocialPlatform::Github, "joedove".into()))
            .unwrap();
        let json = config.to_json().unwrap();
        assert!(json.contains("\"backgroundColor\": \"#f0f0f0\""));
        assert_eq!(CardConfiguration::from_json(&json).unwrap(), config);
    }

    #[test]
    fn json_with_themed_appearance_loads() {
        let config = crate::theme::apply_theme(&CardConfiguration::default(), Theme::Modern);
        let json = config.to_json().unwrap();
        assert_eq!(CardConfiguration::from_json(&json).unwrap(), config);
    }

    #[test]
    fn json_with_off_table_color_for_theme_rejected() {
        let json = CardConfiguration::default()
            .to_json()
            .unwrap()
            .replace("\"custom\"", "\"modern\"")
            .replace("#000000", "#ff0000");
        let err = CardConfiguration::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("modern"), "{err}");
    }

    #[test]
    fn json_with_off_table_font_for_theme_rejected() {
        let config = crate::theme::apply_theme(&CardConfiguration::default(), Theme::Bold);
        let json = config.to_json().unwrap().replace("\"Oswald\"", "\"Lora\"");
        assert!(CardConfiguration::from_json(&json).is_err());
    }

    #[test]
    fn json_with_any_colors_loads_under_custom() {
        let json = CardConfiguration::default()
            .to_json()
            .unwrap()
            .replace("#000000", "#ff0000");
        let config = CardConfiguration::from_json(&json).unwrap();
        assert_eq!(config.border_color().as_str(), "#ff0000");
    }

    #[test]
    fn json_with_unknown_theme_rejected() {
        let json = CardConfiguration::default()
            .to_json()
            .unwrap()
            .replace("\"custom\"", "\"neon\"");
        assert!(CardConfiguration::from_json(&json).is_err());
    }
}
