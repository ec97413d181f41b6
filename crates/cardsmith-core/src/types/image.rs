//! Card Image Type - avatar and background sources
//!
//! Images are either the built-in placeholder, a remote URL typed by the
//! user, or a data URI produced from a locally selected file.

use serde::{Deserialize, Serialize};

/// Default animated background used by the custom theme
pub const DEFAULT_BACKGROUND_URL: &str = "https://media4.giphy.com/media/v1.Y2lkPTc5MGI3NjExbzFxMGJwd2lwaDhqcXFxZmNjaXVjZjk4ZjNzdnJma3k4ZmxocXJtZyZlcD12MV9pbnRlcm5hbF9naWZfYnlfaWQmY3Q9Zw/S8ZM7uiGCJVv25rrhc/giphy.gif";

/// Image data for the card (avatar, background)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardImage {
    /// Built-in placeholder avatar
    #[default]
    Placeholder,

    /// Remote image reference
    Url(String),

    /// Base64 data URI
    /// Format: "data:image/png;base64,..."
    DataUri(String),
}

impl CardImage {
    /// Interpret free text from the background URL box.
    ///
    /// Empty text means "no image".
    pub fn from_input(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.starts_with("data:") {
            Some(CardImage::DataUri(trimmed.to_string()))
        } else {
            Some(CardImage::Url(trimmed.to_string()))
        }
    }

    /// Create from data URI
    pub fn from_data_uri(uri: String) -> Self {
        CardImage::DataUri(uri)
    }

    /// Source usable in `src`/`url(...)`, `None` for the placeholder
    pub fn src(&self) -> Option<&str> {
        match self {
            CardImage::Placeholder => None,
            CardImage::Url(url) => Some(url),
            CardImage::DataUri(uri) => Some(uri),
        }
    }

    /// Whether the image is embedded and needs no network access
    pub fn is_embedded(&self) -> bool {
        matches!(self, CardImage::DataUri(uri) if !uri.is_empty())
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, CardImage::Placeholder)
    }

    /// Get a descriptive string for the image type
    pub fn image_type(&self) -> &'static str {
        match self {
            CardImage::Placeholder => "placeholder",
            CardImage::Url(_) => "url",
            CardImage::DataUri(_) => "data-uri",
        }
    }

    /// The custom theme's default background
    pub fn default_background() -> Self {
        CardImage::Url(DEFAULT_BACKGROUND_URL.to_string())
    }
}
