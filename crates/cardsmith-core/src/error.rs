//! Error types for Cardsmith

use thiserror::Error;

/// Main error type for card configuration operations
#[derive(Error, Debug)]
pub enum CardError {
    /// Border width input did not parse as an integer
    #[error("Invalid border width: {0:?}")]
    InvalidBorderWidth(String),

    /// Border width parsed but falls outside 0..=10
    #[error("Border width {0} is outside 0..={max}", max = crate::types::BorderWidth::MAX)]
    BorderWidthOutOfRange(i64),

    /// Color is not a `#rrggbb` (or `#rgb`) hex string
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    /// Theme name outside the fixed set
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// Social platform identifier outside the fixed set
    #[error("Unknown social platform: {0}")]
    UnknownPlatform(String),

    /// Font family outside the supported list
    #[error("Unknown font: {0}")]
    UnknownFont(String),

    /// Field identifier outside the editable identity fields
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Language code other than en/zh
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// Orientation name other than landscape/portrait
    #[error("Unknown orientation: {0}")]
    UnknownOrientation(String),

    /// Appearance field is owned by the active theme table
    #[error("{field} is fixed by the {theme} theme; switch to custom to edit it")]
    ThemeLocked {
        field: &'static str,
        theme: &'static str,
    },

    /// Selected file could not be decoded as an image
    #[error("Image error: {0}")]
    Image(String),

    /// Rendering or encoding the exported card failed
    #[error("Export error: {0}")]
    Export(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration JSON could not be read or written
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CardError::UnknownTheme("neon".to_string());
        assert_eq!(format!("{}", err), "Unknown theme: neon");

        let err = CardError::BorderWidthOutOfRange(15);
        assert_eq!(format!("{}", err), "Border width 15 is outside 0..=10");
    }

    #[test]
    fn test_theme_locked_display() {
        let err = CardError::ThemeLocked {
            field: "borderColor",
            theme: "modern",
        };
        assert_eq!(
            err.to_string(),
            "borderColor is fixed by the modern theme; switch to custom to edit it"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let card_err: CardError = io_err.into();
        assert!(matches!(card_err, CardError::Io(_)));
    }
}
