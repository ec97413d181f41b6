//! Font catalogue
//!
//! The six families are requested from Google Fonts once when the editor
//! mounts. A failed load is not retried; the CSS stack falls back to the
//! generic family.

use crate::types::FontFamily;

const STYLESHEET_BASE: &str = "https://fonts.googleapis.com/css2";

/// Stylesheet URL for one family
pub fn stylesheet_url(font: FontFamily) -> String {
    format!(
        "{}?family={}&display=swap",
        STYLESHEET_BASE,
        font.name().replace(' ', "+")
    )
}

/// Stylesheet URLs for every supported family
pub fn stylesheet_urls() -> Vec<String> {
    FontFamily::ALL.into_iter().map(stylesheet_url).collect()
}

/// CSS `font-family` value with a generic fallback
pub fn css_family(font: FontFamily) -> String {
    format!("'{}', {}", font.name(), font.generic_family())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_word_family_uses_plus() {
        assert_eq!(
            stylesheet_url(FontFamily::PlayfairDisplay),
            "https://fonts.googleapis.com/css2?family=Playfair+Display&display=swap"
        );
    }

    #[test]
    fn one_stylesheet_per_family() {
        let urls = stylesheet_urls();
        assert_eq!(urls.len(), 6);
        assert!(urls.iter().all(|u| u.ends_with("&display=swap")));
    }

    #[test]
    fn css_family_has_fallback() {
        assert_eq!(css_family(FontFamily::Lora), "'Lora', serif");
        assert_eq!(css_family(FontFamily::Oswald), "'Oswald', sans-serif");
    }
}
