//! Social media handles
//!
//! The card carries exactly one entry per supported platform, in a fixed
//! order. Only usernames change; the list itself is never resized or
//! reordered.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

/// Supported social platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Instagram,
    Youtube,
    Twitter,
    Github,
    Chat,
}

impl SocialPlatform {
    /// Platforms in card order
    pub const ALL: [SocialPlatform; 5] = [
        SocialPlatform::Instagram,
        SocialPlatform::Youtube,
        SocialPlatform::Twitter,
        SocialPlatform::Github,
        SocialPlatform::Chat,
    ];

    /// Immutable platform identifier
    pub fn id(&self) -> &'static str {
        match self {
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Youtube => "youtube",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Github => "github",
            SocialPlatform::Chat => "chat",
        }
    }

    /// Display glyph shown next to the username
    pub fn icon(&self) -> &'static str {
        match self {
            SocialPlatform::Instagram => "📷",
            SocialPlatform::Youtube => "▶",
            SocialPlatform::Twitter => "🐦",
            SocialPlatform::Github => "🐙",
            SocialPlatform::Chat => "💬",
        }
    }

    /// Public profile link for a username
    pub fn profile_url(&self, username: &str) -> String {
        format!("https://{}.com/{}", self.id(), username)
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SocialPlatform {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        SocialPlatform::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CardError::UnknownPlatform(s.to_string()))
    }
}

/// One platform/username pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialHandle {
    pub platform: SocialPlatform,
    pub username: String,
}

impl SocialHandle {
    pub fn is_set(&self) -> bool {
        !self.username.trim().is_empty()
    }

    pub fn profile_url(&self) -> String {
        self.platform.profile_url(self.username.trim())
    }
}

/// The five social handles, one per platform, in [`SocialPlatform::ALL`] order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SocialHandle>", into = "Vec<SocialHandle>")]
pub struct SocialLinks([SocialHandle; 5]);

impl SocialLinks {
    /// Username for a platform
    pub fn username(&self, platform: SocialPlatform) -> &str {
        &self.0[Self::slot(platform)].username
    }

    /// Copy of these links with one username replaced
    pub fn with_username(&self, platform: SocialPlatform, username: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.0[Self::slot(platform)].username = username.into();
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = &SocialHandle> {
        self.0.iter()
    }

    /// Handles with a non-empty username, in card order
    pub fn visible(&self) -> impl Iterator<Item = &SocialHandle> {
        self.0.iter().filter(|h| h.is_set())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    fn slot(platform: SocialPlatform) -> usize {
        SocialPlatform::ALL
            .iter()
            .position(|p| *p == platform)
            .unwrap_or_default()
    }
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self(SocialPlatform::ALL.map(|platform| SocialHandle {
            platform,
            username: String::new(),
        }))
    }
}

impl TryFrom<Vec<SocialHandle>> for SocialLinks {
    type Error = CardError;

    fn try_from(handles: Vec<SocialHandle>) -> CardResult<Self> {
        let mut links = SocialLinks::default();
        if handles.len() != SocialPlatform::ALL.len() {
            return Err(CardError::UnknownPlatform(format!(
                "expected {} social entries, got {}",
                SocialPlatform::ALL.len(),
                handles.len()
            )));
        }
        for (i, handle) in handles.into_iter().enumerate() {
            if handle.platform != SocialPlatform::ALL[i] {
                return Err(CardError::UnknownPlatform(format!(
                    "entry {} is {}, expected {}",
                    i,
                    handle.platform,
                    SocialPlatform::ALL[i]
                )));
            }
            links.0[i].username = handle.username;
        }
        Ok(links)
    }
}

impl From<SocialLinks> for Vec<SocialHandle> {
    fn from(links: SocialLinks) -> Self {
        links.0.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_five_platforms_in_order() {
        let links = SocialLinks::default();
        let platforms: Vec<_> = links.iter().map(|h| h.platform).collect();
        assert_eq!(platforms, SocialPlatform::ALL.to_vec());
        assert!(links.iter().all(|h| h.username.is_empty()));
    }

    #[test]
    fn with_username_only_touches_target() {
        let links = SocialLinks::default().with_username(SocialPlatform::Github, "octocat");
        assert_eq!(links.username(SocialPlatform::Github), "octocat");
        assert_eq!(links.username(SocialPlatform::Twitter), "");
        assert_eq!(links.len(), 5);
    }

    #[test]
    fn visible_skips_blank_usernames() {
        let links = SocialLinks::default()
            .with_username(SocialPlatform::Chat, "joe")
            .with_username(SocialPlatform::Instagram, "   ");
        let visible: Vec<_> = links.visible().map(|h| h.platform).collect();
        assert_eq!(visible, vec![SocialPlatform::Chat]);
    }

    #[test]
    fn profile_url_uses_platform_domain() {
        assert_eq!(
            SocialPlatform::Youtube.profile_url("joedove"),
            "https://youtube.com/joedove"
        );
    }

    #[test]
    fn unknown_platform_rejected() {
        assert!(matches!(
            "myspace".parse::<SocialPlatform>(),
            Err(CardError::UnknownPlatform(_))
        ));
    }

    #[test]
    fn deserialize_rejects_reordered_list() {
        let mut handles: Vec<SocialHandle> = SocialLinks::default().into();
        handles.swap(0, 1);
        let json = serde_json::to_string(&handles).unwrap();
        assert!(serde_json::from_str::<SocialLinks>(&json).is_err());
    }

    #[test]
    fn deserialize_rejects_short_list() {
        let json = r#"[{"platform":"instagram","username":"a"}]"#;
        assert!(serde_json::from_str::<SocialLinks>(json).is_err());
    }
}
