//! Card Configuration Store
//!
//! Owns the current [`CardConfiguration`], the inline edit session and the
//! image ticket issuer for one editor instance. Every change goes through a
//! value replacement: the next configuration is built from the current one
//! and swapped in only when the update is accepted.

use tracing::{debug, warn};

use crate::acquire::{ImageRequests, ImageSlot, ImageTicket};
use crate::edit::{EditKey, EditSession};
use crate::error::CardResult;
use crate::theme;
use crate::types::{
    BorderWidth, CardConfiguration, CardImage, FieldUpdate, IdentityField, SocialPlatform, Theme,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardStore {
    config: CardConfiguration,
    session: EditSession,
    requests: ImageRequests,
}

impl CardStore {
    pub fn new(config: CardConfiguration) -> Self {
        Self {
            config,
            session: EditSession::default(),
            requests: ImageRequests::default(),
        }
    }

    pub fn config(&self) -> &CardConfiguration {
        &self.config
    }

    pub fn session(&self) -> EditSession {
        self.session
    }

    /// Replace one field. Rejected updates leave the store untouched.
    pub fn replace_field(&mut self, update: FieldUpdate) -> CardResult<()> {
        let field = update.field_name();
        match self.config.with_update(update) {
            Ok(next) => {
                self.config = next;
                debug!(field, "field updated");
                Ok(())
            }
            Err(e) => {
                warn!(field, error = %e, "rejected field update");
                Err(e)
            }
        }
    }

    /// Replace a field no theme owns. These are never rejected, so there is
    /// no result to report.
    fn replace_open_field(&mut self, update: FieldUpdate) {
        debug_assert!(!update.is_theme_owned());
        let field = update.field_name();
        self.config = self.config.replaced(update);
        debug!(field, "field updated");
    }

    /// Text typed into an inline editor
    pub fn set_identity(&mut self, field: IdentityField, text: impl Into<String>) {
        self.replace_open_field(FieldUpdate::Identity(field, text.into()));
    }

    /// Raw text from the border width box
    pub fn set_border_width_input(&mut self, input: &str) -> CardResult<()> {
        let width = BorderWidth::parse(input).inspect_err(|e| {
            warn!(input, error = %e, "rejected border width");
        })?;
        self.replace_field(FieldUpdate::BorderWidth(width))
    }

    /// Raw text from the background URL box
    pub fn set_background_image_input(&mut self, input: &str) {
        self.replace_open_field(FieldUpdate::BackgroundImage(CardImage::from_input(input)));
    }

    pub fn set_social_username(&mut self, platform: SocialPlatform, username: impl Into<String>) {
        self.replace_open_field(FieldUpdate::SocialUsername(platform, username.into()));
    }

    pub fn apply_theme(&mut self, theme: Theme) {
        self.config = theme::apply_theme(&self.config, theme);
    }

    /// Apply a theme by name; unknown names are rejected without change
    pub fn apply_theme_name(&mut self, name: &str) -> CardResult<()> {
        let theme = name.parse::<Theme>().inspect_err(|e| {
            warn!(error = %e, "rejected theme");
        })?;
        self.apply_theme(theme);
        Ok(())
    }

    pub fn toggle_orientation(&mut self) {
        let next = self.config.orientation.toggled();
        self.replace_open_field(FieldUpdate::Orientation(next));
    }

    pub fn toggle_social(&mut self) {
        let next = !self.config.show_social;
        self.replace_open_field(FieldUpdate::ShowSocial(next));
    }

    pub fn begin_edit(&mut self, field: IdentityField) {
        self.session.begin(field);
    }

    pub fn end_edit(&mut self) {
        self.session.end();
    }

    pub fn edit_key(&mut self, key: EditKey) {
        self.session.on_key(key);
    }

    /// Register a new image read for `slot`
    pub fn begin_image(&mut self, slot: ImageSlot) -> ImageTicket {
        self.requests.issue(slot)
    }

    /// Land a finished read. Returns false when a newer read superseded it.
    pub fn commit_image(&mut self, ticket: ImageTicket, data_uri: String) -> bool {
        if !self.requests.redeem(ticket) {
            return false;
        }
        let image = CardImage::from_data_uri(data_uri);
        let update = match ticket.slot {
            ImageSlot::Avatar => FieldUpdate::Image(image),
            ImageSlot::Background => FieldUpdate::BackgroundImage(Some(image)),
        };
        self.replace_open_field(update);
        true
    }

    /// Selection cancelled or unreadable: drop the ticket, keep the image
    pub fn abandon_image(&mut self, ticket: ImageTicket) {
        if self.requests.is_current(ticket) {
            self.requests.cancel(ticket.slot);
        }
    }

    /// Back to the placeholder avatar
    pub fn clear_avatar(&mut self) {
        self.requests.cancel(ImageSlot::Avatar);
        self.replace_open_field(FieldUpdate::Image(CardImage::Placeholder));
    }

    pub fn clear_background_image(&mut self) {
        self.requests.cancel(ImageSlot::Background);
        self.replace_open_field(FieldUpdate::BackgroundImage(None));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CardError;
    use crate::types::{HexColor, Orientation};

    #[test]
    fn rejected_update_keeps_previous_config() {
        let mut store = CardStore::default();
        store.apply_theme(Theme::Vintage);
        let before = store.config().clone();

        let result =
            store.replace_field(FieldUpdate::TextColor(HexColor::parse("#123456").unwrap()));
        assert!(matches!(result, Err(CardError::ThemeLocked { .. })));
        assert_eq!(store.config(), &before);
    }

    #[test]
    fn border_width_out_of_range_is_noop() {
        let mut store = CardStore::default();
        assert!(store.set_border_width_input("15").is_err());
        assert!(store.set_border_width_input("wide").is_err());
        assert_eq!(store.config().border_width.get(), 2);

        store.set_border_width_input("7").unwrap();
        assert_eq!(store.config().border_width.get(), 7);
    }

    #[test]
    fn unknown_theme_name_is_noop() {
        let mut store = CardStore::default();
        let before = store.config().clone();
        assert!(store.apply_theme_name("neon").is_err());
        assert_eq!(store.config(), &before);

        store.apply_theme_name("bold").unwrap();
        assert_eq!(store.config().theme, Theme::Bold);
    }

    #[test]
    fn toggles_flip() {
        let mut store = CardStore::default();
        store.toggle_orientation();
        assert_eq!(store.config().orientation, Orientation::Portrait);
        store.toggle_social();
        assert!(store.config().show_social);
        store.toggle_social();
        assert!(!store.config().show_social);
    }

    #[test]
    fn open_fields_apply_under_locked_theme() {
        let mut store = CardStore::default();
        store.apply_theme(Theme::Bold);

        store.set_identity(IdentityField::Name, "Ada");
        store.set_social_username(SocialPlatform::Github, "ada");
        store.toggle_social();
        store.toggle_orientation();
        store.set_background_image_input("https://example.com/bg.png");
        let ticket = store.begin_image(ImageSlot::Avatar);
        assert!(store.commit_image(ticket, "data:image/png;base64,AA".into()));

        let config = store.config();
        assert_eq!(config.name, "Ada");
        assert_eq!(config.social_media.username(SocialPlatform::Github), "ada");
        assert!(config.show_social);
        assert_eq!(config.orientation, Orientation::Portrait);
        assert!(config.background_image.is_some());
        assert!(config.image.is_embedded());
        assert_eq!(config.theme, Theme::Bold);
    }

    #[test]
    fn stale_image_read_discarded() {
        let mut store = CardStore::default();
        let first = store.begin_image(ImageSlot::Avatar);
        let second = store.begin_image(ImageSlot::Avatar);

        assert!(store.commit_image(second, "data:image/png;base64,NEW".into()));
        assert!(!store.commit_image(first, "data:image/png;base64,OLD".into()));
        assert_eq!(
            store.config().image,
            CardImage::DataUri("data:image/png;base64,NEW".into())
        );
    }

    #[test]
    fn background_read_lands_in_background_slot() {
        let mut store = CardStore::default();
        let ticket = store.begin_image(ImageSlot::Background);
        assert!(store.commit_image(ticket, "data:image/gif;base64,R0lG".into()));
        assert_eq!(
            store.config().background_image,
            Some(CardImage::DataUri("data:image/gif;base64,R0lG".into()))
        );
        assert!(store.config().image.is_placeholder());
    }

    #[test]
    fn abandoned_read_changes_nothing() {
        let mut store = CardStore::default();
        let before = store.config().clone();
        let ticket = store.begin_image(ImageSlot::Avatar);
        store.abandon_image(ticket);
        assert_eq!(store.config(), &before);
        assert!(!store.commit_image(ticket, "data:image/png;base64,X".into()));
    }

    #[test]
    fn clearing_avatar_cancels_pending_read() {
        let mut store = CardStore::default();
        let ticket = store.begin_image(ImageSlot::Avatar);
        store.clear_avatar();
        assert!(!store.commit_image(ticket, "data:image/png;base64,X".into()));
        assert!(store.config().image.is_placeholder());
    }

    #[test]
    fn background_url_input() {
        let mut store = CardStore::default();
        store.set_background_image_input("");
        assert_eq!(store.config().background_image, None);
        store.set_background_image_input("https://example.com/a.png");
        assert_eq!(
            store.config().background_image,
            Some(CardImage::Url("https://example.com/a.png".into()))
        );
    }

    #[test]
    fn edit_session_enter_closes() {
        let mut store = CardStore::default();
        store.begin_edit(IdentityField::Name);
        store.set_identity(IdentityField::Name, "Jo");
        store.edit_key(EditKey::Enter);
        assert_eq!(store.session(), EditSession::Idle);
        assert_eq!(store.config().name, "Jo");
    }
}
