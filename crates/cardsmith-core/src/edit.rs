//! In-place field edit session
//!
//! At most one identity field is open for text entry. Text is committed
//! keystroke by keystroke through the store, so leaving a field only closes
//! the editor; there is nothing to cancel.

use crate::types::IdentityField;

/// Keys the inline editor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Enter,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(IdentityField),
}

impl EditSession {
    /// Open `field` for editing, closing whichever field was open
    pub fn begin(&mut self, field: IdentityField) {
        *self = EditSession::Editing(field);
    }

    /// Blur: close the editor
    pub fn end(&mut self) {
        *self = EditSession::Idle;
    }

    /// Key press while editing. Enter and Escape both close the editor.
    ///
    /// Returns whether the session changed.
    pub fn on_key(&mut self, key: EditKey) -> bool {
        match (*self, key) {
            (EditSession::Editing(_), EditKey::Enter | EditKey::Escape) => {
                self.end();
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<IdentityField> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing(field) => Some(*field),
        }
    }

    pub fn is_editing(&self, field: IdentityField) -> bool {
        self.current() == Some(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        assert_eq!(EditSession::default(), EditSession::Idle);
        assert_eq!(EditSession::default().current(), None);
    }

    #[test]
    fn begin_switches_field_exclusively() {
        let mut session = EditSession::default();
        session.begin(IdentityField::Name);
        assert!(session.is_editing(IdentityField::Name));

        session.begin(IdentityField::Email);
        assert_eq!(session, EditSession::Editing(IdentityField::Email));
        assert!(!session.is_editing(IdentityField::Name));
    }

    #[test]
    fn enter_closes_editor() {
        let mut session = EditSession::Editing(IdentityField::Phone);
        assert!(session.on_key(EditKey::Enter));
        assert_eq!(session, EditSession::Idle);
    }

    #[test]
    fn other_keys_keep_editing() {
        let mut session = EditSession::Editing(IdentityField::Company);
        assert!(!session.on_key(EditKey::Other));
        assert!(session.is_editing(IdentityField::Company));
    }

    #[test]
    fn keys_while_idle_are_ignored() {
        let mut session = EditSession::Idle;
        assert!(!session.on_key(EditKey::Enter));
        assert_eq!(session, EditSession::Idle);
    }
}
