use serde::{Deserialize, Serialize};

/// A registered user as persisted in the local user list.
///
/// Passwords are never stored in the clear: `password_hash` is a PBKDF2
/// digest and `salt` is the per-user random salt, both base64-encoded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredUser {
    pub name: String,
    pub email: String,
    pub salt: String,
    pub password_hash: String,
}

/// The locally persisted record marking the current user as authenticated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub email: String,
    /// Login time, milliseconds since the UNIX epoch.
    pub timestamp: i64,
}

/// Sign-up form fields as read from the UI.
#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Which navigation/CTA affordances a page should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Guest,
    Authenticated,
}
