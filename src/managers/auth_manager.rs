//! Auth Manager for SkillSwap.
//!
//! Sign-up and sign-in against the locally persisted user list, session
//! create/clear, and guest vs authenticated UI-state restoration. This is
//! mock authentication (there is no backend), but credentials are still
//! stored as salted PBKDF2 hashes, never plaintext.

use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Utc;
use regex::Regex;

use crate::services::crypto_service::{CryptoService, CryptoServiceTrait};
use crate::services::local_store::{keys, LocalStore};
use crate::types::errors::AuthError;
use crate::types::user::{Session, SignUpForm, StoredUser, UiState};

/// Trait defining authentication operations.
pub trait AuthManagerTrait {
    fn sign_up(&mut self, form: &SignUpForm) -> Result<(), AuthError>;
    fn sign_in(&mut self, email: &str, password: &str) -> Result<Session, AuthError>;
    fn logout(&mut self) -> Result<(), AuthError>;
    fn current_session(&self) -> Option<Session>;
    fn ui_state(&self) -> UiState;
}

/// Auth manager backed by the local store.
pub struct AuthManager {
    store: LocalStore,
    crypto: CryptoService,
}

/// Returns true for a structurally plausible email address.
pub fn validate_email(email: &str) -> bool {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    });
    re.is_match(email)
}

/// Returns true when the password is at least 8 characters and contains an
/// uppercase letter, a lowercase letter, and a digit.
pub fn validate_password(password: &str) -> bool {
    password.len() >= 8
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

impl AuthManager {
    pub fn new(store: LocalStore) -> Self {
        Self {
            store,
            crypto: CryptoService::new(),
        }
    }

    fn load_users(&self) -> Result<Vec<StoredUser>, AuthError> {
        self.store
            .get_or_default(keys::USERS)
            .map_err(|e| AuthError::StoreError(e.to_string()))
    }

    fn save_users(&self, users: &[StoredUser]) -> Result<(), AuthError> {
        self.store
            .set(keys::USERS, &users)
            .map_err(|e| AuthError::StoreError(e.to_string()))
    }
}

impl AuthManagerTrait for AuthManager {
    /// Validates the sign-up form and appends a new user record.
    ///
    /// All fields are required; the email must be well-formed and unused;
    /// the password must meet the strength rule and match its confirmation.
    fn sign_up(&mut self, form: &SignUpForm) -> Result<(), AuthError> {
        let name = form.name.trim();
        let email = form.email.trim();

        if name.is_empty()
            || email.is_empty()
            || form.password.is_empty()
            || form.confirm_password.is_empty()
        {
            return Err(AuthError::MissingFields);
        }
        if !validate_email(email) {
            return Err(AuthError::InvalidEmail(email.to_string()));
        }
        if !validate_password(&form.password) {
            return Err(AuthError::WeakPassword);
        }
        if form.password != form.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        let mut users = self.load_users()?;
        if users.iter().any(|user| user.email == email) {
            return Err(AuthError::EmailTaken(email.to_string()));
        }

        let salt = self
            .crypto
            .generate_salt()
            .map_err(|e| AuthError::CryptoError(e.to_string()))?;
        let mut hash = self
            .crypto
            .hash_password(&form.password, &salt)
            .map_err(|e| AuthError::CryptoError(e.to_string()))?;

        users.push(StoredUser {
            name: name.to_string(),
            email: email.to_string(),
            salt: BASE64.encode(&salt),
            password_hash: BASE64.encode(&hash),
        });
        self.crypto.zeroize_memory(&mut hash);

        self.save_users(&users)
    }

    /// Verifies credentials and creates a session on success.
    ///
    /// Unknown email and wrong password both resolve to the same
    /// [`AuthError::InvalidCredentials`], so callers cannot enumerate users.
    fn sign_in(&mut self, email: &str, password: &str) -> Result<Session, AuthError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let users = self.load_users()?;
        let user = users
            .iter()
            .find(|user| user.email == email.trim())
            .ok_or(AuthError::InvalidCredentials)?;

        let salt = BASE64
            .decode(&user.salt)
            .map_err(|_| AuthError::InvalidCredentials)?;
        let mut expected = BASE64
            .decode(&user.password_hash)
            .map_err(|_| AuthError::InvalidCredentials)?;

        let verified = self.crypto.verify_password(password, &salt, &expected);
        self.crypto.zeroize_memory(&mut expected);
        if !verified {
            return Err(AuthError::InvalidCredentials);
        }

        let session = Session {
            email: user.email.clone(),
            timestamp: Utc::now().timestamp_millis(),
        };
        self.store
            .set(keys::SESSION, &session)
            .map_err(|e| AuthError::StoreError(e.to_string()))?;
        Ok(session)
    }

    /// Clears the current session.
    fn logout(&mut self) -> Result<(), AuthError> {
        self.store
            .remove(keys::SESSION)
            .map_err(|e| AuthError::StoreError(e.to_string()))
    }

    /// Reads the persisted session, if any. Called on every page load to
    /// restore UI state.
    fn current_session(&self) -> Option<Session> {
        self.store.get(keys::SESSION).ok().flatten()
    }

    /// Guest or authenticated, based on the persisted session.
    fn ui_state(&self) -> UiState {
        match self.current_session() {
            Some(_) => UiState::Authenticated,
            None => UiState::Guest,
        }
    }
}
