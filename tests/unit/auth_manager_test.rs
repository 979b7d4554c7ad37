//! Unit tests for the AuthManager: validators, sign-up rules, sign-in,
//! session lifecycle, and UI-state restoration.

use std::sync::Arc;

use skillswap::database::connection::Database;
use skillswap::managers::auth_manager::{
    validate_email, validate_password, AuthManager, AuthManagerTrait,
};
use skillswap::services::local_store::{keys, LocalStore};
use skillswap::types::errors::AuthError;
use skillswap::types::user::{SignUpForm, StoredUser, UiState};

fn setup() -> LocalStore {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    LocalStore::new(Arc::new(db))
}

fn valid_form() -> SignUpForm {
    SignUpForm {
        name: "Test User".to_string(),
        email: "user@example.com".to_string(),
        password: "Passw0rd".to_string(),
        confirm_password: "Passw0rd".to_string(),
    }
}

#[test]
fn test_validate_email() {
    assert!(validate_email("user@example.com"));
    assert!(validate_email("a.b+c@sub.domain.org"));

    assert!(!validate_email("not-an-email"));
    assert!(!validate_email("missing@tld"));
    assert!(!validate_email("spaces in@mail.com"));
    assert!(!validate_email("@example.com"));
    assert!(!validate_email(""));
}

#[test]
fn test_validate_password() {
    assert!(validate_password("Passw0rd"));
    assert!(validate_password("Str0ngerPass"));

    // no digit / no uppercase
    assert!(!validate_password("password"));
    // too short
    assert!(!validate_password("Pa0s"));
    // no lowercase
    assert!(!validate_password("PASSW0RD"));
    // no digit
    assert!(!validate_password("Password"));
}

/// A valid sign-up makes the user retrievable by sign-in with the same
/// credentials.
#[test]
fn test_sign_up_then_sign_in() {
    let store = setup();
    let mut auth = AuthManager::new(store);
    let form = valid_form();

    auth.sign_up(&form).expect("sign-up should succeed");
    let session = auth
        .sign_in(&form.email, &form.password)
        .expect("sign-in should succeed");

    assert_eq!(session.email, form.email);
    assert_eq!(auth.ui_state(), UiState::Authenticated);
}

#[test]
fn test_sign_up_rejects_missing_fields() {
    let store = setup();
    let mut auth = AuthManager::new(store);

    let mut form = valid_form();
    form.name = String::new();
    assert!(matches!(auth.sign_up(&form), Err(AuthError::MissingFields)));

    let mut form = valid_form();
    form.confirm_password = String::new();
    assert!(matches!(auth.sign_up(&form), Err(AuthError::MissingFields)));
}

#[test]
fn test_sign_up_rejects_invalid_email() {
    let store = setup();
    let mut auth = AuthManager::new(store);
    let mut form = valid_form();
    form.email = "not-an-email".to_string();

    assert!(matches!(auth.sign_up(&form), Err(AuthError::InvalidEmail(_))));
}

#[test]
fn test_sign_up_rejects_weak_password() {
    let store = setup();
    let mut auth = AuthManager::new(store);
    let mut form = valid_form();
    form.password = "password".to_string();
    form.confirm_password = "password".to_string();

    assert!(matches!(auth.sign_up(&form), Err(AuthError::WeakPassword)));
}

#[test]
fn test_sign_up_rejects_mismatched_confirmation() {
    let store = setup();
    let mut auth = AuthManager::new(store);
    let mut form = valid_form();
    form.confirm_password = "Passw0rd2".to_string();

    assert!(matches!(auth.sign_up(&form), Err(AuthError::PasswordMismatch)));
}

/// Duplicate sign-up is rejected and the original record is unchanged.
#[test]
fn test_sign_up_duplicate_email_keeps_original() {
    let store = setup();
    let mut auth = AuthManager::new(store.clone());

    auth.sign_up(&valid_form()).expect("first sign-up");
    let before: Vec<StoredUser> = store.get(keys::USERS).unwrap().unwrap();

    let mut second = valid_form();
    second.name = "Imposter".to_string();
    second.password = "Diff3rent".to_string();
    second.confirm_password = "Diff3rent".to_string();
    assert!(matches!(auth.sign_up(&second), Err(AuthError::EmailTaken(_))));

    let after: Vec<StoredUser> = store.get(keys::USERS).unwrap().unwrap();
    assert_eq!(before, after);
}

/// Wrong password and unknown email fail identically, and neither creates
/// a session.
#[test]
fn test_sign_in_failure_is_generic_and_creates_no_session() {
    let store = setup();
    let mut auth = AuthManager::new(store.clone());
    auth.sign_up(&valid_form()).expect("sign-up");

    let wrong_password = auth.sign_in("user@example.com", "WrongPass1");
    let unknown_email = auth.sign_in("ghost@example.com", "Passw0rd");

    assert!(matches!(wrong_password, Err(AuthError::InvalidCredentials)));
    assert!(matches!(unknown_email, Err(AuthError::InvalidCredentials)));
    assert!(!store.contains(keys::SESSION));
    assert_eq!(auth.ui_state(), UiState::Guest);
}

#[test]
fn test_sign_in_requires_both_fields() {
    let store = setup();
    let mut auth = AuthManager::new(store);

    assert!(matches!(auth.sign_in("", "Passw0rd"), Err(AuthError::MissingFields)));
    assert!(matches!(
        auth.sign_in("user@example.com", ""),
        Err(AuthError::MissingFields)
    ));
}

#[test]
fn test_logout_clears_session() {
    let store = setup();
    let mut auth = AuthManager::new(store);
    auth.sign_up(&valid_form()).expect("sign-up");
    auth.sign_in("user@example.com", "Passw0rd").expect("sign-in");
    assert!(auth.current_session().is_some());

    auth.logout().expect("logout");
    assert!(auth.current_session().is_none());
    assert_eq!(auth.ui_state(), UiState::Guest);
}

/// Passwords must never be persisted in the clear.
#[test]
fn test_stored_users_hold_no_plaintext_password() {
    let store = setup();
    let mut auth = AuthManager::new(store.clone());
    auth.sign_up(&valid_form()).expect("sign-up");

    let users: Vec<StoredUser> = store.get(keys::USERS).unwrap().unwrap();
    assert_eq!(users.len(), 1);
    assert_ne!(users[0].password_hash, "Passw0rd");
    assert!(!users[0].password_hash.contains("Passw0rd"));
    assert!(!users[0].salt.is_empty());
}
