//! Unit tests for the ResumeManager: type/size validation, data-URL
//! storage, overwrite-on-reupload, and confirmed deletion.

use std::sync::Arc;

use skillswap::database::connection::Database;
use skillswap::managers::resume_manager::{
    ResumeManager, ResumeManagerTrait, MAX_RESUME_BYTES, PDF_MIME,
};
use skillswap::services::local_store::{keys, LocalStore};
use skillswap::types::errors::ResumeError;

fn setup() -> (LocalStore, ResumeManager) {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    let store = LocalStore::new(Arc::new(db));
    let manager = ResumeManager::new(store.clone());
    (store, manager)
}

/// A 2 MB PDF is accepted and stored as a data URL under its filename.
#[test]
fn test_upload_2mb_pdf() {
    let (_store, mut manager) = setup();
    let bytes = vec![0u8; 2 * 1024 * 1024];

    let resume = manager
        .upload("resume.pdf", PDF_MIME, &bytes)
        .expect("upload should succeed");

    assert_eq!(resume.file_name, "resume.pdf");
    assert!(resume.content.starts_with("data:application/pdf;base64,"));

    let stored = manager.current().expect("read").expect("present");
    assert_eq!(stored, resume);
}

/// A 6 MB file is rejected with a size error and nothing is persisted.
#[test]
fn test_upload_6mb_rejected() {
    let (store, mut manager) = setup();
    let bytes = vec![0u8; 6 * 1024 * 1024];

    let result = manager.upload("resume.pdf", PDF_MIME, &bytes);
    assert!(matches!(result, Err(ResumeError::TooLarge(_))));
    assert!(!store.contains(keys::RESUME));
}

#[test]
fn test_upload_at_limit_accepted() {
    let (_store, mut manager) = setup();
    let bytes = vec![0u8; MAX_RESUME_BYTES];
    assert!(manager.upload("resume.pdf", PDF_MIME, &bytes).is_ok());
}

#[test]
fn test_upload_non_pdf_rejected() {
    let (store, mut manager) = setup();

    let result = manager.upload("resume.docx", "application/msword", b"doc");
    assert!(matches!(result, Err(ResumeError::NotPdf(_))));
    assert!(!store.contains(keys::RESUME));
}

/// Re-upload overwrites the previous record; at most one resume exists.
#[test]
fn test_reupload_overwrites() {
    let (_store, mut manager) = setup();

    manager.upload("old.pdf", PDF_MIME, b"first").expect("first upload");
    manager.upload("new.pdf", PDF_MIME, b"second").expect("second upload");

    let stored = manager.current().expect("read").expect("present");
    assert_eq!(stored.file_name, "new.pdf");
}

#[test]
fn test_delete_requires_confirmation() {
    let (store, mut manager) = setup();
    manager.upload("resume.pdf", PDF_MIME, b"pdf").expect("upload");

    let result = manager.delete(false);
    assert!(matches!(result, Err(ResumeError::DeleteNotConfirmed)));
    assert!(store.contains(keys::RESUME));

    manager.delete(true).expect("confirmed delete");
    assert!(manager.current().expect("read").is_none());
}

#[test]
fn test_delete_without_resume_errors() {
    let (_store, mut manager) = setup();
    assert!(matches!(manager.delete(true), Err(ResumeError::NotFound)));
}
