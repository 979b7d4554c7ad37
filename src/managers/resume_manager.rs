//! Resume Manager for SkillSwap.
//!
//! One resume per profile: PDF only, under the size ceiling, stored as a
//! base64 data URL so the UI can preview/download it directly. Re-upload
//! overwrites; deletion requires explicit confirmation.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::services::local_store::{keys, LocalStore};
use crate::types::errors::ResumeError;
use crate::types::resume::ResumeFile;

/// Upload size ceiling: 5 MB.
pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;

/// The accepted MIME type.
pub const PDF_MIME: &str = "application/pdf";

/// Trait defining resume management operations.
pub trait ResumeManagerTrait {
    fn upload(&mut self, file_name: &str, mime_type: &str, bytes: &[u8]) -> Result<ResumeFile, ResumeError>;
    fn current(&self) -> Result<Option<ResumeFile>, ResumeError>;
    fn delete(&mut self, confirmed: bool) -> Result<(), ResumeError>;
}

/// Resume manager backed by the local store.
pub struct ResumeManager {
    store: LocalStore,
}

impl ResumeManager {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }
}

impl ResumeManagerTrait for ResumeManager {
    /// Validates and stores an uploaded file, overwriting any existing resume.
    ///
    /// Rejects non-PDF MIME types and files over [`MAX_RESUME_BYTES`]
    /// without touching the stored record.
    fn upload(&mut self, file_name: &str, mime_type: &str, bytes: &[u8]) -> Result<ResumeFile, ResumeError> {
        if mime_type != PDF_MIME {
            return Err(ResumeError::NotPdf(mime_type.to_string()));
        }
        if bytes.len() > MAX_RESUME_BYTES {
            return Err(ResumeError::TooLarge(bytes.len()));
        }

        let resume = ResumeFile {
            file_name: file_name.to_string(),
            content: format!("data:{};base64,{}", PDF_MIME, BASE64.encode(bytes)),
        };
        self.store
            .set(keys::RESUME, &resume)
            .map_err(|e| ResumeError::StoreError(e.to_string()))?;
        Ok(resume)
    }

    /// The stored resume, if any.
    fn current(&self) -> Result<Option<ResumeFile>, ResumeError> {
        self.store
            .get(keys::RESUME)
            .map_err(|e| ResumeError::StoreError(e.to_string()))
    }

    /// Deletes the stored resume. Requires the user to have confirmed.
    fn delete(&mut self, confirmed: bool) -> Result<(), ResumeError> {
        if !confirmed {
            return Err(ResumeError::DeleteNotConfirmed);
        }
        if self.current()?.is_none() {
            return Err(ResumeError::NotFound);
        }
        self.store
            .remove(keys::RESUME)
            .map_err(|e| ResumeError::StoreError(e.to_string()))
    }
}
