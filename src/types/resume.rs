use serde::{Deserialize, Serialize};

/// Stored resume document. At most one per profile, overwritten on re-upload.
///
/// `content` is a `data:application/pdf;base64,…` URL so the UI can link it
/// directly for preview/download.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeFile {
    pub file_name: String,
    pub content: String,
}
