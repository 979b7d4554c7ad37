use std::fmt;

// === StoreError ===

/// Errors related to the local key/value store.
#[derive(Debug)]
pub enum StoreError {
    /// Database operation failed.
    DatabaseError(String),
    /// Failed to serialize or deserialize a stored value.
    SerializationError(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DatabaseError(msg) => write!(f, "Store database error: {}", msg),
            StoreError::SerializationError(msg) => {
                write!(f, "Store serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StoreError {}

// === CryptoError ===

/// Errors related to password hashing operations.
#[derive(Debug)]
pub enum CryptoError {
    /// Failed to derive a password hash.
    KeyDerivation(String),
    /// Failed to generate random bytes.
    RandomGeneration(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::KeyDerivation(msg) => write!(f, "Key derivation failed: {}", msg),
            CryptoError::RandomGeneration(msg) => {
                write!(f, "Random generation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for CryptoError {}

// === AuthError ===

/// Errors related to sign-up, sign-in, and session handling.
#[derive(Debug)]
pub enum AuthError {
    /// One or more required form fields are empty.
    MissingFields,
    /// The email address is not a valid format.
    InvalidEmail(String),
    /// The password does not meet the strength requirements.
    WeakPassword,
    /// Password and confirmation do not match.
    PasswordMismatch,
    /// An account with this email already exists.
    EmailTaken(String),
    /// No account matches the given credentials.
    ///
    /// Deliberately carries no detail: the caller must not learn whether
    /// the email or the password was wrong.
    InvalidCredentials,
    /// Password hashing failed.
    CryptoError(String),
    /// The underlying store failed.
    StoreError(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingFields => write!(f, "Please fill in all fields"),
            AuthError::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            AuthError::WeakPassword => write!(
                f,
                "Password must be at least 8 characters with uppercase, lowercase, and a digit"
            ),
            AuthError::PasswordMismatch => write!(f, "Passwords do not match"),
            AuthError::EmailTaken(email) => {
                write!(f, "An account already exists for {}", email)
            }
            AuthError::InvalidCredentials => write!(f, "Invalid email or password"),
            AuthError::CryptoError(msg) => write!(f, "Auth crypto error: {}", msg),
            AuthError::StoreError(msg) => write!(f, "Auth store error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

// === JobApiError ===

/// Errors related to the job-search API.
#[derive(Debug)]
pub enum JobApiError {
    /// Failed to construct the HTTP client.
    ClientError(String),
    /// A network error occurred while calling the job-search API.
    NetworkError(String),
    /// The request timed out.
    Timeout,
    /// The response body could not be parsed.
    InvalidResponse(String),
}

impl fmt::Display for JobApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobApiError::ClientError(msg) => write!(f, "Job API client error: {}", msg),
            JobApiError::NetworkError(msg) => write!(f, "Job API network error: {}", msg),
            JobApiError::Timeout => write!(f, "Job API request timed out"),
            JobApiError::InvalidResponse(msg) => {
                write!(f, "Job API invalid response: {}", msg)
            }
        }
    }
}

impl std::error::Error for JobApiError {}

// === PlatformError ===

/// Errors related to coding-platform statistics fetches.
#[derive(Debug)]
pub enum PlatformError {
    /// No profile exists for the given username.
    UserNotFound(String),
    /// The request timed out.
    Timeout,
    /// The platform rate-limited the request.
    RateLimited,
    /// A network error occurred.
    NetworkError(String),
    /// The response could not be parsed into the platform's stat fields.
    InvalidResponse(String),
    /// No profile is connected for this platform yet.
    NotConnected,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::UserNotFound(username) => {
                write!(f, "User not found: {}. Please check the username", username)
            }
            PlatformError::Timeout => write!(f, "Request timed out. Please try again"),
            PlatformError::RateLimited => {
                write!(f, "Too many requests. Please wait and try again")
            }
            PlatformError::NetworkError(msg) => write!(f, "Platform network error: {}", msg),
            PlatformError::InvalidResponse(msg) => {
                write!(f, "Platform invalid response: {}", msg)
            }
            PlatformError::NotConnected => {
                write!(f, "No profile connected. Please connect first")
            }
        }
    }
}

impl std::error::Error for PlatformError {}

// === PortfolioError ===

/// Errors related to the saved jobs/internships portfolio.
#[derive(Debug)]
pub enum PortfolioError {
    /// No saved item with the given ID exists in the target list.
    NotFound(String),
    /// The underlying store failed.
    StoreError(String),
}

impl fmt::Display for PortfolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortfolioError::NotFound(id) => write!(f, "Portfolio item not found: {}", id),
            PortfolioError::StoreError(msg) => write!(f, "Portfolio store error: {}", msg),
        }
    }
}

impl std::error::Error for PortfolioError {}

// === ResumeError ===

/// Errors related to resume upload and deletion.
#[derive(Debug)]
pub enum ResumeError {
    /// The uploaded file is not a PDF.
    NotPdf(String),
    /// The uploaded file exceeds the size ceiling. Carries the size in bytes.
    TooLarge(usize),
    /// No resume is stored.
    NotFound,
    /// Deletion was requested without user confirmation.
    DeleteNotConfirmed,
    /// The underlying store failed.
    StoreError(String),
}

impl fmt::Display for ResumeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResumeError::NotPdf(mime) => {
                write!(f, "Only PDF files are accepted, got: {}", mime)
            }
            ResumeError::TooLarge(size) => {
                write!(f, "File is too large: {} bytes (limit is 5 MB)", size)
            }
            ResumeError::NotFound => write!(f, "No resume uploaded"),
            ResumeError::DeleteNotConfirmed => {
                write!(f, "Resume deletion requires confirmation")
            }
            ResumeError::StoreError(msg) => write!(f, "Resume store error: {}", msg),
        }
    }
}

impl std::error::Error for ResumeError {}
