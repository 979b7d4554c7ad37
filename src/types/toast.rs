/// Severity levels for transient toast notifications, matching the UI's
/// contextual styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
    Danger,
}

impl ToastLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastLevel::Success => "success",
            ToastLevel::Info => "info",
            ToastLevel::Warning => "warning",
            ToastLevel::Danger => "danger",
        }
    }
}

/// A transient, non-blocking user-facing notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Toast { level: ToastLevel::Success, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Toast { level: ToastLevel::Info, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Toast { level: ToastLevel::Warning, message: message.into() }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Toast { level: ToastLevel::Danger, message: message.into() }
    }
}
