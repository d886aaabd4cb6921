use thiserror::Error;

/// Unified error type for every failure the crate can surface.
///
/// The first group covers fail-fast validation: these are raised before any
/// destructive host operation runs. The second group wraps host capability
/// failures; they abort the remaining transfer phases without rollback.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum TransferError {
    // Validation errors (raised before any host mutation)
    #[error("Transfer document is not valid JSON: {message}")]
    MalformedDocument { message: String },
    #[error("Invalid target URL: {url}")]
    InvalidTargetUrl { url: String },
    #[error("Invalid cookie domain: {domain:?}")]
    InvalidCookieDomain { domain: String },

    // Host resolution errors
    #[error("No active tab in the focused window")]
    NoActiveTab,
    #[error("Unknown tab: {tab_id}")]
    UnknownTab { tab_id: u32 },
    #[error("Unknown cookie store: {store_id}")]
    UnknownCookieStore { store_id: String },

    // Capability failures (propagated, no retry)
    #[error("Tab query failed: {message}")]
    TabQueryFailed { message: String },
    #[error("Cookie read failed: {message}")]
    CookieReadFailed { message: String },
    #[error("Cookie remove failed for {name:?}: {message}")]
    CookieRemoveFailed { name: String, message: String },
    #[error("Cookie set failed for {name:?}: {message}")]
    CookieSetFailed { name: String, message: String },
    #[error("Tab navigation failed: {message}")]
    NavigationFailed { message: String },
    #[error("Window close failed: {message}")]
    WindowCloseFailed { message: String },
}

impl TransferError {
    /// Create a malformed document error.
    pub fn malformed(message: impl Into<String>) -> Self {
        TransferError::MalformedDocument {
            message: message.into(),
        }
    }

    /// Create an invalid target URL error.
    pub fn invalid_target_url(url: impl Into<String>) -> Self {
        TransferError::InvalidTargetUrl { url: url.into() }
    }

    /// Create an invalid cookie domain error.
    pub fn invalid_cookie_domain(domain: impl Into<String>) -> Self {
        TransferError::InvalidCookieDomain {
            domain: domain.into(),
        }
    }

    /// Create an unknown cookie store error.
    pub fn unknown_store(store_id: impl Into<String>) -> Self {
        TransferError::UnknownCookieStore {
            store_id: store_id.into(),
        }
    }

    /// Create a cookie remove failure.
    pub fn remove_failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        TransferError::CookieRemoveFailed {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a cookie set failure.
    pub fn set_failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        TransferError::CookieSetFailed {
            name: name.into(),
            message: message.into(),
        }
    }

    /// True if the error was raised before any host mutation could run.
    pub fn is_pre_mutation(&self) -> bool {
        matches!(
            self,
            TransferError::MalformedDocument { .. }
                | TransferError::InvalidTargetUrl { .. }
                | TransferError::InvalidCookieDomain { .. }
        )
    }
}

impl From<serde_json::Error> for TransferError {
    fn from(err: serde_json::Error) -> Self {
        TransferError::MalformedDocument {
            message: err.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type TransferResult<T> = Result<T, TransferError>;
