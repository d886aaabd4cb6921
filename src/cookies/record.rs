use crate::base::error::{TransferError, TransferResult};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use url::Url;

/// One cookie as it travels inside a transfer document.
///
/// Field names serialize in camelCase because this is the JSON the user sees
/// and hand-edits in the transfer field. A leading `.` on `domain` marks a
/// domain-wide (non-host-only) cookie; a missing `expirationDate` marks a
/// session cookie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieRecord {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default = "default_path")]
    pub path: String,
    #[serde(default)]
    pub secure: bool,
    #[serde(default)]
    pub http_only: bool,
    /// Epoch seconds. Absent means session cookie.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<f64>,
    /// Cookie store the record was exported from. Provenance only: on import
    /// the destination store id always comes from the target tab.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
}

fn default_path() -> String {
    "/".to_string()
}

impl CookieRecord {
    /// True when the cookie is scoped to the exact host (no leading dot).
    pub fn host_only(&self) -> bool {
        !self.domain.starts_with('.')
    }

    /// True when the cookie lives only for the browsing session.
    pub fn is_session(&self) -> bool {
        self.expiration_date.is_none()
    }

    /// Derive the set-target URL from the record's domain.
    ///
    /// `.example.com` and `example.com` both resolve to
    /// `https://example.com/`. The leading dot only marks subdomain scope;
    /// the set request itself always targets the registrable host.
    pub fn origin_url(&self) -> TransferResult<Url> {
        let host = self.domain.trim_start_matches('.');
        if host.is_empty() {
            return Err(TransferError::invalid_cookie_domain(&self.domain));
        }
        Url::parse(&format!("https://{}/", host))
            .map_err(|_| TransferError::invalid_cookie_domain(&self.domain))
    }

    /// Normalize a host cookie into a transfer record.
    ///
    /// Host-specific fields (same-site policy, session/host-only markers) are
    /// dropped; they are not carried across transfer. The source store id is
    /// kept as provenance.
    pub fn from_host(cookie: &HostCookie) -> Self {
        Self {
            name: cookie.name.clone(),
            value: cookie.value.clone(),
            domain: cookie.domain.clone(),
            path: cookie.path.clone(),
            secure: cookie.secure,
            http_only: cookie.http_only,
            expiration_date: cookie.expiration_date,
            store_id: Some(cookie.store_id.clone()),
        }
    }
}

/// SameSite enforcement policy as reported by the host store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Unspecified,
    NoRestriction,
    Lax,
    Strict,
}

/// One cookie as the host store holds it.
///
/// Superset of [`CookieRecord`]: host bookkeeping (`host_only`, `session`,
/// `same_site`) is visible when enumerating but never serialized into a
/// transfer document.
#[derive(Debug, Clone, PartialEq)]
pub struct HostCookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    pub secure: bool,
    pub http_only: bool,
    pub host_only: bool,
    pub session: bool,
    pub same_site: SameSite,
    /// Epoch seconds; `None` for session cookies.
    pub expiration_date: Option<f64>,
    pub store_id: String,
}

impl HostCookie {
    pub fn is_expired(&self, current_time: OffsetDateTime) -> bool {
        match self.expiration_date {
            Some(secs) => {
                OffsetDateTime::from_unix_timestamp(secs as i64)
                    .map(|expiry| expiry < current_time)
                    .unwrap_or(true)
            }
            None => false,
        }
    }

    /// The domain key used for host-side dedup (leading dot ignored).
    pub fn domain_key(&self) -> &str {
        self.domain.trim_start_matches('.')
    }
}
