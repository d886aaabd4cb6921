use crate::base::error::{TransferError, TransferResult};
use crate::cookies::record::CookieRecord;
use serde::{Deserialize, Serialize};
use url::Url;

/// The wire document exchanged between export and import.
///
/// `url` is both the address the cookies apply to and the address the tab is
/// navigated to after import. `cookies` keeps the host store's insertion
/// order at export time; order carries no weight on import since each record
/// is set independently and the host dedups by name+domain+path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferDocument {
    pub url: String,
    pub cookies: Vec<CookieRecord>,
}

impl TransferDocument {
    pub fn new(url: impl Into<String>, cookies: Vec<CookieRecord>) -> Self {
        Self {
            url: url.into(),
            cookies,
        }
    }

    /// Parse a document from the user's literal edit-field text.
    ///
    /// Parses fully before anything else runs: a malformed document must
    /// fail here, before any destructive host operation is issued. Missing
    /// `url` or `cookies` is malformed, not defaulted.
    pub fn from_json(text: &str) -> TransferResult<Self> {
        let doc: TransferDocument = serde_json::from_str(text)?;
        Ok(doc)
    }

    /// Serialize for display in the edit field (pretty JSON, 2-space indent).
    pub fn to_json_pretty(&self) -> String {
        // Vec and String serialization cannot fail
        serde_json::to_string_pretty(self).expect("document serialization")
    }

    /// The parsed navigation/clear target.
    pub fn target_url(&self) -> TransferResult<Url> {
        Url::parse(&self.url).map_err(|_| TransferError::invalid_target_url(&self.url))
    }

    /// Export cookies to Netscape cookie format.
    ///
    /// The Netscape format is widely used by curl, wget, and other tools.
    /// Each line has the format:
    /// `domain\tinclude_subdomains\tpath\tsecure\texpiry\tname\tvalue`
    pub fn to_netscape(&self) -> String {
        let mut lines = vec![
            "# Netscape HTTP Cookie File".to_string(),
            "# https://curl.se/docs/http-cookies.html".to_string(),
            format!("# Exported from {}", self.url),
            String::new(),
        ];

        for cookie in &self.cookies {
            let include_subdomains = if cookie.host_only() { "FALSE" } else { "TRUE" };
            let secure = if cookie.secure { "TRUE" } else { "FALSE" };
            let expiry = cookie.expiration_date.map(|t| t as i64).unwrap_or(0);

            // Domain should start with . for non-host-only cookies
            let domain = if !cookie.host_only() && !cookie.domain.starts_with('.') {
                format!(".{}", cookie.domain)
            } else {
                cookie.domain.clone()
            };

            lines.push(format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                domain, include_subdomains, cookie.path, secure, expiry, cookie.name, cookie.value
            ));
        }

        lines.join("\n")
    }

    /// Import cookies from Netscape format file content.
    ///
    /// `url` becomes the document's navigation target; the format itself
    /// carries no URL. Comment and short lines are skipped.
    pub fn from_netscape(url: impl Into<String>, content: &str) -> Self {
        let mut cookies = Vec::new();

        for line in content.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() < 7 {
                continue;
            }

            let include_subdomains = parts[1].eq_ignore_ascii_case("TRUE");
            let raw_domain = parts[0];
            let domain = if include_subdomains && !raw_domain.starts_with('.') {
                format!(".{}", raw_domain)
            } else if !include_subdomains {
                raw_domain.trim_start_matches('.').to_string()
            } else {
                raw_domain.to_string()
            };
            let expiry: i64 = parts[4].parse().unwrap_or(0);

            cookies.push(CookieRecord {
                name: parts[5].to_string(),
                value: parts[6].to_string(),
                domain,
                path: parts[2].to_string(),
                secure: parts[3].eq_ignore_ascii_case("TRUE"),
                http_only: false, // Netscape format doesn't include httpOnly
                expiration_date: if expiry > 0 { Some(expiry as f64) } else { None },
                store_id: None,
            });
        }

        Self {
            url: url.into(),
            cookies,
        }
    }
}
