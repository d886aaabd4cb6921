use crate::cookies::record::HostCookie;
use std::sync::RwLock;
use time::OffsetDateTime;
use url::Url;

/// In-memory cookie jar for a single cookie store.
///
/// Holds cookies in insertion order and answers URL-visibility queries with
/// RFC 6265 domain and path matching. Backing store for
/// [`MemoryHost`](crate::host::memory::MemoryHost); one jar per store id.
pub struct CookieJar {
    cookies: RwLock<Vec<HostCookie>>,
}

impl Default for CookieJar {
    fn default() -> Self {
        Self::new()
    }
}

impl CookieJar {
    pub fn new() -> Self {
        Self {
            cookies: RwLock::new(Vec::new()),
        }
    }

    /// Insert a cookie, replacing any existing cookie with the same
    /// name+domain+path.
    pub fn set(&self, cookie: HostCookie) {
        let mut cookies = self.cookies.write().expect("jar lock");
        cookies.retain(|c| {
            c.name != cookie.name || c.domain != cookie.domain || c.path != cookie.path
        });
        cookies.push(cookie);
    }

    /// Get cookies visible to the URL, in insertion order.
    ///
    /// Applies domain matching (host-only exact vs dotted suffix), path
    /// matching, the secure/https restriction, and drops expired cookies.
    pub fn cookies_for_url(&self, url: &Url) -> Vec<HostCookie> {
        let now = OffsetDateTime::now_utc();
        self.cookies
            .read()
            .expect("jar lock")
            .iter()
            .filter(|c| Self::visible(c, url, now))
            .cloned()
            .collect()
    }

    /// Remove every cookie with the given name visible to the URL.
    /// Returns the number removed.
    pub fn remove_named(&self, url: &Url, name: &str) -> usize {
        let now = OffsetDateTime::now_utc();
        let mut cookies = self.cookies.write().expect("jar lock");
        let before = cookies.len();
        cookies.retain(|c| c.name != name || !Self::visible(c, url, now));
        before - cookies.len()
    }

    /// Snapshot of every cookie in the jar, expired ones included.
    pub fn all(&self) -> Vec<HostCookie> {
        self.cookies.read().expect("jar lock").clone()
    }

    pub fn len(&self) -> usize {
        self.cookies.read().expect("jar lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cookies.write().expect("jar lock").clear();
    }

    fn visible(cookie: &HostCookie, url: &Url, now: OffsetDateTime) -> bool {
        let host = url.host_str().unwrap_or("");

        if !Self::domain_matches(&cookie.domain, host, cookie.host_only) {
            return false;
        }
        if !Self::path_matches(&cookie.path, url.path()) {
            return false;
        }
        if cookie.secure && url.scheme() != "https" {
            return false;
        }
        if cookie.is_expired(now) {
            return false;
        }
        true
    }

    /// Check if cookie domain matches request host.
    /// Implements RFC 6265 domain matching.
    fn domain_matches(cookie_domain: &str, request_host: &str, host_only: bool) -> bool {
        let cookie_domain = cookie_domain.trim_start_matches('.');

        if host_only {
            // Host-only cookie: exact match required
            return cookie_domain.eq_ignore_ascii_case(request_host);
        }

        if request_host.eq_ignore_ascii_case(cookie_domain) {
            return true;
        }

        // Check if request_host ends with .cookie_domain
        if request_host.len() > cookie_domain.len() {
            let suffix = &request_host[request_host.len() - cookie_domain.len()..];
            if suffix.eq_ignore_ascii_case(cookie_domain) {
                // Check that the character before is a dot
                let char_before = request_host
                    .chars()
                    .nth(request_host.len() - cookie_domain.len() - 1);
                return char_before == Some('.');
            }
        }

        false
    }

    /// Check if request path matches cookie path.
    /// Implements RFC 6265 path matching.
    fn path_matches(cookie_path: &str, request_path: &str) -> bool {
        if request_path == cookie_path {
            return true;
        }

        if request_path.starts_with(cookie_path) {
            // Cookie path is a prefix
            if cookie_path.ends_with('/') {
                return true;
            }
            // Check that the next character in request_path is '/'
            let next_char = request_path.chars().nth(cookie_path.len());
            return next_char == Some('/');
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookies::record::SameSite;

    fn cookie(name: &str, domain: &str) -> HostCookie {
        HostCookie {
            name: name.to_string(),
            value: "test_value".to_string(),
            domain: domain.to_string(),
            path: "/".to_string(),
            secure: false,
            http_only: false,
            host_only: !domain.starts_with('.'),
            session: true,
            same_site: SameSite::Unspecified,
            expiration_date: None,
            store_id: "0".to_string(),
        }
    }

    #[test]
    fn test_set_replaces_same_name_domain_path() {
        let jar = CookieJar::new();
        jar.set(cookie("sid", "example.com"));
        let mut updated = cookie("sid", "example.com");
        updated.value = "new".to_string();
        jar.set(updated);

        assert_eq!(jar.len(), 1);
        assert_eq!(jar.all()[0].value, "new");
    }

    #[test]
    fn test_dotted_and_plain_domain_are_distinct_slots() {
        let jar = CookieJar::new();
        jar.set(cookie("sid", "example.com"));
        jar.set(cookie("sid", ".example.com"));
        assert_eq!(jar.len(), 2);
    }

    #[test]
    fn test_domain_cookie_visible_on_subdomain() {
        let jar = CookieJar::new();
        jar.set(cookie("host", "a.example.com"));
        jar.set(cookie("wide", ".example.com"));

        let sub = Url::parse("https://a.example.com/").unwrap();
        let names: Vec<String> = jar
            .cookies_for_url(&sub)
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["host", "wide"]);

        // Host-only cookie must not leak to a sibling subdomain
        let sibling = Url::parse("https://b.example.com/").unwrap();
        let names: Vec<String> = jar
            .cookies_for_url(&sibling)
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["wide"]);
    }

    #[test]
    fn test_suffix_match_requires_dot_boundary() {
        let jar = CookieJar::new();
        jar.set(cookie("wide", ".example.com"));
        let lookalike = Url::parse("https://notexample.com/").unwrap();
        assert!(jar.cookies_for_url(&lookalike).is_empty());
    }

    #[test]
    fn test_path_matching() {
        let jar = CookieJar::new();
        let mut root = cookie("root", "example.com");
        root.path = "/".to_string();
        let mut foo = cookie("foo", "example.com");
        foo.path = "/foo".to_string();
        let mut baz = cookie("baz", "example.com");
        baz.path = "/baz".to_string();
        jar.set(root);
        jar.set(foo);
        jar.set(baz);

        let url = Url::parse("https://example.com/foo/bar").unwrap();
        let cookies = jar.cookies_for_url(&url);
        assert_eq!(cookies.len(), 2);
        assert!(cookies.iter().any(|c| c.name == "root"));
        assert!(cookies.iter().any(|c| c.name == "foo"));
        assert!(!cookies.iter().any(|c| c.name == "baz"));
    }

    #[test]
    fn test_secure_flag() {
        let jar = CookieJar::new();
        let mut sec = cookie("sec", "example.com");
        sec.secure = true;
        jar.set(sec);

        let https = Url::parse("https://example.com/").unwrap();
        let http = Url::parse("http://example.com/").unwrap();
        assert_eq!(jar.cookies_for_url(&https).len(), 1);
        assert_eq!(jar.cookies_for_url(&http).len(), 0);
    }

    #[test]
    fn test_expired_cookie_not_listed() {
        let jar = CookieJar::new();
        let mut stale = cookie("stale", "example.com");
        stale.session = false;
        stale.expiration_date =
            Some((OffsetDateTime::now_utc() - time::Duration::hours(1)).unix_timestamp() as f64);
        jar.set(stale);

        let url = Url::parse("https://example.com/").unwrap();
        assert!(jar.cookies_for_url(&url).is_empty());
        // Still present in the raw snapshot
        assert_eq!(jar.len(), 1);
    }

    #[test]
    fn test_remove_named() {
        let jar = CookieJar::new();
        jar.set(cookie("sid", "example.com"));
        jar.set(cookie("theme", "example.com"));

        let url = Url::parse("https://example.com/").unwrap();
        assert_eq!(jar.remove_named(&url, "sid"), 1);
        assert_eq!(jar.remove_named(&url, "sid"), 0);
        assert_eq!(jar.len(), 1);
        assert_eq!(jar.all()[0].name, "theme");
    }
}
