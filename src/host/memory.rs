use crate::base::error::TransferError;
use crate::cookies::jar::CookieJar;
use crate::cookies::record::{HostCookie, SameSite};
use crate::host::bridge::{
    ActiveTab, CookieFilter, CookieListing, HostBridge, HostOp, RemoveTarget, SetRequest, StoreId,
    TabId, TabQuery,
};
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::RwLock;
use url::Url;

/// Id of the store a host starts with, matching the default partition of a
/// fresh browser profile.
pub const DEFAULT_STORE: &str = "0";

/// Complete in-process host: cookie stores keyed by [`StoreId`], one active
/// tab, one window.
///
/// Backs embedding scenarios that do not talk to a live browser, and serves
/// as the test double for every transfer property. All operations resolve
/// immediately; the boxed-future interface is kept so callers cannot tell it
/// apart from a real platform bridge.
pub struct MemoryHost {
    stores: DashMap<StoreId, CookieJar>,
    active_tab: RwLock<Option<ActiveTab>>,
    window_open: AtomicBool,
    next_tab_id: AtomicU32,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHost {
    pub fn new() -> Self {
        let stores = DashMap::new();
        stores.insert(StoreId::new(DEFAULT_STORE), CookieJar::new());
        Self {
            stores,
            active_tab: RwLock::new(None),
            window_open: AtomicBool::new(true),
            next_tab_id: AtomicU32::new(1),
        }
    }

    /// Add an empty cookie store (e.g. a private-browsing partition).
    pub fn add_store(&self, store_id: impl Into<StoreId>) {
        self.stores.entry(store_id.into()).or_default();
    }

    /// Open a tab on `url` backed by `store_id` and make it the active tab.
    /// The store is created if it does not exist yet.
    pub fn open_tab(&self, url: impl Into<String>, store_id: impl Into<StoreId>) -> TabId {
        let store_id = store_id.into();
        self.stores.entry(store_id.clone()).or_default();

        let id = TabId(self.next_tab_id.fetch_add(1, Ordering::Relaxed));
        let tab = ActiveTab {
            id,
            url: url.into(),
            cookie_store_id: store_id,
        };
        *self.active_tab.write().expect("tab lock") = Some(tab);
        id
    }

    /// Insert a cookie directly into a store, bypassing the capability
    /// surface. Test setup and embedding seed data.
    pub fn insert_cookie(&self, store_id: impl Into<StoreId>, cookie: HostCookie) {
        self.stores
            .entry(store_id.into())
            .or_default()
            .set(cookie);
    }

    /// Snapshot of every cookie in a store, expired ones included.
    pub fn cookies_in_store(&self, store_id: &StoreId) -> Vec<HostCookie> {
        self.stores
            .get(store_id)
            .map(|jar| jar.all())
            .unwrap_or_default()
    }

    /// Current URL of the active tab, if any.
    pub fn active_tab_url(&self) -> Option<String> {
        self.active_tab
            .read()
            .expect("tab lock")
            .as_ref()
            .map(|tab| tab.url.clone())
    }

    /// True once `close_window` has run.
    pub fn window_closed(&self) -> bool {
        !self.window_open.load(Ordering::Relaxed)
    }
}

impl HostBridge for MemoryHost {
    fn query_active_tab(&self) -> TabQuery {
        let tab = self.active_tab.read().expect("tab lock").clone();
        Box::pin(std::future::ready(tab.ok_or(TransferError::NoActiveTab)))
    }

    fn list_cookies(&self, filter: CookieFilter) -> CookieListing {
        let store_id = filter
            .store_id
            .unwrap_or_else(|| StoreId::new(DEFAULT_STORE));
        let result = match self.stores.get(&store_id) {
            Some(jar) => {
                let cookies = jar.cookies_for_url(&filter.url);
                tracing::debug!(
                    url = %filter.url,
                    store = %store_id,
                    count = cookies.len(),
                    "listed cookies"
                );
                Ok(cookies)
            }
            None => Err(TransferError::unknown_store(store_id.as_str())),
        };
        Box::pin(std::future::ready(result))
    }

    fn remove_cookie(&self, target: RemoveTarget) -> HostOp {
        let result = match self.stores.get(&target.store_id) {
            Some(jar) => {
                let removed = jar.remove_named(&target.url, &target.name);
                tracing::debug!(
                    name = %target.name,
                    url = %target.url,
                    removed,
                    "removed cookie"
                );
                Ok(())
            }
            None => Err(TransferError::unknown_store(target.store_id.as_str())),
        };
        Box::pin(std::future::ready(result))
    }

    fn set_cookie(&self, request: SetRequest) -> HostOp {
        let result = match self.stores.get(&request.store_id) {
            Some(jar) => {
                let record = &request.record;
                // An empty domain means host-only on the request URL
                let domain = if record.domain.is_empty() {
                    request.url.host_str().unwrap_or("").to_string()
                } else {
                    record.domain.clone()
                };
                jar.set(HostCookie {
                    name: record.name.clone(),
                    value: record.value.clone(),
                    host_only: !domain.starts_with('.'),
                    session: record.expiration_date.is_none(),
                    same_site: SameSite::Unspecified,
                    domain,
                    path: record.path.clone(),
                    secure: record.secure,
                    http_only: record.http_only,
                    expiration_date: record.expiration_date,
                    store_id: request.store_id.as_str().to_string(),
                });
                tracing::debug!(name = %request.record.name, store = %request.store_id, "set cookie");
                Ok(())
            }
            None => Err(TransferError::unknown_store(request.store_id.as_str())),
        };
        Box::pin(std::future::ready(result))
    }

    fn update_tab_url(&self, tab: TabId, url: Url) -> HostOp {
        let mut active = self.active_tab.write().expect("tab lock");
        let result = match active.as_mut() {
            Some(current) if current.id == tab => {
                current.url = url.to_string();
                tracing::debug!(tab = %tab, url = %url, "navigated tab");
                Ok(())
            }
            _ => Err(TransferError::UnknownTab { tab_id: tab.0 }),
        };
        Box::pin(std::future::ready(result))
    }

    fn close_window(&self) -> HostOp {
        self.window_open.store(false, Ordering::Relaxed);
        Box::pin(std::future::ready(Ok(())))
    }
}
