//! Core host capability trait and supporting types.
//!
//! This module defines the `HostBridge` trait that forms the boundary to the
//! host browser: tab query, cookie enumeration and mutation, navigation, and
//! window lifecycle.

use crate::base::error::TransferResult;
use crate::cookies::record::{CookieRecord, HostCookie};
use std::{fmt, future::Future, pin::Pin, sync::Arc};
use url::Url;

/// Identifier of a cookie store/partition within the host browser.
///
/// This is a lightweight wrapper around the host's store id string that
/// provides a type-safe way to keep source and destination stores apart.
#[derive(Clone, Hash, Eq, PartialEq)]
pub struct StoreId {
    id: Box<str>,
}

impl StoreId {
    /// Creates a new [`StoreId`] from any string-like type.
    #[inline]
    pub fn new(id: impl Into<Box<str>>) -> Self {
        Self { id: id.into() }
    }

    /// View the store id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl From<&str> for StoreId {
    fn from(value: &str) -> Self {
        StoreId::new(value)
    }
}

impl From<String> for StoreId {
    fn from(value: String) -> Self {
        StoreId::new(value)
    }
}

impl fmt::Debug for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.id, f)
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.id, f)
    }
}

/// Host tab identifier.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct TabId(pub u32);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The focused tab of the focused window, as the host reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTab {
    pub id: TabId,
    /// Current address of the tab. Kept as the host's raw string; tabs can
    /// sit on non-http schemes (`about:blank`).
    pub url: String,
    pub cookie_store_id: StoreId,
}

/// Filter for host-side cookie enumeration.
#[derive(Debug, Clone)]
pub struct CookieFilter {
    /// Only cookies visible to this URL are returned.
    pub url: Url,
    /// Restrict to one cookie store; `None` means the host's default store.
    pub store_id: Option<StoreId>,
}

/// One cookie removal request.
#[derive(Debug, Clone)]
pub struct RemoveTarget {
    pub url: Url,
    pub name: String,
    pub store_id: StoreId,
}

/// One cookie write request.
///
/// `url` scopes the write the way the host API expects; `store_id` is always
/// the destination tab's store, never the record's own provenance id.
#[derive(Debug, Clone)]
pub struct SetRequest {
    pub url: Url,
    pub store_id: StoreId,
    pub record: CookieRecord,
}

/// Alias for the `Future` type returned by a tab query.
pub type TabQuery = Pin<Box<dyn Future<Output = TransferResult<ActiveTab>> + Send>>;

/// Alias for the `Future` type returned by cookie enumeration.
pub type CookieListing = Pin<Box<dyn Future<Output = TransferResult<Vec<HostCookie>>> + Send>>;

/// Alias for the `Future` type returned by fire-and-join host operations.
pub type HostOp = Pin<Box<dyn Future<Output = TransferResult<()>> + Send>>;

/// Trait for the host browser capability boundary.
///
/// One implementation is selected at startup and used for the whole session;
/// call sites never branch on host identity. Implementations must be
/// thread-safe.
///
/// # Design Notes
///
/// - Every call is asynchronous host I/O and must be awaited before the next
///   logically-dependent step runs.
/// - Uses `&self` so sibling operations within a phase can be issued
///   concurrently and joined as a batch.
/// - Returns boxed futures for trait object compatibility.
pub trait HostBridge: Send + Sync {
    /// Returns the single focused tab of the focused window.
    fn query_active_tab(&self) -> TabQuery;

    /// Enumerates cookies visible to the filter URL in the filter store.
    fn list_cookies(&self, filter: CookieFilter) -> CookieListing;

    /// Removes one cookie by name + URL + store.
    fn remove_cookie(&self, target: RemoveTarget) -> HostOp;

    /// Writes one cookie into the request's store.
    fn set_cookie(&self, request: SetRequest) -> HostOp;

    /// Navigates the tab to the URL.
    fn update_tab_url(&self, tab: TabId, url: Url) -> HostOp;

    /// Closes the host window driving the transfer (the popup).
    fn close_window(&self) -> HostOp;
}

/// Blanket implementation for Arc-wrapped bridges.
impl<B: HostBridge + ?Sized> HostBridge for Arc<B> {
    fn query_active_tab(&self) -> TabQuery {
        (**self).query_active_tab()
    }

    fn list_cookies(&self, filter: CookieFilter) -> CookieListing {
        (**self).list_cookies(filter)
    }

    fn remove_cookie(&self, target: RemoveTarget) -> HostOp {
        (**self).remove_cookie(target)
    }

    fn set_cookie(&self, request: SetRequest) -> HostOp {
        (**self).set_cookie(request)
    }

    fn update_tab_url(&self, tab: TabId, url: Url) -> HostOp {
        (**self).update_tab_url(tab, url)
    }

    fn close_window(&self) -> HostOp {
        (**self).close_window()
    }
}
