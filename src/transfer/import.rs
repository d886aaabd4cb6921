use crate::base::error::TransferResult;
use crate::cookies::document::TransferDocument;
use crate::host::bridge::{CookieFilter, HostBridge, RemoveTarget, SetRequest};
use futures::future::try_join_all;
use url::Url;

/// What an import transaction did, for the embedding UI to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOutcome {
    /// Cookies removed from the target URL/store in the clear phase.
    pub cleared: usize,
    /// Cookies written in the set phase.
    pub set: usize,
}

/// Parse the user's literal edit-field text and import it.
///
/// The text is parsed fully before anything touches the host: malformed JSON
/// or a document missing `url`/`cookies` fails here, with zero remove or set
/// calls issued.
pub async fn import_json<H>(host: &H, text: &str) -> TransferResult<ImportOutcome>
where
    H: HostBridge + ?Sized,
{
    let doc = TransferDocument::from_json(text)?;
    import_to_active_tab(host, &doc).await
}

/// Replace the active tab's cookie state with the document's, then navigate.
///
/// One logical transaction in four strictly ordered phases:
///
/// 1. **Resolve** — active tab supplies the destination store id; `doc.url`
///    supplies the target URL. All per-record set URLs are derived up front
///    so an invalid record fails before any destructive action.
/// 2. **Clear** — every cookie visible to the target URL in the target store
///    is removed. The whole batch joins before phase 3.
/// 3. **Set** — every record is written, targeting the URL derived from its
///    own domain and the *destination* store id (never the record's
///    provenance `storeId`). The whole batch joins before phase 4.
/// 4. **Navigate** — the tab moves to `doc.url` and the host window closes.
///
/// Sibling operations within the clear and set phases run concurrently;
/// their relative order is not guaranteed. A removal must never overlap a
/// write of a cookie sharing the same name, or the host store's
/// last-write-wins semantics could let a stale removal clobber a just-written
/// cookie; the phase barrier is what prevents that.
///
/// Any capability failure aborts the transaction at that point. Completed
/// phases are not rolled back: a failed set phase after a successful clear
/// leaves the target URL with no cookies.
pub async fn import_to_active_tab<H>(
    host: &H,
    doc: &TransferDocument,
) -> TransferResult<ImportOutcome>
where
    H: HostBridge + ?Sized,
{
    // Phase 1: resolve target
    let target_url = doc.target_url()?;
    let set_urls: Vec<Url> = doc
        .cookies
        .iter()
        .map(|record| record.origin_url())
        .collect::<TransferResult<_>>()?;
    let tab = host.query_active_tab().await?;
    let store_id = tab.cookie_store_id;

    // Phase 2: clear
    let existing = host
        .list_cookies(CookieFilter {
            url: target_url.clone(),
            store_id: Some(store_id.clone()),
        })
        .await?;
    let cleared = existing.len();
    try_join_all(existing.into_iter().map(|cookie| {
        host.remove_cookie(RemoveTarget {
            url: target_url.clone(),
            name: cookie.name,
            store_id: store_id.clone(),
        })
    }))
    .await?;
    tracing::debug!(cleared, url = %target_url, store = %store_id, "cleared target cookies");

    // Phase 3: set
    let set = doc.cookies.len();
    try_join_all(doc.cookies.iter().zip(set_urls).map(|(record, url)| {
        host.set_cookie(SetRequest {
            url,
            store_id: store_id.clone(),
            record: record.clone(),
        })
    }))
    .await?;
    tracing::debug!(set, store = %store_id, "wrote document cookies");

    // Phase 4: navigate, then signal success by closing the window
    host.update_tab_url(tab.id, target_url).await?;
    host.close_window().await?;

    Ok(ImportOutcome { cleared, set })
}
