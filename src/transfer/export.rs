use crate::base::error::{TransferError, TransferResult};
use crate::cookies::document::TransferDocument;
use crate::cookies::record::CookieRecord;
use crate::host::bridge::{CookieFilter, HostBridge};
use url::Url;

/// Export the active tab's cookie state as a transfer document.
///
/// Queries the focused tab, enumerates every cookie visible to its URL in
/// its cookie store, and normalizes each host cookie to a wire record. An
/// empty cookie list is a valid result (a logged-out tab exports cleanly).
///
/// Failures surface as `Err`; the caller decides how to present them.
pub async fn export_active_tab<H>(host: &H) -> TransferResult<TransferDocument>
where
    H: HostBridge + ?Sized,
{
    let tab = host.query_active_tab().await?;
    let url =
        Url::parse(&tab.url).map_err(|_| TransferError::invalid_target_url(&tab.url))?;

    let cookies = host
        .list_cookies(CookieFilter {
            url,
            store_id: Some(tab.cookie_store_id.clone()),
        })
        .await?;

    let records: Vec<CookieRecord> = cookies.iter().map(CookieRecord::from_host).collect();

    tracing::debug!(
        url = %tab.url,
        store = %tab.cookie_store_id,
        count = records.len(),
        "exported active tab"
    );

    Ok(TransferDocument::new(tab.url, records))
}
