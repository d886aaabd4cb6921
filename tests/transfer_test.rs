use cookieport::cookies::record::{HostCookie, SameSite};
use cookieport::host::{MemoryHost, StoreId, DEFAULT_STORE};
use cookieport::transfer::{export_active_tab, import_json, import_to_active_tab};

const TAB_URL: &str = "https://app.example.com/dashboard";

fn seed_cookie(name: &str, value: &str, domain: &str, expiry: Option<f64>) -> HostCookie {
    HostCookie {
        name: name.to_string(),
        value: value.to_string(),
        domain: domain.to_string(),
        path: "/".to_string(),
        secure: true,
        http_only: name.starts_with("__"),
        host_only: !domain.starts_with('.'),
        session: expiry.is_none(),
        same_site: SameSite::Lax,
        expiration_date: expiry,
        store_id: DEFAULT_STORE.to_string(),
    }
}

fn logged_in_host() -> MemoryHost {
    let host = MemoryHost::new();
    host.insert_cookie(
        DEFAULT_STORE,
        seed_cookie("sid", "s3cret", ".example.com", Some(4102444800.0)),
    );
    host.insert_cookie(
        DEFAULT_STORE,
        seed_cookie("__csrf", "tok", "app.example.com", None),
    );
    host.insert_cookie(DEFAULT_STORE, seed_cookie("theme", "dark", ".example.com", None));
    host.open_tab(TAB_URL, DEFAULT_STORE);
    host
}

#[tokio::test]
async fn test_export_reads_active_tab() {
    let host = logged_in_host();
    let doc = export_active_tab(&host).await.unwrap();

    assert_eq!(doc.url, TAB_URL);
    assert_eq!(doc.cookies.len(), 3);
    // Insertion order from the store
    assert_eq!(doc.cookies[0].name, "sid");
    assert_eq!(doc.cookies[1].name, "__csrf");
    assert_eq!(doc.cookies[2].name, "theme");
    // Provenance store id travels on export
    assert!(doc.cookies.iter().all(|c| c.store_id.as_deref() == Some(DEFAULT_STORE)));
}

#[tokio::test]
async fn test_export_of_logged_out_tab_is_empty() {
    let host = MemoryHost::new();
    host.open_tab(TAB_URL, DEFAULT_STORE);

    let doc = export_active_tab(&host).await.unwrap();
    assert!(doc.cookies.is_empty());
    assert_eq!(doc.url, TAB_URL);
}

#[tokio::test]
async fn test_roundtrip_preserves_observable_fields() {
    let host = logged_in_host();

    let before = export_active_tab(&host).await.unwrap();
    let outcome = import_json(&host, &before.to_json_pretty()).await.unwrap();
    assert_eq!(outcome.cleared, 3);
    assert_eq!(outcome.set, 3);

    // Re-open the popup flow: the window closed, the tab is where it was
    assert!(host.window_closed());
    assert_eq!(host.active_tab_url().as_deref(), Some(TAB_URL));

    let after = export_active_tab(&host).await.unwrap();
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_import_twice_is_idempotent() {
    let host = logged_in_host();
    let doc = export_active_tab(&host).await.unwrap();

    import_to_active_tab(&host, &doc).await.unwrap();
    let once = host.cookies_in_store(&StoreId::new(DEFAULT_STORE));

    let second = import_to_active_tab(&host, &doc).await.unwrap();
    let twice = host.cookies_in_store(&StoreId::new(DEFAULT_STORE));

    assert_eq!(second.cleared, doc.cookies.len());
    assert_eq!(once, twice);
}

#[tokio::test]
async fn test_empty_document_clears_and_still_navigates() {
    let host = logged_in_host();

    let outcome = import_json(
        &host,
        "{\"url\": \"https://app.example.com/dashboard\", \"cookies\": []}",
    )
    .await
    .unwrap();

    assert_eq!(outcome.cleared, 3);
    assert_eq!(outcome.set, 0);
    let remaining = host.cookies_in_store(&StoreId::new(DEFAULT_STORE));
    assert!(remaining.is_empty(), "clear phase left cookies: {:?}", remaining);
    assert_eq!(host.active_tab_url().as_deref(), Some(TAB_URL));
    assert!(host.window_closed());
}

#[tokio::test]
async fn test_import_into_other_store_rewrites_store_id() {
    let source = logged_in_host();
    let doc = export_active_tab(&source).await.unwrap();
    let text = doc.to_json_pretty();

    // Second profile: same host type, different cookie store, empty
    let destination = MemoryHost::new();
    destination.open_tab("https://app.example.com/login", "private");

    let outcome = import_json(&destination, &text).await.unwrap();
    assert_eq!(outcome.cleared, 0);
    assert_eq!(outcome.set, 3);

    let imported = destination.cookies_in_store(&StoreId::new("private"));
    assert_eq!(imported.len(), 3);
    // Destination store id wins over the exported provenance
    assert!(imported.iter().all(|c| c.store_id == "private"));
    // The tab followed the document URL, not its previous address
    assert_eq!(destination.active_tab_url().as_deref(), Some(TAB_URL));
}

#[tokio::test]
async fn test_import_navigates_to_edited_url() {
    let host = logged_in_host();
    let mut doc = export_active_tab(&host).await.unwrap();

    // The user retargets the document before submitting
    doc.url = "https://app.example.com/settings".to_string();
    import_to_active_tab(&host, &doc).await.unwrap();

    assert_eq!(
        host.active_tab_url().as_deref(),
        Some("https://app.example.com/settings")
    );
    // Cookies still land on their own domains, not the edited URL
    let after = host.cookies_in_store(&StoreId::new(DEFAULT_STORE));
    assert!(after.iter().any(|c| c.domain == ".example.com"));
}

#[tokio::test]
async fn test_import_without_active_tab_fails_before_clearing() {
    let host = MemoryHost::new();
    host.insert_cookie(DEFAULT_STORE, seed_cookie("sid", "v", ".example.com", None));
    // No tab opened

    let err = import_json(
        &host,
        "{\"url\": \"https://example.com/\", \"cookies\": []}",
    )
    .await
    .unwrap_err();
    assert_eq!(err, cookieport::base::TransferError::NoActiveTab);
    assert_eq!(host.cookies_in_store(&StoreId::new(DEFAULT_STORE)).len(), 1);
}

#[tokio::test]
async fn test_exported_json_is_editable_wire_format() {
    let host = logged_in_host();
    let doc = export_active_tab(&host).await.unwrap();
    let text = doc.to_json_pretty();

    // Two-space pretty print with camelCase keys, as shown to the user
    assert!(text.contains("\n  \"cookies\": ["));
    assert!(text.contains("\"httpOnly\""));
    assert!(text.contains("\"expirationDate\""));

    // A hand edit of the value survives the trip
    let edited = text.replace("s3cret", "forged");
    import_json(&host, &edited).await.unwrap();
    let after = export_active_tab(&host).await.unwrap();
    assert_eq!(
        after.cookies.iter().find(|c| c.name == "sid").unwrap().value,
        "forged"
    );
}
