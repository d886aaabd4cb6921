//! # cookieport
//!
//! Browser-session cookie transfer for Rust.
//!
//! `cookieport` moves authenticated session state between browser
//! profiles/contexts: export the active tab's cookies as an editable JSON
//! document, hand the text to a user, and re-import it elsewhere as a
//! clear-then-set transaction that ends by navigating the tab to the
//! document's URL.
//!
//! ## Features
//!
//! - **Transfer documents**: pretty-printed JSON wire format (plus a
//!   curl/wget-compatible Netscape codec)
//! - **Ordering guarantees**: every removal of old cookie state joins before
//!   the first write of new state
//! - **Pluggable hosts**: one capability trait, selected at startup — an
//!   in-process host ships in-crate, platform bridges implement the same
//!   trait
//! - **RFC 6265 visibility**: host-only vs domain cookies, path matching,
//!   secure/https restriction, expiry filtering
//!
//! ## Quick Start
//!
//! ```rust
//! use cookieport::host::MemoryHost;
//! use cookieport::transfer::{export_active_tab, import_json};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), cookieport::base::TransferError> {
//!     let host = MemoryHost::new();
//!     host.open_tab("https://example.com/", "0");
//!
//!     let doc = export_active_tab(&host).await?;
//!     let text = doc.to_json_pretty();
//!     // ... user edits the text, possibly in another profile's popup ...
//!     let outcome = import_json(&host, &text).await?;
//!     assert_eq!(outcome.set, doc.cookies.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error taxonomy shared by the whole crate
//! - [`cookies`] - Wire/host cookie types, transfer document, in-memory jar
//! - [`host`] - Host capability boundary and the in-process implementation
//! - [`transfer`] - The export and import operations
//!
//! ## Known non-atomicity
//!
//! Import is clear-then-set without rollback. A capability failure between
//! the two phases leaves the target URL cookie-less; callers that need
//! stronger guarantees must stage and verify above this crate.

pub mod base;
pub mod cookies;
pub mod host;
pub mod transfer;
