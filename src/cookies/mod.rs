//! Cookie data model and in-memory storage.
//!
//! This module provides the two cookie representations the transfer protocol
//! moves between, plus the jar backing the in-process host:
//!
//! - **Wire format**: [`CookieRecord`](record::CookieRecord) and
//!   [`TransferDocument`](document::TransferDocument) — what the user sees,
//!   edits, and pastes.
//! - **Host format**: [`HostCookie`](record::HostCookie) — what the host
//!   store enumerates, including bookkeeping the wire format drops.
//! - **Storage**: [`CookieJar`](jar::CookieJar) — RFC 6265 visibility
//!   matching for one cookie store.
//!
//! # Export normalization
//!
//! ```rust
//! use cookieport::cookies::record::{CookieRecord, HostCookie, SameSite};
//!
//! # let host_cookie = HostCookie {
//! #     name: "sid".into(), value: "v".into(), domain: ".example.com".into(),
//! #     path: "/".into(), secure: true, http_only: true, host_only: false,
//! #     session: true, same_site: SameSite::Lax, expiration_date: None,
//! #     store_id: "0".into(),
//! # };
//! let record = CookieRecord::from_host(&host_cookie);
//! assert_eq!(record.store_id.as_deref(), Some("0"));
//! ```

pub mod document;
pub mod jar;
pub mod record;

pub use document::TransferDocument;
pub use jar::CookieJar;
pub use record::{CookieRecord, HostCookie, SameSite};
