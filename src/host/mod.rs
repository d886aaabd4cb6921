//! Host browser capability boundary.
//!
//! Provides the pluggable adapter between the transfer protocol and whatever
//! actually holds tabs and cookies:
//! - [`HostBridge`](bridge::HostBridge) — the single capability interface
//!   (tab query, cookie list/remove/set, navigation, window lifecycle)
//! - [`MemoryHost`](memory::MemoryHost) — complete in-process implementation
//!
//! # Architecture
//!
//! The bridge is selected once at startup and used for the whole session;
//! nothing downstream branches on host identity. Platform adapters (a
//! WebExtension relay, a CDP client) implement the same trait out of crate.
//!
//! # Example
//!
//! ```rust
//! use cookieport::host::{HostBridge, MemoryHost};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let host = MemoryHost::new();
//! host.open_tab("https://example.com/", "0");
//! let tab = host.query_active_tab().await.unwrap();
//! assert_eq!(tab.url, "https://example.com/");
//! # }
//! ```

pub mod bridge;
pub mod memory;

pub use bridge::{
    ActiveTab, CookieFilter, CookieListing, HostBridge, HostOp, RemoveTarget, SetRequest, StoreId,
    TabId, TabQuery,
};
pub use memory::{MemoryHost, DEFAULT_STORE};
