//! The transfer protocol: export and import of tab cookie state.
//!
//! Control flow of one transfer:
//!
//! 1. [`export_active_tab`] reads the focused tab's cookies and produces a
//!    [`TransferDocument`](crate::cookies::TransferDocument) for display.
//! 2. The user copies, edits, or pastes the pretty-printed JSON.
//! 3. [`import_json`] consumes the literal text: clear-then-set against the
//!    destination tab's store, then navigation to the document URL.
//!
//! The import's ordering contract (all removals join before the first write)
//! lives in [`import_to_active_tab`]; see its documentation for the phase
//! and failure semantics.

pub mod export;
pub mod import;

pub use export::export_active_tab;
pub use import::{import_json, import_to_active_tab, ImportOutcome};
