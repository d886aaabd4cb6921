//! Base types and error handling.
//!
//! Provides the crate-wide error taxonomy:
//! - [`TransferError`]: every failure a transfer can surface
//! - [`TransferResult`]: result alias used throughout the crate

pub mod error;

pub use error::{TransferError, TransferResult};
