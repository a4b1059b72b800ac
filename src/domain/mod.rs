//! Core domain types and models
//!
//! This module contains the domain layer: item records, photo payloads,
//! and the error hierarchy shared across the crate.

pub mod errors;
pub mod item;
pub mod photo;
pub mod result;

pub use errors::{ExportError, StoreError, VaultError};
pub use item::{ItemRecord, ItemRecordBuilder};
pub use photo::Photo;
pub use result::Result;
