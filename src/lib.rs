// MediVault - Inventory Export Service
// Copyright (c) 2025 MediVault Contributors
// Licensed under the MIT License

//! # MediVault - Inventory Export Service
//!
//! MediVault's export service collects inventory records from an inventory
//! store and produces downloadable exports: a plain CSV of every item, or a
//! ZIP backup bundling the CSV manifest with all photo attachments.
//!
//! ## Architecture
//!
//! The crate follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (export pipeline, verification)
//! - [`adapters`] - Collaborators (inventory stores, download sinks)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use medivault::adapters::download::FsSink;
//! use medivault::adapters::store::JsonStore;
//! use medivault::core::export::ExportOrchestrator;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(JsonStore::new("medivault-items.json"));
//!     let sink = Arc::new(FsSink::new("exports"));
//!
//!     let mut orchestrator = ExportOrchestrator::new(store, sink);
//!     let summary = orchestrator.export_csv().await;
//!
//!     println!("{}", summary.message);
//! }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations use [`domain::VaultError`]; precondition
//! rejections (`"No items to export"`, the photo-less backup message) are
//! recovered inside the orchestrator and surfaced as notices rather than
//! errors:
//!
//! ```rust,no_run
//! use medivault::domain::VaultError;
//!
//! fn example() -> Result<(), VaultError> {
//!     let config = medivault::config::load_config("medivault.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! The crate logs through `tracing`:
//!
//! ```rust,no_run
//! tracing::info!(items = 12, "Export completed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
