//! Configuration management
//!
//! TOML-backed configuration with environment substitution and
//! `MEDIVAULT_*` overrides.

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{
    ApplicationConfig, ExportConfig, LoggingConfig, StoreBackend, StoreConfig, VaultConfig,
    VerificationConfig,
};
