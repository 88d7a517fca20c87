//! Application configuration.
//!
//! A small TOML file holds the search endpoints and storage location;
//! the search credential itself is resolved from the environment at
//! request time, never stored in the file.

mod credentials;
mod loader;
mod types;

pub use credentials::{CredentialStatus, SecureString};
pub use loader::ConfigError;
pub use types::{Config, SearchConfig, StorageConfig};
