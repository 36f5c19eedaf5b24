//! Secret store adapters
//!
//! Implements [`SecretStore`](punchline_application::SecretStore) over a
//! local TOML secrets file.

mod toml_store;

pub use toml_store::TomlSecretStore;
