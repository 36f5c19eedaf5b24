//! TOML-file secret store.
//!
//! The file is a flat TOML table, e.g.
//!
//! ```toml
//! mistral_key = "sk-..."
//! ```
//!
//! It is read again on every lookup so that editing the file takes effect
//! on the next request.

use punchline_application::ports::secret_store::{SecretError, SecretStore};
use std::path::{Path, PathBuf};
use tracing::debug;

const SECRETS_FILE: &str = "secrets.toml";
const APP_DIR: &str = "punchline";

/// Secret store backed by a TOML file on disk
#[derive(Debug, Clone)]
pub struct TomlSecretStore {
    candidates: Vec<PathBuf>,
    key_name: String,
}

impl TomlSecretStore {
    /// Create a store reading `key_name`.
    ///
    /// With an explicit path only that file is consulted. Otherwise the
    /// project file `./.punchline/secrets.toml` is tried first, then
    /// `$XDG_CONFIG_HOME/punchline/secrets.toml`.
    pub fn new(key_name: impl Into<String>, explicit: Option<PathBuf>) -> Self {
        let candidates = match explicit {
            Some(path) => vec![path],
            None => Self::default_candidates(),
        };
        Self::with_candidates(key_name, candidates)
    }

    /// Create a store searching the given files in order
    pub fn with_candidates(key_name: impl Into<String>, candidates: Vec<PathBuf>) -> Self {
        Self {
            candidates,
            key_name: key_name.into(),
        }
    }

    /// Default search path for the secrets file
    pub fn default_candidates() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".punchline").join(SECRETS_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join(APP_DIR).join(SECRETS_FILE));
        }
        paths
    }

    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    fn locate(&self) -> Result<&Path, SecretError> {
        self.candidates
            .iter()
            .map(PathBuf::as_path)
            .find(|path| path.is_file())
            .ok_or_else(|| {
                let searched = self
                    .candidates
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                SecretError::FileNotFound(searched)
            })
    }
}

impl SecretStore for TomlSecretStore {
    fn api_key(&self) -> Result<String, SecretError> {
        let path = self.locate()?;
        debug!("Reading secrets from {}", path.display());

        let unreadable = |reason: String| SecretError::Unreadable {
            path: path.display().to_string(),
            reason,
        };

        let content = std::fs::read_to_string(path).map_err(|e| unreadable(e.to_string()))?;
        let table: toml::Table = toml::from_str(&content).map_err(|e| unreadable(e.to_string()))?;

        table
            .get(&self.key_name)
            .and_then(toml::Value::as_str)
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .ok_or_else(|| SecretError::MissingKey(self.key_name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn store_for(dir: &tempfile::TempDir, content: &str) -> TomlSecretStore {
        let path = dir.path().join("secrets.toml");
        fs::write(&path, content).unwrap();
        TomlSecretStore::new("mistral_key", Some(path))
    }

    #[test]
    fn test_reads_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_for(&dir, "mistral_key = \"sk-test\"\n");
        assert_eq!(store.api_key().unwrap(), "sk-test");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlSecretStore::new("mistral_key", Some(dir.path().join("absent.toml")));
        let err = store.api_key().unwrap_err();
        assert!(matches!(err, SecretError::FileNotFound(ref s) if s.contains("absent.toml")));
    }

    #[test]
    fn test_missing_or_blank_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_for(&dir, "other_key = \"x\"\n");
        assert_eq!(
            store.api_key().unwrap_err(),
            SecretError::MissingKey("mistral_key".into())
        );

        let store = store_for(&dir, "mistral_key = \"   \"\n");
        assert!(matches!(store.api_key(), Err(SecretError::MissingKey(_))));
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_for(&dir, "mistral_key = ");
        assert!(matches!(
            store.api_key(),
            Err(SecretError::Unreadable { .. })
        ));
    }

    #[test]
    fn test_rereads_on_every_call() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_for(&dir, "mistral_key = \"first\"\n");
        assert_eq!(store.api_key().unwrap(), "first");

        fs::write(dir.path().join("secrets.toml"), "mistral_key = \"second\"\n").unwrap();
        assert_eq!(store.api_key().unwrap(), "second");
    }

    #[test]
    fn test_first_existing_candidate_wins() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let present = dir.path().join("present.toml");
        fs::write(&present, "mistral_key = \"found\"\n").unwrap();

        let store = TomlSecretStore::with_candidates("mistral_key", vec![missing, present]);
        assert_eq!(store.api_key().unwrap(), "found");
    }
}
