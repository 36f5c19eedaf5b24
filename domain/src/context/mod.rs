//! Document context store.
//!
//! Holds the text of the most recently uploaded document. The completion
//! request reads it; only the session mutates it.

/// Holder of at most one live document context
#[derive(Debug, Clone, Default)]
pub struct ContextStore {
    current: Option<String>,
}

impl ContextStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any previous context unconditionally
    pub fn set(&mut self, text: impl Into<String>) {
        self.current = Some(text.into());
    }

    pub fn get(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn is_populated(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let store = ContextStore::new();
        assert!(store.get().is_none());
        assert!(!store.is_populated());
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let mut store = ContextStore::new();
        store.set("first document");
        store.set("second document");
        assert_eq!(store.get(), Some("second document"));
    }

    #[test]
    fn test_accepts_empty_string() {
        let mut store = ContextStore::new();
        store.set("");
        assert_eq!(store.get(), Some(""));
        assert!(store.is_populated());
    }

    #[test]
    fn test_clear_resets_to_none() {
        let mut store = ContextStore::new();
        store.set("text");
        store.clear();
        assert!(store.get().is_none());
    }
}
