use std::collections::HashMap;

use parking_lot::RwLock;

/// Key under which a session's working form state is kept.
pub const FORM_DATA_KEY: &str = "proposalFormData";

/// Key under which a session's working draft HTML is kept.
pub const DRAFT_KEY: &str = "proposalDraft";

/// Minimal get/set capability for per-session state.
///
/// Values are opaque strings; callers decide what they encode.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
}

/// Process-local store. State lives as long as the server does.
#[derive(Default)]
pub struct InMemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.entries.write().insert(key.to_string(), value);
    }
}

/// Scope a state key to one session.
pub fn session_key(session_id: &str, key: &str) -> String {
    format!("{}/{}", session_id, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_roundtrip() {
        let store = InMemorySessionStore::new();
        store.set("s1/proposalFormData", "{\"clientName\":\"Acme\"}".to_string());
        assert_eq!(
            store.get("s1/proposalFormData").as_deref(),
            Some("{\"clientName\":\"Acme\"}")
        );
    }

    #[test]
    fn test_get_missing_key_is_none() {
        let store = InMemorySessionStore::new();
        assert!(store.get("s1/proposalFormData").is_none());
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let store = InMemorySessionStore::new();
        store.set("s1/proposalDraft", "<p>v1</p>".to_string());
        store.set("s1/proposalDraft", "<p>v2</p>".to_string());
        assert_eq!(store.get("s1/proposalDraft").as_deref(), Some("<p>v2</p>"));
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = InMemorySessionStore::new();
        store.set(&session_key("alpha", FORM_DATA_KEY), "a".to_string());
        store.set(&session_key("beta", FORM_DATA_KEY), "b".to_string());

        assert_eq!(store.get(&session_key("alpha", FORM_DATA_KEY)).as_deref(), Some("a"));
        assert_eq!(store.get(&session_key("beta", FORM_DATA_KEY)).as_deref(), Some("b"));
        assert!(store.get(&session_key("gamma", FORM_DATA_KEY)).is_none());
    }
}
