use super::{KeyValueStore, SESSION_KEY};
use anyhow::Result;

/// Remembers which login is signed in. There is no expiry; the session
/// lasts until it is cleared.
pub struct SessionTracker<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionTracker<S> {
    pub fn new(store: S) -> Self {
        SessionTracker { store }
    }

    pub async fn set(&self, login: &str) -> Result<()> {
        self.store.put(SESSION_KEY, login.to_string()).await
    }

    /// The signed-in login, if any. An empty stored value counts as none.
    pub async fn current(&self) -> Option<String> {
        self.store
            .get(SESSION_KEY)
            .await
            .filter(|login| !login.is_empty())
    }

    pub async fn clear(&self) -> Result<()> {
        self.store.remove(SESSION_KEY).await
    }
}
