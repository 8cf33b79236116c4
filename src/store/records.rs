use super::{KeyValueStore, TIPS_KEY, USERS_KEY};
use crate::models::{Tip, UserRecord};
use anyhow::{bail, Context, Result};
use log::warn;
use std::collections::HashMap;

/// Typed access to the persisted login → record directory.
pub struct UserDirectory<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> UserDirectory<S> {
    pub fn new(store: S) -> Self {
        UserDirectory { store }
    }

    /// Loads the whole directory. Missing or corrupt data reads as empty.
    pub async fn load(&self) -> HashMap<String, UserRecord> {
        let Some(raw) = self.store.get(USERS_KEY).await else {
            return HashMap::new();
        };
        match serde_json::from_str(&raw) {
            Ok(users) => users,
            Err(e) => {
                warn!("Discarding unreadable user directory: {e}");
                HashMap::new()
            }
        }
    }

    pub async fn save(&self, users: &HashMap<String, UserRecord>) -> Result<()> {
        let json =
            serde_json::to_string_pretty(users).context("Failed to serialize user directory")?;
        self.store.put(USERS_KEY, json).await
    }

    pub async fn find(&self, login: &str) -> Option<UserRecord> {
        self.load().await.get(login).cloned()
    }

    /// Stores a record under a new login. Logins already present are rejected.
    pub async fn insert(&self, login: &str, record: UserRecord) -> Result<()> {
        let mut users = self.load().await;
        if users.contains_key(login) {
            bail!("Login already exists");
        }
        users.insert(login.to_string(), record);
        self.save(&users).await
    }
}

/// Typed access to the persisted tip list.
pub struct TipBoard<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> TipBoard<S> {
    pub fn new(store: S) -> Self {
        TipBoard { store }
    }

    /// Loads every stored tip. Missing or corrupt data reads as empty.
    pub async fn load(&self) -> Vec<Tip> {
        let Some(raw) = self.store.get(TIPS_KEY).await else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(tips) => tips,
            Err(e) => {
                warn!("Discarding unreadable tip list: {e}");
                Vec::new()
            }
        }
    }

    pub async fn save(&self, tips: &[Tip]) -> Result<()> {
        let json = serde_json::to_string_pretty(tips).context("Failed to serialize tip list")?;
        self.store.put(TIPS_KEY, json).await
    }

    /// Puts a tip at the front of the list and persists the result.
    pub async fn prepend(&self, tip: Tip) -> Result<()> {
        let mut tips = self.load().await;
        tips.insert(0, tip);
        self.save(&tips).await
    }

    /// The three most recent tips, newest first.
    pub async fn top3(&self) -> Vec<Tip> {
        let mut tips = self.load().await;
        tips.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tips.truncate(3);
        tips
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::{Duration, Utc};

    fn record(password: &str) -> UserRecord {
        UserRecord::new(
            password.to_string(),
            "Ana".to_string(),
            "García López".to_string(),
            "ana@example.com".to_string(),
            "1990-05-17".to_string(),
        )
    }

    fn tip_created_at(title: &str, minutes_ago: i64) -> Tip {
        let mut tip = Tip::new(
            title.to_string(),
            "Long enough description for the board".to_string(),
            String::new(),
        );
        tip.created_at = Utc::now() - Duration::minutes(minutes_ago);
        tip.id = tip.created_at.timestamp_millis();
        tip
    }

    #[tokio::test]
    async fn an_empty_store_reads_as_an_empty_directory() {
        let directory = UserDirectory::new(MemoryStore::new());
        assert!(directory.load().await.is_empty());
    }

    #[tokio::test]
    async fn corrupt_data_reads_as_an_empty_directory() {
        let store = MemoryStore::new();
        store.put(USERS_KEY, "{not json".to_string()).await.unwrap();
        let directory = UserDirectory::new(store);
        assert!(directory.load().await.is_empty());
    }

    #[tokio::test]
    async fn insert_then_find_returns_the_record() {
        let directory = UserDirectory::new(MemoryStore::new());
        directory.insert("abcde", record("Abcdef1!2")).await.unwrap();
        let found = directory.find("abcde").await.unwrap();
        assert_eq!(found.password, "Abcdef1!2");
        assert_eq!(directory.find("nobody").await, None);
    }

    #[tokio::test]
    async fn insert_rejects_an_existing_login() {
        let directory = UserDirectory::new(MemoryStore::new());
        directory.insert("abcde", record("Abcdef1!2")).await.unwrap();
        let err = directory.insert("abcde", record("Other2!aa")).await;
        assert!(err.is_err());
        // The original record is untouched.
        assert_eq!(directory.find("abcde").await.unwrap().password, "Abcdef1!2");
    }

    #[tokio::test]
    async fn corrupt_data_reads_as_an_empty_tip_list() {
        let store = MemoryStore::new();
        store.put(TIPS_KEY, "[broken".to_string()).await.unwrap();
        let board = TipBoard::new(store);
        assert!(board.load().await.is_empty());
    }

    #[tokio::test]
    async fn prepend_puts_the_newest_tip_first() {
        let board = TipBoard::new(MemoryStore::new());
        board.prepend(tip_created_at("Old tip about trains", 10)).await.unwrap();
        board.prepend(tip_created_at("New tip about buses", 0)).await.unwrap();
        let tips = board.load().await;
        assert_eq!(tips[0].title, "New tip about buses");
        assert_eq!(tips[1].title, "Old tip about trains");
    }

    #[tokio::test]
    async fn top3_caps_the_list_and_sorts_by_recency() {
        let board = TipBoard::new(MemoryStore::new());
        // Saved out of order on purpose.
        board
            .save(&[
                tip_created_at("Third newest tip here", 3),
                tip_created_at("Newest tip over here", 1),
                tip_created_at("Oldest tip of them all", 9),
                tip_created_at("Second newest tip here", 2),
            ])
            .await
            .unwrap();

        let top = board.top3().await;
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].title, "Newest tip over here");
        assert_eq!(top[1].title, "Second newest tip here");
        assert_eq!(top[2].title, "Third newest tip here");
    }

    #[tokio::test]
    async fn top3_of_an_empty_board_is_empty() {
        let board = TipBoard::new(MemoryStore::new());
        assert!(board.top3().await.is_empty());
    }
}
