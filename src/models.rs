use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One registered account, stored under its login in the user directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub password: String,
    pub name: String,
    pub surnames: String,
    pub email: String,
    /// Birth date as typed, `YYYY-MM-DD`.
    pub birth_date: String,
    /// Profile picture as a base64 data URL, when one was attached.
    #[serde(default)]
    pub avatar: Option<String>,
}

impl UserRecord {
    pub fn new(
        password: String,
        name: String,
        surnames: String,
        email: String,
        birth_date: String,
    ) -> Self {
        UserRecord {
            password,
            name,
            surnames,
            email,
            birth_date,
            avatar: None,
        }
    }
}

/// A community travel tip shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl Tip {
    pub fn new(title: String, description: String, url: String) -> Self {
        let created_at = Utc::now();
        Tip {
            id: created_at.timestamp_millis(),
            title,
            description,
            url,
            created_at,
        }
    }
}
