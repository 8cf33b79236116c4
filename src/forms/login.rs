use crate::pages::Page;
use crate::store::{KeyValueStore, SessionTracker, UserDirectory};
use anyhow::Result;
use log::info;

/// What the login page shows after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Both fields are required before any lookup happens.
    MissingFields,
    /// Unknown logins and wrong passwords read the same on purpose.
    InvalidCredentials,
    Success { login: String, redirect: Page },
}

/// Checks the typed credentials against the directory and, on a match,
/// opens a session and points the page at the dashboard.
pub async fn submit<S: KeyValueStore>(
    users: &UserDirectory<S>,
    sessions: &SessionTracker<S>,
    login: &str,
    password: &str,
) -> Result<LoginOutcome> {
    let login = login.trim();
    if login.is_empty() || password.is_empty() {
        return Ok(LoginOutcome::MissingFields);
    }

    match users.find(login).await {
        Some(record) if record.password == password => {
            sessions.set(login).await?;
            info!("{login} logged in");
            Ok(LoginOutcome::Success {
                login: login.to_string(),
                redirect: Page::Dashboard,
            })
        }
        _ => Ok(LoginOutcome::InvalidCredentials),
    }
}
