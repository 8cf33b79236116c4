use crate::pages::Page;
use crate::store::{KeyValueStore, SessionTracker, UserDirectory};
use anyhow::Result;
use log::warn;

/// Profile fields the dashboard renders for the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub login: String,
    pub name: String,
    pub surnames: String,
    pub email: String,
    pub birth_date: String,
    pub avatar: Option<String>,
}

/// What the dashboard decides to do when it loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardGate {
    /// No usable session: leave before rendering anything.
    Redirect(Page),
    View(Profile),
}

/// Session gate the dashboard runs before rendering. A session naming a
/// login the directory no longer knows is dropped on the spot.
pub async fn load<S: KeyValueStore>(
    users: &UserDirectory<S>,
    sessions: &SessionTracker<S>,
) -> Result<DashboardGate> {
    let Some(login) = sessions.current().await else {
        return Ok(DashboardGate::Redirect(Page::Home));
    };

    let Some(record) = users.find(&login).await else {
        warn!("Dropping a session for unknown login {login}");
        sessions.clear().await?;
        return Ok(DashboardGate::Redirect(Page::Home));
    };

    Ok(DashboardGate::View(Profile {
        login,
        name: record.name,
        surnames: record.surnames,
        email: record.email,
        birth_date: record.birth_date,
        avatar: record.avatar,
    }))
}
