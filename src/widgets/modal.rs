use crate::pages::Page;
use crate::store::{KeyValueStore, SessionTracker};
use anyhow::Result;

/// Visibility of the logout confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Hidden,
    Shown,
}

/// The logout confirmation dialog. Only a confirm touches the session;
/// every other way out of the dialog leaves it untouched.
#[derive(Debug, Default)]
pub struct LogoutModal {
    state: ModalState,
}

impl LogoutModal {
    pub fn new() -> Self {
        LogoutModal::default()
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    /// The logout button was pressed.
    pub fn open(&mut self) {
        self.state = ModalState::Shown;
    }

    /// Cancel keeps the session and hides the dialog.
    pub fn cancel(&mut self) {
        self.state = ModalState::Hidden;
    }

    /// A click outside the dialog bounds dismisses it like a cancel.
    pub fn click_outside(&mut self) {
        self.state = ModalState::Hidden;
    }

    /// Confirm ends the session and sends the user home.
    pub async fn confirm<S: KeyValueStore>(
        &mut self,
        sessions: &SessionTracker<S>,
    ) -> Result<Page> {
        sessions.clear().await?;
        self.state = ModalState::Hidden;
        Ok(Page::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn cancel_and_click_outside_keep_the_session() {
        let sessions = SessionTracker::new(MemoryStore::new());
        sessions.set("abcde").await.unwrap();

        let mut modal = LogoutModal::new();
        assert_eq!(modal.state(), ModalState::Hidden);

        modal.open();
        assert_eq!(modal.state(), ModalState::Shown);
        modal.cancel();
        assert_eq!(modal.state(), ModalState::Hidden);

        modal.open();
        modal.click_outside();
        assert_eq!(modal.state(), ModalState::Hidden);

        assert_eq!(sessions.current().await.as_deref(), Some("abcde"));
    }

    #[tokio::test]
    async fn confirm_clears_the_session_and_goes_home() {
        let sessions = SessionTracker::new(MemoryStore::new());
        sessions.set("abcde").await.unwrap();

        let mut modal = LogoutModal::new();
        modal.open();
        let target = modal.confirm(&sessions).await.unwrap();

        assert_eq!(target, Page::Home);
        assert_eq!(modal.state(), ModalState::Hidden);
        assert_eq!(sessions.current().await, None);
    }
}
