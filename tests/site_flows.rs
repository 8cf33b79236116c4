use travel_site::forms::login::{self, LoginOutcome};
use travel_site::forms::register::{self, RegistrationInput, RegistrationOutcome};
use travel_site::forms::tips::{TipForm, TipOutcome};
use travel_site::pages::Page;
use travel_site::store::{FileStore, MemoryStore, SessionTracker, TipBoard, UserDirectory};
use travel_site::widgets::dashboard::{self, DashboardGate};
use travel_site::widgets::modal::LogoutModal;

fn ana() -> RegistrationInput {
    RegistrationInput {
        name: "Ana".to_string(),
        surnames: "García López".to_string(),
        email: "ana@example.com".to_string(),
        email_confirmation: "ana@example.com".to_string(),
        birth_date: "1990-05-17".to_string(),
        login: "abcde".to_string(),
        password: "Abcdef1!2".to_string(),
        avatar: None,
        privacy_accepted: true,
    }
}

#[tokio::test]
async fn a_full_visit_round_trips() {
    let store = MemoryStore::new();
    let users = UserDirectory::new(store.clone());
    let sessions = SessionTracker::new(store.clone());
    let board = TipBoard::new(store);

    // Register and land on the dashboard.
    let outcome = register::submit(&users, &sessions, &ana()).await.unwrap();
    assert!(matches!(
        outcome,
        RegistrationOutcome::Success { redirect: Page::Dashboard, .. }
    ));
    assert_eq!(sessions.current().await.as_deref(), Some("abcde"));

    let DashboardGate::View(profile) = dashboard::load(&users, &sessions).await.unwrap() else {
        panic!("expected the dashboard to render");
    };
    assert_eq!(profile.login, "abcde");
    assert_eq!(profile.name, "Ana");

    // Post a tip from the dashboard.
    let mut form = TipForm {
        title: "Carry small change everywhere".to_string(),
        description: "Street food stalls rarely break large bills, coins save the day".to_string(),
        url: String::new(),
    };
    let TipOutcome::Posted { latest } = form.submit(&board).await.unwrap() else {
        panic!("expected the tip to be posted");
    };
    assert_eq!(latest[0].title, "Carry small change everywhere");

    // Log out through the dialog; the dashboard must redirect afterwards.
    let mut modal = LogoutModal::new();
    modal.open();
    assert_eq!(modal.confirm(&sessions).await.unwrap(), Page::Home);
    assert_eq!(
        dashboard::load(&users, &sessions).await.unwrap(),
        DashboardGate::Redirect(Page::Home)
    );

    // The registered credentials still work.
    let outcome = login::submit(&users, &sessions, "abcde", "Abcdef1!2").await.unwrap();
    assert!(matches!(outcome, LoginOutcome::Success { .. }));
    assert_eq!(sessions.current().await.as_deref(), Some("abcde"));
}

#[tokio::test]
async fn a_cancelled_logout_changes_nothing() {
    let store = MemoryStore::new();
    let users = UserDirectory::new(store.clone());
    let sessions = SessionTracker::new(store);

    register::submit(&users, &sessions, &ana()).await.unwrap();

    let mut modal = LogoutModal::new();
    modal.open();
    modal.cancel();

    assert!(matches!(
        dashboard::load(&users, &sessions).await.unwrap(),
        DashboardGate::View(_)
    ));
}

#[tokio::test]
async fn tips_are_shared_between_accounts() {
    let store = MemoryStore::new();
    let users = UserDirectory::new(store.clone());
    let sessions = SessionTracker::new(store.clone());
    let board = TipBoard::new(store);

    register::submit(&users, &sessions, &ana()).await.unwrap();
    let mut form = TipForm {
        title: "Book trains weeks ahead".to_string(),
        description: "High-speed fares triple in the final days before departure".to_string(),
        url: String::new(),
    };
    form.submit(&board).await.unwrap();

    // A different visitor registers and sees the same board.
    let bruno = RegistrationInput {
        email: "bruno@example.com".to_string(),
        email_confirmation: "bruno@example.com".to_string(),
        login: "bruno77".to_string(),
        password: "Zyxwvu9?8".to_string(),
        ..ana()
    };
    register::submit(&users, &sessions, &bruno).await.unwrap();

    let top = board.top3().await;
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].title, "Book trains weeks ahead");
}

#[tokio::test]
async fn everything_survives_a_reload_of_the_site() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = FileStore::new(dir.path());
        let users = UserDirectory::new(store.clone());
        let sessions = SessionTracker::new(store.clone());
        let board = TipBoard::new(store);

        register::submit(&users, &sessions, &ana()).await.unwrap();
        let mut form = TipForm {
            title: "Keep copies of documents".to_string(),
            description: "A photographed passport speeds up any consulate appointment".to_string(),
            url: String::new(),
        };
        form.submit(&board).await.unwrap();
    }

    // Fresh handles over the same directory, as after closing the tab.
    let store = FileStore::new(dir.path());
    let users = UserDirectory::new(store.clone());
    let sessions = SessionTracker::new(store.clone());
    let board = TipBoard::new(store);

    assert_eq!(sessions.current().await.as_deref(), Some("abcde"));
    let DashboardGate::View(profile) = dashboard::load(&users, &sessions).await.unwrap() else {
        panic!("expected the dashboard to render");
    };
    assert_eq!(profile.email, "ana@example.com");
    assert_eq!(board.top3().await[0].title, "Keep copies of documents");
}
