use crate::avatar;
use crate::models::UserRecord;
use crate::pages::Page;
use crate::store::{KeyValueStore, SessionTracker, UserDirectory};
use crate::validate::{self, Field, FieldError};
use anyhow::Result;
use log::info;
use std::path::PathBuf;

/// Raw input, straight from the registration page fields.
#[derive(Debug, Clone, Default)]
pub struct RegistrationInput {
    pub name: String,
    pub surnames: String,
    pub email: String,
    pub email_confirmation: String,
    pub birth_date: String,
    pub login: String,
    pub password: String,
    pub avatar: Option<PathBuf>,
    pub privacy_accepted: bool,
}

/// What the registration page shows after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The first failing field, in page order.
    Invalid(FieldError),
    Success { login: String, redirect: Page },
}

/// Runs the field checks in page order, stopping at the first failure,
/// then stores the new record and opens its session.
pub async fn submit<S: KeyValueStore>(
    users: &UserDirectory<S>,
    sessions: &SessionTracker<S>,
    input: &RegistrationInput,
) -> Result<RegistrationOutcome> {
    if let Some(error) = first_field_error(input) {
        return Ok(RegistrationOutcome::Invalid(error));
    }

    let login = input.login.trim();
    if users.find(login).await.is_some() {
        return Ok(RegistrationOutcome::Invalid(FieldError::new(
            Field::Login,
            "That login is already taken, pick another one",
        )));
    }

    let avatar = match &input.avatar {
        Some(path) => match avatar::encode_file(path).await {
            Ok(data_url) => Some(data_url),
            Err(e) => {
                return Ok(RegistrationOutcome::Invalid(FieldError::new(
                    Field::Avatar,
                    format!("Could not attach the picture: {e:#}"),
                )));
            }
        },
        None => None,
    };

    let mut record = UserRecord::new(
        input.password.clone(),
        input.name.trim().to_string(),
        input.surnames.trim().to_string(),
        input.email.trim().to_string(),
        input.birth_date.trim().to_string(),
    );
    record.avatar = avatar;

    users.insert(login, record).await?;
    sessions.set(login).await?;
    info!("{login} registered");

    Ok(RegistrationOutcome::Success {
        login: login.to_string(),
        redirect: Page::Dashboard,
    })
}

fn first_field_error(input: &RegistrationInput) -> Option<FieldError> {
    if !validate::valid_name(input.name.trim()) {
        return Some(FieldError::new(
            Field::Name,
            "Name needs at least 3 letters",
        ));
    }
    if !validate::valid_surnames(&input.surnames) {
        return Some(FieldError::new(
            Field::Surnames,
            "Enter at least two surnames of 3 or more letters",
        ));
    }
    if !validate::valid_email(input.email.trim()) {
        return Some(FieldError::new(
            Field::Email,
            "Enter a valid email address",
        ));
    }
    if !validate::valid_email_confirmation(input.email.trim(), input.email_confirmation.trim()) {
        return Some(FieldError::new(
            Field::EmailConfirmation,
            "The two email addresses do not match",
        ));
    }
    if !validate::valid_birth_date(input.birth_date.trim()) {
        return Some(FieldError::new(
            Field::BirthDate,
            "Birth date must fall between 1900-01-01 and today",
        ));
    }
    if !validate::valid_login(&input.login) {
        return Some(FieldError::new(
            Field::Login,
            "Login needs at least 5 characters",
        ));
    }
    if !validate::valid_password(&input.password) {
        return Some(FieldError::new(
            Field::Password,
            "Password needs 8 characters with 2 digits, a symbol, an uppercase and a lowercase letter",
        ));
    }
    if !input.privacy_accepted {
        return Some(FieldError::new(
            Field::Privacy,
            "You must accept the privacy policy",
        ));
    }
    None
}
