use crate::models::Tip;
use crate::store::{KeyValueStore, TipBoard};
use crate::validate::{self, Field, FieldError};
use anyhow::Result;

/// Raw input from the tip form on the dashboard.
#[derive(Debug, Clone, Default)]
pub struct TipForm {
    pub title: String,
    pub description: String,
    pub url: String,
}

/// What the tip form shows after a submit.
#[derive(Debug, Clone, PartialEq)]
pub enum TipOutcome {
    /// Title and description failures can appear together.
    Invalid(Vec<FieldError>),
    /// The board to re-render, newest first.
    Posted { latest: Vec<Tip> },
}

impl TipForm {
    /// Checks title and description; the link is free-form.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if !validate::valid_tip_title(self.title.trim()) {
            errors.push(FieldError::new(
                Field::TipTitle,
                "Title needs at least 15 characters",
            ));
        }
        if !validate::valid_tip_description(self.description.trim()) {
            errors.push(FieldError::new(
                Field::TipDescription,
                "Description needs at least 30 characters",
            ));
        }
        errors
    }

    /// Posts the tip to the front of the board, empties the form and
    /// returns the three newest tips for the page to show.
    pub async fn submit<S: KeyValueStore>(&mut self, board: &TipBoard<S>) -> Result<TipOutcome> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Ok(TipOutcome::Invalid(errors));
        }

        let tip = Tip::new(
            self.title.trim().to_string(),
            self.description.trim().to_string(),
            self.url.trim().to_string(),
        );
        board.prepend(tip).await?;

        self.title.clear();
        self.description.clear();
        self.url.clear();

        Ok(TipOutcome::Posted {
            latest: board.top3().await,
        })
    }
}
