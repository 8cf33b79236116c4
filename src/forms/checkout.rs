use crate::validate::{self, Field, FieldError};
use chrono::{Datelike, Utc};

/// One in-progress checkout: the raw field values plus the failures
/// from the last submit.
///
/// Unlike the other forms, checkout reports every failing field at
/// once instead of stopping at the first one.
#[derive(Debug, Clone)]
pub struct CheckoutForm {
    pub card_number: String,
    pub cvv: String,
    pub expiry: String,
    pub full_name: String,
    errors: Vec<FieldError>,
    min_expiry: (i32, u32),
}

/// What the checkout page shows after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Every failing field, in page order.
    Invalid(Vec<FieldError>),
    /// All fields passed and the page shows the confirmation notice.
    Confirmed { message: String },
}

impl CheckoutForm {
    pub fn new() -> Self {
        CheckoutForm {
            card_number: String::new(),
            cvv: String::new(),
            expiry: String::new(),
            full_name: String::new(),
            errors: Vec::new(),
            min_expiry: current_month(),
        }
    }

    /// Checks every field and keeps all failures.
    pub fn submit(&mut self) -> CheckoutOutcome {
        let mut errors = Vec::new();
        if !validate::valid_card_number(self.card_number.trim()) {
            errors.push(FieldError::new(
                Field::CardNumber,
                "Card number must be 13, 15, 16 or 19 digits",
            ));
        }
        if !validate::valid_cvv(self.cvv.trim()) {
            errors.push(FieldError::new(Field::Cvv, "CVV must be exactly 3 digits"));
        }
        if !validate::valid_expiry(self.expiry.trim()) {
            errors.push(FieldError::new(
                Field::Expiry,
                format!(
                    "Expiry must be {}-{:02} or later",
                    self.min_expiry.0, self.min_expiry.1
                ),
            ));
        }
        if !validate::valid_full_name(&self.full_name) {
            errors.push(FieldError::new(
                Field::FullName,
                "Name on card needs at least 3 characters",
            ));
        }

        self.errors = errors.clone();
        if errors.is_empty() {
            CheckoutOutcome::Confirmed {
                message: "Payment details accepted. Thanks for booking with us!".to_string(),
            }
        } else {
            CheckoutOutcome::Invalid(errors)
        }
    }

    /// Empties the fields and errors and re-reads the current month as
    /// the new expiry floor.
    pub fn clear(&mut self) {
        *self = CheckoutForm::new();
    }

    /// Failures from the last submit, in page order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Lower bound the expiry input enforces, as (year, month).
    pub fn min_expiry(&self) -> (i32, u32) {
        self.min_expiry
    }
}

impl Default for CheckoutForm {
    fn default() -> Self {
        CheckoutForm::new()
    }
}

fn current_month() -> (i32, u32) {
    let now = Utc::now();
    (now.year(), now.month())
}
