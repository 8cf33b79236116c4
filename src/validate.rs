use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;

/// Symbols the password rule accepts.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.?";

/// Form fields that can fail validation, across every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Surnames,
    Email,
    EmailConfirmation,
    BirthDate,
    Login,
    Password,
    Avatar,
    Privacy,
    CardNumber,
    Cvv,
    Expiry,
    FullName,
    TipTitle,
    TipDescription,
}

impl Field {
    /// Human label used when a failure is shown next to the field.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Surnames => "Surnames",
            Field::Email => "Email",
            Field::EmailConfirmation => "Email confirmation",
            Field::BirthDate => "Birth date",
            Field::Login => "Login",
            Field::Password => "Password",
            Field::Avatar => "Profile picture",
            Field::Privacy => "Privacy policy",
            Field::CardNumber => "Card number",
            Field::Cvv => "CVV",
            Field::Expiry => "Expiry",
            Field::FullName => "Name on card",
            Field::TipTitle => "Tip title",
            Field::TipDescription => "Tip description",
        }
    }
}

/// A single failed check, tied to the field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        FieldError {
            field,
            message: message.into(),
        }
    }
}

/// At least 3 letters; spaces, hyphens and apostrophes may appear between them.
pub fn valid_name(name: &str) -> bool {
    let allowed = name
        .chars()
        .all(|c| c.is_alphabetic() || c == ' ' || c == '-' || c == '\'');
    allowed && name.chars().filter(|c| c.is_alphabetic()).count() >= 3
}

/// At least two whitespace-separated surnames, each 3+ letters and nothing else.
pub fn valid_surnames(surnames: &str) -> bool {
    let tokens: Vec<&str> = surnames.split_whitespace().collect();
    tokens.len() >= 2
        && tokens
            .iter()
            .all(|t| t.chars().count() >= 3 && t.chars().all(char::is_alphabetic))
}

/// `local@domain.tld` shape with a TLD of 2+ letters.
pub fn valid_email(email: &str) -> bool {
    let shape = Regex::new(r"^[^\s@]+@[^\s@]+\.[A-Za-z]{2,}$").unwrap();
    shape.is_match(email)
}

/// The confirmation must repeat the email exactly.
pub fn valid_email_confirmation(email: &str, confirmation: &str) -> bool {
    !email.is_empty() && email == confirmation
}

/// ISO date between 1900-01-01 and today, inclusive.
pub fn valid_birth_date(date: &str) -> bool {
    let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
        return false;
    };
    let floor = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
    parsed >= floor && parsed <= Utc::now().date_naive()
}

/// Trimmed length of 5+ characters.
pub fn valid_login(login: &str) -> bool {
    login.trim().chars().count() >= 5
}

/// 8+ characters with 2+ digits, a symbol, an uppercase and a lowercase letter.
///
/// Passwords are taken exactly as typed; no trimming happens anywhere.
pub fn valid_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().filter(|c| c.is_ascii_digit()).count() >= 2
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
}

/// The bytes must carry a webp, png or jpeg signature.
pub fn valid_avatar(bytes: &[u8]) -> bool {
    crate::avatar::sniff_mime(bytes).is_some()
}

/// 13, 15, 16 or 19 digits, nothing else.
pub fn valid_card_number(number: &str) -> bool {
    matches!(number.len(), 13 | 15 | 16 | 19) && number.chars().all(|c| c.is_ascii_digit())
}

/// Exactly 3 digits.
pub fn valid_cvv(cvv: &str) -> bool {
    cvv.len() == 3 && cvv.chars().all(|c| c.is_ascii_digit())
}

/// `YYYY-MM` no earlier than the current month.
pub fn valid_expiry(expiry: &str) -> bool {
    let Some((year, month)) = parse_expiry(expiry) else {
        return false;
    };
    let now = Utc::now();
    (year, month) >= (now.year(), now.month())
}

pub(crate) fn parse_expiry(expiry: &str) -> Option<(i32, u32)> {
    let (year, month) = expiry.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    if (1..=12).contains(&month) {
        Some((year, month))
    } else {
        None
    }
}

/// Trimmed length of 3+ characters.
pub fn valid_full_name(full_name: &str) -> bool {
    full_name.trim().chars().count() >= 3
}

/// 15+ characters.
pub fn valid_tip_title(title: &str) -> bool {
    title.chars().count() >= 15
}

/// 30+ characters.
pub fn valid_tip_description(description: &str) -> bool {
    description.chars().count() >= 30
}
