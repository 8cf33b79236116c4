pub mod checkout;
pub mod login;
pub mod register;
pub mod tips;
