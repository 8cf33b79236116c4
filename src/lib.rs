//! Form validation and local persistence for the travel demo site:
//! login, registration, checkout, the tip board and the page widgets.

pub mod avatar;
pub mod forms;
pub mod models;
pub mod pages;
pub mod store;
pub mod validate;
pub mod widgets;
