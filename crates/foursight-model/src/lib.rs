pub mod engagement;
pub mod error;
pub mod login;
pub mod user;
