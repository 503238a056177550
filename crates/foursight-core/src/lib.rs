pub mod assessment;
pub mod auth;
pub mod engagement;
pub mod error;

pub use error::ActionError;
