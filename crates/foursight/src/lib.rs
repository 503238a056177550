mod auth;
mod client;
pub mod error;
pub mod session;

pub use auth::Authenticator;
pub use client::api::ApiClient;
pub use client::base::{ApiUrl, BaseClient, Config, DEFAULT_API_URL, PublicClient, SecureClient};
pub use session::{FileSessionStore, Session, SessionStore};
