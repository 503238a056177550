use crate::client::base::{BaseClient, Config, SecureClient};
use crate::error::{Error, HttpError};
use crate::session::Session;
use foursight_http::HttpClient;
use std::time::Duration;

/// Client of the engagement API, optionally carrying a signed in [`Session`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Config,
    http_client: HttpClient,
    session: Option<Session>,
}

impl ApiClient {
    pub fn new(config: Config, timeout: Duration) -> Result<Self, Error> {
        Ok(Self {
            config,
            http_client: HttpClient::new(timeout).map_err(HttpError::from)?,
            session: None,
        })
    }

    #[must_use]
    pub fn with_session(mut self, session: Option<Session>) -> Self {
        self.session = session;
        self
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn set_session(&mut self, session: Session) -> &Session {
        self.session.insert(session)
    }

    pub fn clear_session(&mut self) -> Option<Session> {
        self.session.take()
    }
}

impl BaseClient for ApiClient {
    fn get_http_client(&self) -> &HttpClient {
        &self.http_client
    }

    fn get_config(&self) -> &Config {
        &self.config
    }
}

impl SecureClient for ApiClient {
    fn get_session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}
