use crate::client::api::ApiClient;
use crate::client::base::{PublicClient, SecureClient};
use crate::error::AuthError;
use crate::session::{Session, SessionStore};
use foursight_core::ActionError;
use foursight_core::auth::SignUpForm;
use foursight_model::login::Token;
use http::StatusCode;

/// Creates, restores and ends the session of an [`ApiClient`].
pub struct Authenticator<S> {
    client: ApiClient,
    store: S,
}

impl<S: SessionStore> Authenticator<S> {
    pub fn new(client: ApiClient, store: S) -> Self {
        Self { client, store }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn into_client(self) -> ApiClient {
        self.client
    }

    pub fn session(&self) -> Option<&Session> {
        self.client.session()
    }

    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<&Session, AuthError> {
        let token = self
            .client
            .sign_in(email, password)
            .await
            .map_err(|err| err.into_action_error("Sign in failed"))?;
        tracing::info!(username = %token.user.username, "signed in");
        self.start(token).await
    }

    /// The form is validated before anything is sent.
    pub async fn sign_up(&mut self, form: &SignUpForm) -> Result<&Session, AuthError> {
        form.validate()?;
        let token = self
            .client
            .sign_up(&form.username, &form.email, &form.password)
            .await
            .map_err(|err| err.into_action_error("Sign up failed"))?;
        tracing::info!(username = %token.user.username, "signed up");
        self.start(token).await
    }

    /// Picks up the stored token. A token the API rejects with `401` is removed,
    /// any other failure keeps it for the next attempt.
    pub async fn restore(&mut self) -> Result<Option<&Session>, AuthError> {
        let Some(token) = self.store.load_token().await? else {
            tracing::debug!("no stored session");
            return Ok(None);
        };
        match self.client.user_for_token(&token).await {
            Ok(user) => {
                tracing::info!(username = %user.username, "restored session");
                Ok(Some(self.client.set_session(Session { token, user })))
            }
            Err(err) if err.status() == Some(StatusCode::UNAUTHORIZED) => {
                tracing::info!(error = &err as &dyn std::error::Error, "stored session is no longer valid");
                self.store.remove_token().await?;
                self.client.clear_session();
                Ok(None)
            }
            Err(err) => {
                self.client.clear_session();
                Err(err.into_action_error("Failed to restore session").into())
            }
        }
    }

    pub async fn logout(&mut self) -> Result<(), AuthError> {
        self.store.remove_token().await?;
        if let Some(session) = self.client.clear_session() {
            tracing::info!(username = %session.user.username, "signed out");
        }
        Ok(())
    }

    /// Fetches the user of the current session again. Ends the session if that fails.
    pub async fn refresh_user(&mut self) -> Result<&Session, AuthError> {
        let Some(token) = self.client.session().map(|session| session.token.clone()) else {
            return Err(ActionError::auth_required().into());
        };
        match self.client.me().await {
            Ok(user) => Ok(self.client.set_session(Session { token, user })),
            Err(err) => {
                let err = err.into_action_error("Failed to load user");
                self.logout().await?;
                Err(err.into())
            }
        }
    }

    async fn start(&mut self, token: Token) -> Result<&Session, AuthError> {
        self.store.save_token(&token.access_token).await?;
        Ok(self.client.set_session(Session {
            token: token.access_token,
            user: token.user,
        }))
    }
}
