use foursight_core::ActionError;
use foursight_model::error::ErrorDetail;
use http::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("Received invalid json data")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Internal(#[from] InternalError),

    #[error("Not signed in")]
    Unauthenticated,
}

#[derive(Error, Debug)]
pub enum InternalError {
    #[error("{0} cannot be used as API base url")]
    CannotBeABase(String),

    #[error(transparent)]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
}

#[derive(Error, Debug)]
pub enum HttpError {
    #[error(transparent)]
    Client(#[from] foursight_http::Error),

    #[error(transparent)]
    Http(#[from] http::Error),
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to access session file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Session file {path} is corrupt")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl Error {
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http(HttpError::Client(err)) => err.status(),
            _ => None,
        }
    }

    /// Message of the `detail` field of an error response.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Http(HttpError::Client(foursight_http::Error::StatusCode { body, .. })) => {
                ErrorDetail::message_from_body(body)
            }
            _ => None,
        }
    }

    /// Converts into the error shown to the user. `fallback` is used when the
    /// server did not explain the failure.
    #[must_use]
    pub fn into_action_error(self, fallback: &str) -> ActionError {
        if matches!(self, Self::Unauthenticated) {
            return ActionError::auth_required();
        }
        tracing::debug!(error = &self as &dyn std::error::Error, fallback, "API request failed");
        let detail = self.detail();
        if self.status() == Some(StatusCode::UNAUTHORIZED) {
            return detail.map_or_else(ActionError::auth_required, ActionError::AuthRequired);
        }
        ActionError::network(detail.unwrap_or_else(|| fallback.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: StatusCode, body: &str) -> Error {
        HttpError::from(foursight_http::Error::StatusCode {
            status,
            body: body.to_owned(),
        })
        .into()
    }

    #[test]
    fn test_detail_becomes_message() {
        let err = status_error(StatusCode::BAD_REQUEST, r#"{"detail": "Email already registered"}"#);
        assert_eq!(
            err.into_action_error("Sign up failed"),
            ActionError::network("Email already registered")
        );
    }

    #[test]
    fn test_fallback_without_detail() {
        let err = status_error(StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>");
        assert_eq!(
            err.into_action_error("Failed to submit vote"),
            ActionError::network("Failed to submit vote")
        );
        assert_eq!(
            Error::from(HttpError::from(foursight_http::Error::Timeout)).into_action_error("Failed to load comments"),
            ActionError::network("Failed to load comments")
        );
    }

    #[test]
    fn test_unauthorized_requires_sign_in() {
        let err = status_error(StatusCode::UNAUTHORIZED, r#"{"detail": "Could not validate credentials"}"#);
        assert_eq!(
            err.into_action_error("Failed to submit vote"),
            ActionError::AuthRequired("Could not validate credentials".to_owned())
        );
        assert_eq!(
            Error::Unauthenticated.into_action_error("Failed to add comment"),
            ActionError::auth_required()
        );
    }
}
