use thiserror::Error;

/// Failure of a user triggered action. None of them is fatal, the user can retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("{0}")]
    AuthRequired(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Network(String),

    #[error("A request for {0} is still in progress")]
    Busy(String),
}

impl ActionError {
    pub fn auth_required() -> Self {
        Self::AuthRequired("Please sign in to continue".to_owned())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    #[must_use]
    pub fn is_auth_required(&self) -> bool {
        matches!(self, Self::AuthRequired(_))
    }
}
