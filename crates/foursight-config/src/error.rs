use crate::assessment::error::BankError;
use foursight_utils::loader::error::LoadingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Loading(#[from] LoadingError),

    #[error("Invalid yaml: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("Invalid assessment: {0}")]
    Bank(#[from] BankError),

    #[error("Assessment {0} is defined more than once")]
    DuplicateAssessment(String),
}
