use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadingError {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    WalkDir(#[from] async_walkdir::Error),
    #[error("Invalid yaml in {path}: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yml::Error,
    },
    #[error("Invalid configuration in {path}: {message}")]
    Invalid { path: String, message: String },
}

impl LoadingError {
    pub fn yaml(path: impl Into<String>, source: serde_yml::Error) -> Self {
        Self::Yaml {
            path: path.into(),
            source,
        }
    }

    pub fn invalid(path: impl Into<String>, message: impl ToString) -> Self {
        Self::Invalid {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
