use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("name source {path} is missing or unreadable: {source}")]
    NameSource {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{which} name list is empty")]
    EmptyNameList { which: &'static str },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Application-wide Result alias
pub type AppResult<T> = Result<T, AppError>;
