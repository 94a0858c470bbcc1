use std::path::PathBuf;

use thiserror::Error;

use crate::locale::Locale;

/// Failures while loading build-time data. Request-time conditions such as
/// an unknown project or locale are not errors and never appear here.
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("project name `{0}` appears more than once in the catalog")]
    DuplicateName(String),

    #[error("project name `{0}` is not a single url path segment")]
    InvalidName(String),

    #[error("message bundle `{locale}` is missing `{key}`")]
    MissingMessage { locale: Locale, key: String },

    #[error("message bundle `{locale}` is not a JSON object")]
    InvalidBundle { locale: Locale },
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
