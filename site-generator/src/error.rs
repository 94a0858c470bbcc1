use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error(transparent)]
    Portfolio(#[from] portfolio_core::PortfolioError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to serialise site manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("{count} internal link(s) point at pages that are not generated")]
    BrokenLinks { count: usize },
}

pub type Result<T> = std::result::Result<T, SiteError>;
