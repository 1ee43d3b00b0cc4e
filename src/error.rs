//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Slug resolution failure
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no post found for slug `{slug}`")]
    NotFound { slug: String },
}

/// Failure while loading authored content
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse built-in content: {0}")]
    Builtin(#[source] serde_yaml::Error),

    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`{slug}` cannot be used as a slug")]
    InvalidSlug { slug: String },

    #[error("{path} has no front-matter block")]
    MissingFrontMatter { path: PathBuf },

    #[error("invalid front-matter in {path}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
