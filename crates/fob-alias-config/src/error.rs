//! Error types for alias configuration loading and validation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "the \"configuration\" option cannot be empty; provide the tsconfig or compilerOptions object"
    )]
    MissingConfiguration,

    #[error("unable to find the \"paths\" property in the supplied configuration")]
    MissingPaths,

    #[error("the \"paths\" property must declare at least one alias")]
    EmptyPaths,

    #[error("alias '{alias}' collides with an earlier alias normalized to '{prefix}'")]
    DuplicateAlias { alias: String, prefix: String },

    #[error("invalid configuration JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
