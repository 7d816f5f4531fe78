//! Errors raised while rewriting aliased imports.
//!
//! Every variant is fatal for the run that produced it; there is no
//! partially rewritten output.

use std::path::PathBuf;

use fob_alias_config::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RewriteError>;

#[derive(Debug, Error)]
pub enum RewriteError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("multiple imports on the same line are not supported ({path}:{line})")]
    AmbiguousLine { path: PathBuf, line: usize },

    #[error("streaming is not supported; buffer file contents before rewriting")]
    StreamingUnsupported,

    #[error("received file with no path; files must have a path to be resolved")]
    MissingPath,

    #[error("file is not valid UTF-8 text: {path}")]
    InvalidUtf8 { path: PathBuf },

    #[error("unable to determine the working directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of [`RewriteError`].
///
/// An unreadable working directory counts as [`ErrorKind::Configuration`]:
/// it is detected while building the rewriter, before any file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    AmbiguousLine,
    UnsupportedInput,
}

impl RewriteError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) | Self::Io(_) => ErrorKind::Configuration,
            Self::AmbiguousLine { .. } => ErrorKind::AmbiguousLine,
            Self::StreamingUnsupported | Self::MissingPath | Self::InvalidUtf8 { .. } => {
                ErrorKind::UnsupportedInput
            }
        }
    }
}
