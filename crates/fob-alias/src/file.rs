//! Per-file input and output of the rewriter.

use std::path::{Path, PathBuf};

use crate::resolver::RewriteReport;

/// Contents of a file handed to the rewriter.
///
/// Only [`FileContents::Buffered`] content is ever rewritten. Streamed content
/// must be buffered by the caller first; the rewriter refuses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContents {
    Buffered(Vec<u8>),
    Streamed,
    Null,
}

impl FileContents {
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Buffered(bytes) => Some(bytes.as_slice()),
            Self::Streamed | Self::Null => None,
        }
    }
}

/// A file as delivered by the surrounding pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: Option<PathBuf>,
    pub contents: FileContents,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            path: Some(path.into()),
            contents: FileContents::Buffered(contents.into()),
        }
    }

    pub fn streamed(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            contents: FileContents::Streamed,
        }
    }

    pub fn null(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            contents: FileContents::Null,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// A file after rewriting, with the same path it arrived with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenFile {
    pub path: Option<PathBuf>,
    pub contents: FileContents,
    pub report: RewriteReport,
}

impl RewrittenFile {
    pub(crate) fn unchanged(file: SourceFile) -> Self {
        Self {
            path: file.path,
            contents: file.contents,
            report: RewriteReport::default(),
        }
    }

    /// Contents as UTF-8 text, when buffered and valid.
    pub fn text(&self) -> Option<&str> {
        self.contents
            .as_bytes()
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }
}
