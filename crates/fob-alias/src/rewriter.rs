//! Per-file rewriting entry point.
//!
//! An [`AliasRewriter`] validates the alias configuration once and then
//! processes any number of files against that frozen configuration. Files are
//! independent of each other, so [`AliasRewriter::rewrite_all`] fans them out
//! over rayon's thread pool.

use std::path::{Path, PathBuf};

use fob_alias_config::{validate, AliasConfiguration, ResolvedConfig};
use rayon::prelude::*;

use crate::error::{Result, RewriteError};
use crate::file::{FileContents, RewrittenFile, SourceFile};
use crate::resolver::{AliasResolver, RewriteReport};
use crate::scanner::scan;

#[derive(Debug, Clone, Default)]
pub struct RewriterOptions {
    /// Directory relative file paths and `baseUrl` are anchored at.
    /// Defaults to the process working directory, captured once.
    pub cwd: Option<PathBuf>,
}

impl RewriterOptions {
    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(cwd.into()),
        }
    }
}

/// Rewrites aliased import specifiers into file-relative paths.
///
/// # Example
///
/// ```
/// use fob_alias::{AliasConfiguration, AliasRewriter, RewriterOptions};
/// use std::path::Path;
///
/// let config = AliasConfiguration::from_json_str(
///     r#"{ "compilerOptions": { "paths": { "@app/*": ["app/*"] } } }"#,
/// )
/// .unwrap();
/// let rewriter = AliasRewriter::new(Some(&config), RewriterOptions::with_cwd("/repo")).unwrap();
///
/// let out = rewriter
///     .rewrite_str(Path::new("src/pages/home.ts"), "import { Button } from '@app/components/button';")
///     .unwrap();
/// assert_eq!(out, "import { Button } from '../../app/components/button';");
/// ```
#[derive(Debug, Clone)]
pub struct AliasRewriter {
    config: ResolvedConfig,
    cwd: PathBuf,
}

impl AliasRewriter {
    /// Validate `config` and build a rewriter.
    ///
    /// # Errors
    ///
    /// Any configuration problem, or an unreadable working directory when
    /// `options.cwd` is not set.
    pub fn new(config: Option<&AliasConfiguration>, options: RewriterOptions) -> Result<Self> {
        let config = validate(config)?;
        let cwd = match options.cwd {
            Some(cwd) => cwd,
            None => std::env::current_dir()?,
        };

        tracing::debug!(
            "Alias rewriter ready: {} alias(es), baseUrl '{}', cwd {}",
            config.aliases.len(),
            config.base_url,
            cwd.display()
        );

        Ok(Self::from_resolved(config, cwd))
    }

    /// Build a rewriter from an already validated configuration.
    pub fn from_resolved(config: ResolvedConfig, cwd: impl Into<PathBuf>) -> Self {
        Self {
            config,
            cwd: cwd.into(),
        }
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn resolver(&self) -> AliasResolver<'_> {
        AliasResolver::new(&self.config, &self.cwd)
    }

    /// Rewrite one file.
    ///
    /// Null and empty files pass through untouched, as do files without any
    /// aliased import.
    ///
    /// # Errors
    ///
    /// - [`RewriteError::StreamingUnsupported`] for streamed contents
    /// - [`RewriteError::MissingPath`] for buffered contents without a path
    /// - [`RewriteError::InvalidUtf8`] for content that is not UTF-8 text
    /// - [`RewriteError::AmbiguousLine`] for a line with several imports
    pub fn rewrite(&self, file: SourceFile) -> Result<RewrittenFile> {
        if matches!(file.contents, FileContents::Streamed) {
            return Err(RewriteError::StreamingUnsupported);
        }

        let Some(bytes) = file.contents.as_bytes().filter(|bytes| !bytes.is_empty()) else {
            return Ok(RewrittenFile::unchanged(file));
        };

        let path = file
            .path
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(RewriteError::MissingPath)?;
        let text = std::str::from_utf8(bytes).map_err(|_| RewriteError::InvalidUtf8 {
            path: path.to_path_buf(),
        })?;

        let (rewritten, report) = self.rewrite_text(path, text)?;
        let contents = match rewritten {
            Some(rewritten) => FileContents::Buffered(rewritten.into_bytes()),
            None => file.contents,
        };

        Ok(RewrittenFile {
            path: file.path,
            contents,
            report,
        })
    }

    /// Rewrite in-memory text belonging to `path`.
    pub fn rewrite_str(&self, path: &Path, source: &str) -> Result<String> {
        let (rewritten, _) = self.rewrite_text(path, source)?;
        Ok(rewritten.unwrap_or_else(|| source.to_string()))
    }

    /// Rewrite a batch of files in parallel.
    ///
    /// Output order matches input order. Any error aborts the whole batch.
    pub fn rewrite_all(&self, files: Vec<SourceFile>) -> Result<Vec<RewrittenFile>> {
        files
            .into_par_iter()
            .map(|file| self.rewrite(file))
            .collect()
    }

    /// The rewritten text is `None` when no line changed.
    fn rewrite_text(&self, path: &Path, text: &str) -> Result<(Option<String>, RewriteReport)> {
        let lines: Vec<&str> = text.split('\n').collect();
        let references = scan(&lines, path)?;
        if references.is_empty() {
            return Ok((None, RewriteReport::new()));
        }

        let resolved = self.resolver().resolve_with_report(&lines, &references);
        if resolved.report.is_unchanged() {
            return Ok((None, resolved.report));
        }

        tracing::debug!(
            "Rewrote {} aliased import(s) in {}",
            resolved.report.rewritten.len(),
            path.display()
        );

        Ok((Some(resolved.lines.join("\n")), resolved.report))
    }
}
