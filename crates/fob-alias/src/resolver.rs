//! Alias resolution and line rewriting.
//!
//! For a specifier such as `@app/components/button` the resolver:
//!
//! 1. picks the first alias (in table order) whose normalized prefix starts
//!    the specifier; longer, more specific aliases later in the table are
//!    not considered
//! 2. swaps that prefix for the alias' first target, giving a path relative
//!    to the base directory
//! 3. re-expresses that path relative to the importing file's directory,
//!    with `/` separators and a leading `./` when it would otherwise look
//!    like a package name
//!
//! Only the specifier bytes of a touched line change; everything else on the
//! line, and every other line, is returned as-is.

use std::borrow::Cow;
use std::ops::Range;
use std::path::Path;

use fob_alias_config::ResolvedConfig;

use crate::paths::{absolutize, relative_path};
use crate::scanner::ImportReference;

/// One specifier substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenImport {
    /// Zero-based line index.
    pub line: usize,
    pub from: String,
    pub to: String,
}

/// Report of the substitutions performed on one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
    pub rewritten: Vec<RewrittenImport>,
    /// References left untouched because no alias (or no alias target) applied.
    pub unresolved: usize,
}

impl RewriteReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unchanged(&self) -> bool {
        self.rewritten.is_empty()
    }
}

/// Lines after resolution together with what was changed.
#[derive(Debug, Clone)]
pub struct ResolvedLines<'l> {
    pub lines: Vec<Cow<'l, str>>,
    pub report: RewriteReport,
}

/// Resolves aliased specifiers against a validated configuration.
///
/// Borrowing only immutable state, a resolver can be shared freely across
/// threads.
#[derive(Debug, Clone, Copy)]
pub struct AliasResolver<'a> {
    config: &'a ResolvedConfig,
    cwd: &'a Path,
}

impl<'a> AliasResolver<'a> {
    /// `cwd` anchors relative importer paths and the base directory; it
    /// should be absolute.
    pub fn new(config: &'a ResolvedConfig, cwd: &'a Path) -> Self {
        Self { config, cwd }
    }

    /// Resolve a single specifier imported from `importer`.
    ///
    /// Returns `None` when no alias applies, leaving the specifier alone.
    ///
    /// # Example
    ///
    /// ```
    /// use fob_alias::{validate, AliasResolver, CompilerOptions};
    /// use std::path::Path;
    ///
    /// let config = validate(Some(&CompilerOptions::new()
    ///     .with_alias("@app/*", ["app/*"])
    ///     .into()))
    /// .unwrap();
    /// let resolver = AliasResolver::new(&config, Path::new("/repo"));
    ///
    /// assert_eq!(
    ///     resolver.resolve_specifier(Path::new("src/pages/home.ts"), "@app/components/button"),
    ///     Some("../../app/components/button".to_string())
    /// );
    /// assert_eq!(resolver.resolve_specifier(Path::new("src/pages/home.ts"), "lodash"), None);
    /// ```
    pub fn resolve_specifier(&self, importer: &Path, specifier: &str) -> Option<String> {
        let alias = self.config.aliases.find(specifier)?;
        let target = alias.target.as_deref()?;

        let resolved = format!("{target}{}", &specifier[alias.prefix.len()..]);

        let importer = absolutize(importer, self.cwd);
        let importer_dir = importer.parent().unwrap_or(&importer);
        let base_dir = absolutize(Path::new(&self.config.base_url), self.cwd);
        let destination = absolutize(
            &base_dir.join(resolved.trim_start_matches('/')),
            self.cwd,
        );

        let relative = relative_path(importer_dir, &destination).replace('\\', "/");
        if relative.starts_with('.') {
            Some(relative)
        } else {
            Some(format!("./{relative}"))
        }
    }

    /// Rewrite the lines touched by `references`, recording each substitution.
    pub fn resolve_with_report<'l>(
        &self,
        lines: &[&'l str],
        references: &[ImportReference],
    ) -> ResolvedLines<'l> {
        let mut output: Vec<Cow<'l, str>> =
            lines.iter().map(|line| Cow::Borrowed(*line)).collect();
        let mut report = RewriteReport::new();

        for reference in references {
            let Some(line) = lines.get(reference.index) else {
                continue;
            };

            let Some(replacement) = self.resolve_specifier(&reference.path, &reference.specifier)
            else {
                report.unresolved += 1;
                continue;
            };

            tracing::trace!(
                "{}:{}: '{}' -> '{}'",
                reference.path.display(),
                reference.index + 1,
                reference.specifier,
                replacement
            );

            output[reference.index] = Cow::Owned(splice(line, &reference.span, &replacement));
            report.rewritten.push(RewrittenImport {
                line: reference.index,
                from: reference.specifier.clone(),
                to: replacement,
            });
        }

        ResolvedLines {
            lines: output,
            report,
        }
    }

    /// Rewrite the lines touched by `references`.
    pub fn resolve<'l>(
        &self,
        lines: &[&'l str],
        references: &[ImportReference],
    ) -> Vec<Cow<'l, str>> {
        self.resolve_with_report(lines, references).lines
    }
}

/// Resolve `references` within `lines` using `config`, anchored at `cwd`.
pub fn resolve<'l>(
    lines: &[&'l str],
    references: &[ImportReference],
    config: &ResolvedConfig,
    cwd: &Path,
) -> Vec<Cow<'l, str>> {
    AliasResolver::new(config, cwd).resolve(lines, references)
}

fn splice(line: &str, span: &Range<usize>, replacement: &str) -> String {
    let mut out = String::with_capacity(line.len() - span.len() + replacement.len());
    out.push_str(&line[..span.start]);
    out.push_str(replacement);
    out.push_str(&line[span.end..]);
    out
}
