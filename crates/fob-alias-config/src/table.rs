//! Normalized alias table.
//!
//! Alias keys and targets of the form `X/*` are reduced to the directory
//! prefix `X/`. Matching is a plain string-prefix test in table order: the
//! first entry whose prefix starts the specifier wins, even when a later
//! entry would be more specific.

use crate::config::PathsMap;
use crate::error::{ConfigError, Result};

/// One alias after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    /// The alias exactly as configured, e.g. `@app/*`.
    pub pattern: String,
    /// Normalized prefix matched against specifiers, e.g. `@app/`.
    pub prefix: String,
    /// Normalized first candidate target; later candidates are never consulted.
    /// `None` when the alias was configured with a null or empty target list.
    /// Such an entry still wins the prefix match: specifiers under it are left
    /// untouched instead of falling through to later aliases.
    pub target: Option<String>,
}

/// Ordered, immutable alias table with unique prefixes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

impl AliasTable {
    /// Build the table from a tsconfig `paths` map.
    ///
    /// Fails on an empty map or when two aliases normalize to the same prefix.
    pub fn from_paths(paths: &PathsMap) -> Result<Self> {
        if paths.is_empty() {
            return Err(ConfigError::EmptyPaths);
        }

        let mut entries: Vec<AliasEntry> = Vec::with_capacity(paths.len());
        for (pattern, targets) in paths {
            let prefix = strip_wildcard(pattern);
            if entries.iter().any(|entry| entry.prefix == prefix) {
                return Err(ConfigError::DuplicateAlias {
                    alias: pattern.clone(),
                    prefix,
                });
            }

            let target = targets
                .as_ref()
                .and_then(|candidates| candidates.first())
                .map(|first| strip_wildcard(first));

            entries.push(AliasEntry {
                pattern: pattern.clone(),
                prefix,
                target,
            });
        }

        Ok(Self { entries })
    }

    /// First entry whose prefix starts `specifier`, in table order.
    pub fn find(&self, specifier: &str) -> Option<&AliasEntry> {
        self.entries
            .iter()
            .find(|entry| specifier.starts_with(entry.prefix.as_str()))
    }

    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Turn a trailing `/*` into `/`; any other string is returned unchanged.
pub fn strip_wildcard(pattern: &str) -> String {
    match pattern.strip_suffix("/*") {
        Some(dir) => format!("{dir}/"),
        None => pattern.to_string(),
    }
}
