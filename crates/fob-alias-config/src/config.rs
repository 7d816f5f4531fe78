//! Configuration shapes accepted by the alias rewriter.
//!
//! Two layouts are understood, mirroring how TypeScript tooling passes
//! path mappings around:
//!
//! - a whole tsconfig document: `{ "compilerOptions": { "baseUrl": "...", "paths": { ... } } }`
//! - the bare compiler options: `{ "baseUrl": "...", "paths": { ... } }`
//!
//! Neither shape is trusted until it has gone through [`crate::validate`],
//! which produces the immutable [`ResolvedConfig`] used during rewriting.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::table::AliasTable;

/// Alias table as written in a tsconfig: alias pattern -> candidate targets.
///
/// Document order is preserved because alias precedence depends on it.
pub type PathsMap = IndexMap<String, Option<Vec<String>>>;

/// The subset of TypeScript `compilerOptions` the rewriter reads.
///
/// Any other compiler option present in the document is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<PathsMap>,
}

impl CompilerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Append an alias with its candidate targets, keeping insertion order.
    pub fn with_alias<I, S>(mut self, alias: impl Into<String>, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths
            .get_or_insert_with(IndexMap::new)
            .insert(alias.into(), Some(targets.into_iter().map(Into::into).collect()));
        self
    }
}

/// Either a full tsconfig document or a flat `compilerOptions` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AliasConfiguration {
    TsConfig {
        #[serde(rename = "compilerOptions")]
        compiler_options: CompilerOptions,
    },
    CompilerOptions(CompilerOptions),
}

impl AliasConfiguration {
    /// Parse a JSON document in either supported shape.
    ///
    /// # Example
    ///
    /// ```
    /// use fob_alias_config::AliasConfiguration;
    ///
    /// let config = AliasConfiguration::from_json_str(
    ///     r#"{ "compilerOptions": { "baseUrl": ".", "paths": { "@app/*": ["app/*"] } } }"#,
    /// )
    /// .unwrap();
    /// assert_eq!(config.compiler_options().base_url.as_deref(), Some("."));
    /// ```
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Create from serde_json::Value (for programmatic config)
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// The compiler options carried by this configuration, whichever shape it has.
    pub fn compiler_options(&self) -> &CompilerOptions {
        match self {
            Self::TsConfig { compiler_options } => compiler_options,
            Self::CompilerOptions(options) => options,
        }
    }
}

impl From<CompilerOptions> for AliasConfiguration {
    fn from(options: CompilerOptions) -> Self {
        Self::CompilerOptions(options)
    }
}

/// Validated configuration shared read-only by every file of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Directory alias targets are interpreted against; never empty.
    pub base_url: String,
    pub aliases: AliasTable,
}
