//! Pluggable configuration validation.
//!
//! Validation runs once per run, before any file is touched, and every
//! failure is fatal: rewriting with a half-understood alias table would
//! produce output that looks correct but is not.

use crate::config::{AliasConfiguration, ResolvedConfig};
use crate::error::{ConfigError, Result};
use crate::table::AliasTable;

/// Base directory used when `baseUrl` is absent, empty or `.`.
pub const DEFAULT_BASE_URL: &str = "./";

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    /// Validate a configuration and turn it into the immutable form used for rewriting.
    fn validate(&self, config: Option<&AliasConfiguration>) -> Result<ResolvedConfig>;
}

/// Schema-only validation (no filesystem checks)
///
/// Alias targets are not required to exist on disk.
///
/// # Example
///
/// ```
/// use fob_alias_config::{AliasConfiguration, CompilerOptions, ConfigValidator, SchemaValidator};
///
/// let config: AliasConfiguration = CompilerOptions::new()
///     .with_alias("@app/*", ["app/*"])
///     .into();
///
/// let resolved = SchemaValidator.validate(Some(&config)).unwrap();
/// assert_eq!(resolved.base_url, "./");
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: Option<&AliasConfiguration>) -> Result<ResolvedConfig> {
        let config = config.ok_or(ConfigError::MissingConfiguration)?;
        let options = config.compiler_options();

        let paths = options.paths.as_ref().ok_or(ConfigError::MissingPaths)?;
        let aliases = AliasTable::from_paths(paths)?;

        let base_url = match options.base_url.as_deref() {
            None | Some("") | Some(".") => DEFAULT_BASE_URL.to_string(),
            Some(other) => other.to_string(),
        };

        tracing::debug!(
            "Validated alias configuration: {} alias(es), baseUrl '{}'",
            aliases.len(),
            base_url
        );

        Ok(ResolvedConfig { base_url, aliases })
    }
}

/// Convenience function for schema validation
///
/// # Example
///
/// ```
/// use fob_alias_config::{validate, ConfigError};
///
/// assert!(matches!(validate(None), Err(ConfigError::MissingConfiguration)));
/// ```
pub fn validate(config: Option<&AliasConfiguration>) -> Result<ResolvedConfig> {
    SchemaValidator.validate(config)
}
