//! # fob-alias
//!
//! Rewrites compiler path aliases (tsconfig `paths`, e.g. `@app/*`) inside
//! import specifiers into file-relative paths, so tools that know nothing
//! about alias configuration can consume the output.
//!
//! ## Overview
//!
//! ```text
//! SourceFile ──► scanner ──► ImportReference* ──► resolver ──► RewrittenFile
//!                                                    ▲
//!                              ResolvedConfig ───────┘
//!                      (validated once, shared read-only)
//! ```
//!
//! - **Scanner**: finds at most one `from "…"`, `import("…")` or
//!   `require("…")` specifier per line and rejects lines carrying more.
//! - **Resolver**: matches the specifier against the alias table (first
//!   entry wins, in table order) and re-expresses the target relative to the
//!   importing file.
//! - **Rewriter**: applies both to whole files, passing null content through
//!   and refusing streamed or non-UTF-8 content.
//!
//! The crate performs no file system I/O. Callers read and write files.
//!
//! ## Quick Start
//!
//! ```rust
//! use fob_alias::{AliasConfiguration, AliasRewriter, RewriterOptions, SourceFile};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AliasConfiguration::from_json_str(
//!     r#"{ "compilerOptions": { "baseUrl": ".", "paths": { "@app/*": ["app/*"] } } }"#,
//! )?;
//! let rewriter = AliasRewriter::new(Some(&config), RewriterOptions::with_cwd("/repo"))?;
//!
//! let file = SourceFile::new("src/pages/home.ts", "import { Button } from '@app/components/button';");
//! let out = rewriter.rewrite(file)?;
//!
//! assert_eq!(out.text(), Some("import { Button } from '../../app/components/button';"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod file;
pub mod paths;
pub mod resolver;
pub mod rewriter;
pub mod scanner;

pub use error::{ErrorKind, Result, RewriteError};
pub use file::{FileContents, RewrittenFile, SourceFile};
pub use resolver::{resolve, AliasResolver, ResolvedLines, RewriteReport, RewrittenImport};
pub use rewriter::{AliasRewriter, RewriterOptions};
pub use scanner::{count_references, find_specifier, scan, ImportReference};

// Configuration lives in its own crate; re-exported for convenience.
pub use fob_alias_config::{
    validate, AliasConfiguration, AliasEntry, AliasTable, CompilerOptions, ConfigError,
    ResolvedConfig,
};
