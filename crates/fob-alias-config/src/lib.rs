//! # fob-alias-config
//!
//! Configuration for the fob path alias rewriter: the tsconfig-style
//! `baseUrl` + `paths` shapes, the normalized [`AliasTable`], and the
//! validation gate that turns user input into a [`ResolvedConfig`].

pub mod config;
pub mod error;
pub mod table;
pub mod validation;

// Re-export main types
pub use config::*;
pub use error::*;
pub use table::{strip_wildcard, AliasEntry, AliasTable};

pub use validation::{validate, ConfigValidator, SchemaValidator, DEFAULT_BASE_URL};
