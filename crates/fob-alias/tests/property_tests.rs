//! Property-based tests for the alias rewriter.
//!
//! These verify locality (lines without imports never change), idempotence
//! (rewritten output is a fixed point) and the shape of resolved specifiers
//! across generated inputs.

use std::path::Path;

use fob_alias::{
    AliasConfiguration, AliasRewriter, CompilerOptions, RewriterOptions, count_references,
};
use proptest::prelude::*;

fn rewriter() -> AliasRewriter {
    let config = AliasConfiguration::from(
        CompilerOptions::new()
            .with_base_url("src")
            .with_alias("@app/*", ["app/*"])
            .with_alias("@shared/*", ["../shared/*"]),
    );
    AliasRewriter::new(Some(&config), RewriterOptions::with_cwd("/workspace/project"))
        .expect("valid config")
}

/// Lines of ordinary code that never contain an import reference.
fn plain_line() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_ =;.,(){}@/+*-]{0,60}"
        .prop_filter("no import references", |line| count_references(line) == 0)
}

/// Importer paths relative to the working directory.
fn importer() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,8}", 1..=4)
        .prop_map(|parts| format!("src/{}.ts", parts.join("/")))
}

/// Specifiers under one of the configured aliases.
fn aliased_specifier() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["@app/", "@shared/"]),
        prop::collection::vec("[a-z][a-z0-9-]{0,8}", 1..=3),
    )
        .prop_map(|(alias, parts)| format!("{alias}{}", parts.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: text without import references is returned unchanged.
    #[test]
    fn prop_plain_lines_are_untouched(
        lines in prop::collection::vec(plain_line(), 0..20),
        path in importer(),
    ) {
        let source = lines.join("\n");
        let out = rewriter().rewrite_str(Path::new(&path), &source).unwrap();
        prop_assert_eq!(out, source);
    }

    /// Property: resolving already-resolved output is a no-op.
    #[test]
    fn prop_rewrite_is_idempotent(
        specifiers in prop::collection::vec(aliased_specifier(), 1..10),
        path in importer(),
    ) {
        let rewriter = rewriter();
        let source = specifiers
            .iter()
            .enumerate()
            .map(|(i, spec)| format!("import m{i} from '{spec}';"))
            .collect::<Vec<_>>()
            .join("\n");

        let once = rewriter.rewrite_str(Path::new(&path), &source).unwrap();
        let twice = rewriter.rewrite_str(Path::new(&path), &once).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Property: resolved specifiers are relative, slash-separated and never bare.
    #[test]
    fn prop_resolved_specifiers_are_relative(
        spec in aliased_specifier(),
        path in importer(),
    ) {
        let rewriter = rewriter();
        let resolved = rewriter
            .resolver()
            .resolve_specifier(Path::new(&path), &spec)
            .expect("aliased specifier resolves");

        prop_assert!(resolved.starts_with("./") || resolved.starts_with("../"));
        prop_assert!(!resolved.contains('\\'));
        prop_assert!(!resolved.contains("/./"));
    }

    /// Property: the line count of a file never changes.
    #[test]
    fn prop_line_count_is_preserved(
        lines in prop::collection::vec(
            prop_oneof![
                plain_line(),
                aliased_specifier().prop_map(|spec| format!("const m = require(\"{spec}\");")),
            ],
            0..20,
        ),
        path in importer(),
    ) {
        let source = lines.join("\n");
        let out = rewriter().rewrite_str(Path::new(&path), &source).unwrap();
        prop_assert_eq!(out.split('\n').count(), source.split('\n').count());
    }
}
