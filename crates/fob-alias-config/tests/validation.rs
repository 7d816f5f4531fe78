//! Tests for configuration validation.

use fob_alias_config::{validate, AliasConfiguration, ConfigError, DEFAULT_BASE_URL};
use serde_json::json;

#[test]
fn validate_accepts_tsconfig_document() {
    let config = AliasConfiguration::from_json_str(
        r#"{
            "compilerOptions": {
                "baseUrl": "src",
                "paths": {
                    "@app/*": ["app/*"],
                    "@shared/*": ["../shared/*", "vendor/shared/*"]
                }
            },
            "include": ["src"]
        }"#,
    )
    .expect("parse tsconfig");

    let resolved = validate(Some(&config)).expect("valid config");
    assert_eq!(resolved.base_url, "src");

    let prefixes: Vec<_> = resolved
        .aliases
        .entries()
        .iter()
        .map(|e| (e.prefix.as_str(), e.target.as_deref()))
        .collect();
    assert_eq!(
        prefixes,
        vec![("@app/", Some("app/")), ("@shared/", Some("../shared/"))]
    );
}

#[test]
fn validate_accepts_flat_compiler_options() {
    let config = AliasConfiguration::from_value(json!({
        "paths": { "~/*": ["./*"] }
    }))
    .expect("parse options");

    let resolved = validate(Some(&config)).expect("valid config");
    assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
    assert_eq!(resolved.aliases.entries()[0].prefix, "~/");
    assert_eq!(resolved.aliases.entries()[0].target.as_deref(), Some("./"));
}

#[test]
fn validate_catches_missing_configuration() {
    match validate(None) {
        Err(ConfigError::MissingConfiguration) => {}
        other => panic!("expected MissingConfiguration, got {other:?}"),
    }
}

#[test]
fn validate_catches_missing_paths_in_tsconfig() {
    let config = AliasConfiguration::from_value(json!({
        "compilerOptions": { "baseUrl": "." }
    }))
    .expect("parse tsconfig");

    assert!(matches!(
        validate(Some(&config)),
        Err(ConfigError::MissingPaths)
    ));
}

#[test]
fn validate_catches_null_paths() {
    let config = AliasConfiguration::from_value(json!({ "baseUrl": ".", "paths": null }))
        .expect("parse options");

    assert!(matches!(
        validate(Some(&config)),
        Err(ConfigError::MissingPaths)
    ));
}

#[test]
fn validate_catches_empty_paths() {
    let config =
        AliasConfiguration::from_value(json!({ "paths": {} })).expect("parse options");

    assert!(matches!(
        validate(Some(&config)),
        Err(ConfigError::EmptyPaths)
    ));
}

#[test]
fn error_messages_name_the_precondition() {
    assert!(ConfigError::MissingPaths.to_string().contains("\"paths\""));
    assert!(ConfigError::MissingConfiguration
        .to_string()
        .contains("\"configuration\""));
}
