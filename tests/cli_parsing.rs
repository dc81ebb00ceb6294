//! Tests for CLI option parsing.

use clap::Parser;
use dns_sweep::config::{Config, LogFormat, LogLevel, OutputFormat};

#[test]
fn test_cli_target_only() {
    let config = Config::try_parse_from(["dns_sweep", "user@example.org"]).expect("Should parse");
    assert_eq!(config.target.as_deref(), Some("user@example.org"));
    assert_eq!(config.format, OutputFormat::Text);
    assert!(!config.parallel);
    assert!(!config.no_color);
    assert_eq!(config.timeout_seconds, None);
    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::from(LogLevel::Warn)
    );
    assert!(matches!(config.log_format, LogFormat::Plain));
}

#[test]
fn test_cli_target_is_optional() {
    // Missing target is handled by the binary, not by clap
    let config = Config::try_parse_from(["dns_sweep"]).expect("Should parse without target");
    assert!(config.target.is_none());
}

#[test]
fn test_cli_all_options() {
    let config = Config::try_parse_from([
        "dns_sweep",
        "google.com",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--format",
        "json",
        "--parallel",
        "--timeout-seconds",
        "4",
        "--no-color",
    ])
    .expect("Should parse all options");

    assert_eq!(config.target.as_deref(), Some("google.com"));
    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::Debug
    );
    assert!(matches!(config.log_format, LogFormat::Json));
    assert_eq!(config.format, OutputFormat::Json);
    assert!(config.parallel);
    assert_eq!(config.timeout_seconds, Some(4));
    assert!(config.no_color);
}

#[test]
fn test_cli_invalid_format_rejected() {
    let result = Config::try_parse_from(["dns_sweep", "google.com", "--format", "xml"]);
    assert!(result.is_err(), "Unknown report format should be rejected");
}

#[test]
fn test_cli_invalid_timeout_rejected() {
    let result = Config::try_parse_from(["dns_sweep", "google.com", "--timeout-seconds", "soon"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_extra_positionals_are_ignored() {
    let config = Config::try_parse_from(["dns_sweep", "google.com", "example.org", "more"])
        .expect("Extra arguments should parse");
    assert_eq!(config.target.as_deref(), Some("google.com"));
    assert_eq!(config.extra_args, ["example.org", "more"]);
}

#[test]
fn test_cli_hyphen_target_reaches_validation() {
    let config = Config::try_parse_from(["dns_sweep", "-bad.com"]).expect("Should parse");
    assert_eq!(config.target.as_deref(), Some("-bad.com"));
}

#[test]
fn test_cli_flags_after_target_still_parse() {
    let config = Config::try_parse_from(["dns_sweep", "google.com", "extra", "--parallel"])
        .expect("Should parse");
    assert!(config.parallel);
    assert_eq!(config.extra_args, ["extra"]);
}

#[test]
fn test_cli_unknown_flag_rejected() {
    let result = Config::try_parse_from(["dns_sweep", "google.com", "--bogus"]);
    assert!(result.is_err());
}
