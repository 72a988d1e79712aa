//! Profile and command-line layering

use std::io::Write;

use clap::Parser;

use crate::{Args, load_config};

fn profile() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "lookup": {{ "api_url": "http://profile.test/words", "api_key": "profile-key" }},
            "ui": {{ "drawer_breakpoint": 900, "viewport_width": 1200 }},
            "log_format": "text"
        }}"#
    )
    .unwrap();
    file
}

#[test]
fn profile_values_apply_without_flags() {
    let file = profile();
    let path = file.path().to_str().unwrap();

    let args = Args::try_parse_from(["wordup", "--config", path]).unwrap();
    let config = load_config(&args).unwrap();

    assert_eq!(config.lookup.api_url, "http://profile.test/words");
    assert_eq!(config.lookup.api_key, "profile-key");
    assert_eq!(config.ui.drawer_breakpoint, 900);
    assert_eq!(config.ui.viewport_width, 1200);
    assert_eq!(config.log_format, "text");
}

#[test]
fn flags_override_profile() {
    let file = profile();
    let path = file.path().to_str().unwrap();

    let args = Args::try_parse_from([
        "wordup",
        "--config",
        path,
        "--api-url",
        "http://flag.test/words",
        "--width",
        "500",
        "--log-format",
        "json",
    ])
    .unwrap();
    let config = load_config(&args).unwrap();

    assert_eq!(config.lookup.api_url, "http://flag.test/words");
    assert_eq!(config.ui.viewport_width, 500);
    assert_eq!(config.log_format, "json");
    // Untouched by flags
    assert_eq!(config.lookup.api_key, "profile-key");
    assert_eq!(config.ui.drawer_breakpoint, 900);
}

#[test]
fn missing_profile_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let args = Args::try_parse_from(["wordup", "--config", path.to_str().unwrap()]).unwrap();
    let err = load_config(&args).unwrap_err();

    assert!(err.to_string().starts_with("Failed to open config file"));
}

#[test]
fn width_must_be_numeric() {
    assert!(Args::try_parse_from(["wordup", "--width", "wide"]).is_err());
}
