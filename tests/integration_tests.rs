//! Integration tests for the Packwise CLI

use std::process::{Command, Output};

fn packwise(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_packwise"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Test that the CLI shows help with the help flag
#[test]
fn test_cli_help() {
    let output = packwise(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("packwise"));
    assert!(stdout.contains("Smart packing assistant"));
    assert!(stdout.contains("generate"));
    assert!(stdout.contains("serve"));
}

/// Test that running without a subcommand fails with usage
#[test]
fn test_cli_requires_subcommand() {
    let output = packwise(&[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"));
}

#[test]
fn test_generate_prints_checklist() {
    let output = packwise(&[
        "generate",
        "--destination",
        "Mountain/Ski Resort",
        "--duration",
        "9",
        "--season",
        "winter",
        "--activity",
        "Hiking/Outdoor",
        "--packed",
        "passport,wallet",
    ]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Mountain/Ski Resort | 9 days | Hiking/Outdoor"));
    assert!(stdout.contains("[ ] Underwear (10)  [Essential]"));
    assert!(stdout.contains("[x] Passport  [Essential]"));
    assert!(stdout.contains("[ ] Winter coat  [Weather]"));
    assert!(stdout.contains("Progress: 2/"));
    assert!(stdout.contains("consider doing laundry"));
}

#[test]
fn test_generate_json_output() {
    let output = packwise(&[
        "generate",
        "--destination",
        "Tropical (Beach/Islands)",
        "--duration",
        "4",
        "--season",
        "summer",
        "--json",
    ]);

    assert!(output.status.success());
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let shorts = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["id"] == "shorts")
        .unwrap();
    assert_eq!(shorts["quantity"], 2);
    assert_eq!(body["trip"]["destination"], "Tropical (Beach/Islands)");
}

/// Test error handling for empty destination
#[test]
fn test_generate_empty_destination_error() {
    let output = packwise(&["generate", "--destination", "", "--duration", "3"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid input") || stderr.contains("Destination is required"));
}

#[test]
fn test_generate_unknown_packed_item_error() {
    let output = packwise(&["generate", "--destination", "Desert", "--packed", "gloves"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown item key 'gloves'"));
}

#[test]
fn test_generate_rejects_unknown_season() {
    let output = packwise(&["generate", "--destination", "Desert", "--season", "monsoon"]);
    assert!(!output.status.success());
}

#[test]
fn test_catalog_lists_unresolved_references() {
    let output = packwise(&["catalog"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Desert (desert)"));
    assert!(stdout.contains("Nightlife/Dining"));
    assert!(stdout.contains("Fall/Autumn (Cool)"));
    assert!(stdout.contains("destination 'Mountain/Ski Resort' -> warm_boots"));
}

/// Test custom config file option
#[test]
fn test_custom_config_option() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "[catalog]\nstrict_references = true\n").unwrap();

    let output = packwise(&["--config", config_path.to_str().unwrap(), "catalog"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unresolved item references"));
}

#[test]
fn test_custom_config_trip_limit() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "[trip]\nmax_duration_days = 60\n").unwrap();

    let config = config_path.to_str().unwrap();
    let default_limit = packwise(&["generate", "--destination", "Desert", "--duration", "45"]);
    let raised_limit = packwise(&[
        "--config",
        config,
        "generate",
        "--destination",
        "Desert",
        "--duration",
        "45",
    ]);

    assert!(!default_limit.status.success());
    assert!(raised_limit.status.success());
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let output = packwise(&["--config", missing.to_str().unwrap(), "catalog"]);
    assert!(!output.status.success());
}
