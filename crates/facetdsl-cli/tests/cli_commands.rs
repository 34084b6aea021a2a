//! Integration tests for the facetdsl binary
//!
//! Every test points FACETDSL_CONFIG_DIR at a temp dir so the user's own
//! config file never leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

const PUBLICATION_URL: &str = "https://app.dimensions.ai/discover/publication?and_facet_year=2024&or_facet_for=1101&or_facet_for=1103";

fn facetdsl(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("facetdsl").unwrap();
    cmd.env("FACETDSL_CONFIG_DIR", temp.path().join("config"))
        .env_remove("FACETDSL_REQUIRED_HOST")
        .env_remove("FACETDSL_DEDUPE_OR_VALUES")
        .env_remove("FACETDSL_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// convert
// ============================================================================

#[test]
#[serial]
fn test_convert_prints_query() {
    let temp = TempDir::new().unwrap();

    facetdsl(&temp)
        .args(["convert", PUBLICATION_URL])
        .assert()
        .success()
        .stdout(
            "search publications\nwhere year = 2024 and category_for in [\"1101\",\"1103\"]\nreturn publications\n",
        );
}

#[test]
#[serial]
fn test_convert_warns_on_unsupported_facets() {
    let temp = TempDir::new().unwrap();

    facetdsl(&temp)
        .args([
            "convert",
            "https://app.dimensions.ai/discover/clinical_trial?and_facet_research_org_country=Australia&and_facet_phase=3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("where phase = \"3\""))
        .stdout(predicate::str::contains("Australia").not())
        .stderr(predicate::str::contains(
            "not supported in the clinical_trials API",
        ))
        .stderr(predicate::str::contains("\"research_org_country\""));
}

#[test]
#[serial]
fn test_convert_json_output() {
    let temp = TempDir::new().unwrap();

    let output = facetdsl(&temp)
        .args(["--format", "json", "convert", PUBLICATION_URL, "-r", "category_for"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["entity_type"], "publications");
    assert_eq!(json["return_facet"], "category_for");
    assert_eq!(json["unsupported_facets"], serde_json::json!([]));
}

#[test]
#[serial]
fn test_convert_rejects_invalid_return_facet() {
    let temp = TempDir::new().unwrap();

    facetdsl(&temp)
        .args([
            "convert",
            "https://app.dimensions.ai/discover/grant",
            "--return",
            "assignee_cities",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be returned for grants"));
}

#[test]
#[serial]
fn test_convert_rejects_malformed_url() {
    let temp = TempDir::new().unwrap();

    facetdsl(&temp)
        .args(["convert", "app.dimensions.ai/discover/grant"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed URL"));
}

#[test]
#[serial]
fn test_convert_host_check_and_override() {
    let temp = TempDir::new().unwrap();
    let url = "https://example.org/discover/grant?and_facet_year=2020";

    facetdsl(&temp)
        .args(["convert", url])
        .assert()
        .failure()
        .stderr(predicate::str::contains("app.dimensions.ai"));

    facetdsl(&temp)
        .args(["convert", url, "--any-host"])
        .assert()
        .success()
        .stdout(predicate::str::contains("where start_year = 2020"));
}

#[test]
#[serial]
fn test_config_file_disables_host_check() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("custom.toml");
    fs::write(&config_path, "[translation]\nrequired_host = \"\"\n").unwrap();

    facetdsl(&temp)
        .arg("--config")
        .arg(&config_path)
        .args(["convert", "https://example.org/discover/dataset"])
        .assert()
        .success()
        .stdout("search datasets\nreturn datasets\n");
}

#[test]
#[serial]
fn test_env_enables_dedupe() {
    let temp = TempDir::new().unwrap();

    facetdsl(&temp)
        .env("FACETDSL_DEDUPE_OR_VALUES", "true")
        .args([
            "convert",
            "https://app.dimensions.ai/discover/publication?or_facet_for=1101&or_facet_for=1101",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("category_for = \"1101\""));
}

#[test]
#[serial]
fn test_invalid_env_value_is_reported() {
    let temp = TempDir::new().unwrap();

    facetdsl(&temp)
        .env("FACETDSL_FORMAT", "yaml")
        .args(["convert", "https://app.dimensions.ai/discover/grant"])
        .assert()
        .success()
        .stdout("search grants\nreturn grants\n")
        .stderr(predicate::str::contains("ignoring FACETDSL_FORMAT"))
        .stderr(predicate::str::contains("expected text or json"));
}

// ============================================================================
// Lookup commands
// ============================================================================

#[test]
#[serial]
fn test_detect() {
    let temp = TempDir::new().unwrap();

    facetdsl(&temp)
        .args(["detect", "https://app.dimensions.ai/discover/policy_document?x=1"])
        .assert()
        .success()
        .stdout("policy_documents\n");
}

#[test]
#[serial]
fn test_facets_lists_return_facets() {
    let temp = TempDir::new().unwrap();

    facetdsl(&temp)
        .args(["facets", "patents"])
        .assert()
        .success()
        .stdout("patents\nassignee_cities\ncategory_bra\ncategory_for\n");
}

#[test]
#[serial]
fn test_facets_unknown_entity() {
    let temp = TempDir::new().unwrap();

    facetdsl(&temp)
        .args(["facets", "books"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown entity type 'books'"));
}

#[test]
#[serial]
fn test_catalog_json() {
    let temp = TempDir::new().unwrap();

    let output = facetdsl(&temp)
        .args(["-f", "json", "catalog", "clinical_trials"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    let city = rows
        .iter()
        .find(|r| r["facet"] == "research_org_city")
        .unwrap();
    assert!(city["field"].is_null());
}

#[test]
#[serial]
fn test_entities() {
    let temp = TempDir::new().unwrap();

    facetdsl(&temp)
        .arg("entities")
        .assert()
        .success()
        .stdout("publications\ngrants\ndatasets\npatents\nclinical_trials\npolicy_documents\n");
}

// ============================================================================
// config
// ============================================================================

#[test]
#[serial]
fn test_config_init_creates_file() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config").join("config.toml");

    facetdsl(&temp)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config file at"));

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[translation]"));
    assert!(content.contains("required_host = \"app.dimensions.ai\""));
}

#[test]
#[serial]
fn test_config_init_requires_force_if_exists() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("existing.toml");
    fs::write(&config_path, "existing content").unwrap();

    facetdsl(&temp)
        .args(["config", "init", "--path"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file already exists"))
        .stdout(predicate::str::contains("--force"));
    assert_eq!(fs::read_to_string(&config_path).unwrap(), "existing content");

    facetdsl(&temp)
        .args(["config", "init", "--force", "--path"])
        .arg(&config_path)
        .assert()
        .success();
    assert!(fs::read_to_string(&config_path)
        .unwrap()
        .contains("facetdsl Configuration"));
}

#[test]
#[serial]
fn test_config_show_reflects_env() {
    let temp = TempDir::new().unwrap();

    facetdsl(&temp)
        .env("FACETDSL_FORMAT", "json")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("format = \"json\""))
        .stdout(predicate::str::contains("required_host = \"app.dimensions.ai\""));
}

#[test]
#[serial]
fn test_broken_config_can_be_replaced() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("config");
    let config_path = config_dir.join("config.toml");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(&config_path, "[translation\n").unwrap();

    facetdsl(&temp)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));

    facetdsl(&temp)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    facetdsl(&temp)
        .args(["config", "init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config file at"));

    facetdsl(&temp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("required_host = \"app.dimensions.ai\""));
}
