//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the catalog library.

use assert_cmd::Command;
use predicates::prelude::*;

/// Create a command for the sentra binary
fn cli_cmd() -> Command {
    Command::cargo_bin("sentra").expect("Failed to find sentra binary")
}

// ============================================================================
// Categories Command Tests
// ============================================================================

#[test]
fn test_categories_lists_all_three() {
    cli_cmd()
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sentra Route"))
        .stdout(predicate::str::contains("Sentra Shield"))
        .stdout(predicate::str::contains("Sentra Insight"));
}

#[test]
fn test_categories_shows_slugs_and_counts() {
    cli_cmd()
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("(sentra-shield)"))
        .stdout(predicate::str::contains("Products: 3"));
}

// ============================================================================
// Products Command Tests
// ============================================================================

#[test]
fn test_products_lists_category_members() {
    cli_cmd()
        .args(["products", "sentra-shield"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sentra Shield Blocker"))
        .stdout(predicate::str::contains("Sentra Shield Guardian"))
        .stdout(predicate::str::contains("Sentra GeoLock"));
}

#[test]
fn test_products_shows_badges() {
    cli_cmd()
        .args(["products", "sentra-route"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Flagship]"))
        .stdout(predicate::str::contains("[Covert]"));
}

#[test]
fn test_products_unknown_category_fails() {
    cli_cmd()
        .args(["products", "sentra-nonsense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category not found: sentra-nonsense"));
}

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_show_prints_detail_block() {
    cli_cmd()
        .args(["show", "sentra-geolock"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sentra GeoLock"))
        .stdout(predicate::str::contains("Category: Sentra Shield"))
        .stdout(predicate::str::contains("Badge: Perimeter"))
        .stdout(predicate::str::contains("Specifications:"))
        .stdout(predicate::str::contains("Use cases:"))
        .stdout(predicate::str::contains("Compatible with:"));
}

#[test]
fn test_show_unknown_product_fails() {
    cli_cmd()
        .args(["show", "sentra-phantom"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product not found: sentra-phantom"));
}

// ============================================================================
// Search Command Tests
// ============================================================================

#[test]
fn test_search_shield_perimeter_returns_geolock_only() {
    cli_cmd()
        .args(["search", "perimeter", "--category", "sentra-shield"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 match(es):"))
        .stdout(predicate::str::contains("Sentra GeoLock"))
        .stdout(predicate::str::contains("Sentra Shield Blocker").not());
}

#[test]
fn test_search_is_case_insensitive() {
    cli_cmd()
        .args(["search", "PERIMETER", "--category", "sentra-shield"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sentra GeoLock"));
}

#[test]
fn test_search_type_facet_restricts() {
    cli_cmd()
        .args(["search", "sentra", "--type", "Flagship"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 match(es):"))
        .stdout(predicate::str::contains("Sentra Route X1"));
}

#[test]
fn test_search_compatibility_facet() {
    cli_cmd()
        .args([
            "search",
            "sentra",
            "--compatible-with",
            "Sentra GeoLock",
            "--category",
            "sentra-route",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sentra Route Tactical"));
}

#[test]
fn test_search_no_hits_reports_cleanly() {
    cli_cmd()
        .args(["search", "submarine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products matched."));
}

#[test]
fn test_search_json_output_parses() {
    let output = cli_cmd()
        .args(["search", "perimeter", "--category", "sentra-shield", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value =
        serde_json::from_slice(&output).expect("search --json should emit valid JSON");
    let results = parsed.as_array().expect("top level is an array");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["slug"], "sentra-geolock");
    assert_eq!(results[0]["category"], "sentra-shield");
    assert_eq!(results[0]["product"]["name"], "Sentra GeoLock");
}

#[test]
fn test_search_unknown_category_fails() {
    cli_cmd()
        .args(["search", "radar", "--category", "sentra-nonsense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category not found"));
}
