/// End-to-end tests for config file discovery and CLI option merging.
///
/// These tests run the binary inside a temporary working directory so
/// auto-discovery only ever sees the config file the test wrote.
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn beans_fixture() -> String {
    fixtures_path().join("beans.json").display().to_string()
}

fn applications_fixture() -> String {
    fixtures_path().join("applications.json").display().to_string()
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

/// Write the auto-discovered config file into `dir`.
fn write_discovered_config(dir: &Path, content: &str) {
    write_config(&dir.join("sba-view.config.yml"), content);
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_format() {
        let dir = TempDir::new().unwrap();
        write_discovered_config(dir.path(), "format: markdown\n");

        let output = cargo_bin_cmd!("sba-view")
            .current_dir(dir.path())
            .args(["beans", "--file", &beans_fixture()])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("# Bean Dependency Graph"));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Auto-discovered config file"));
    }

    #[test]
    fn test_auto_discovery_applies_bean_patterns() {
        let dir = TempDir::new().unwrap();
        write_discovered_config(
            dir.path(),
            r#"
bean_patterns:
  - dBean
"#,
        );

        let output = cargo_bin_cmd!("sba-view")
            .current_dir(dir.path())
            .args(["beans", "--file", &beans_fixture()])
            .output()
            .unwrap();

        assert!(output.status.success());
        let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(view["selection"], serde_json::json!(["dBean"]));
        assert_eq!(view["summary"]["includedBeans"], 1);
    }

    #[test]
    fn test_auto_discovery_applies_group_by() {
        let dir = TempDir::new().unwrap();
        write_discovered_config(dir.path(), "group_by: group\n");

        let output = cargo_bin_cmd!("sba-view")
            .current_dir(dir.path())
            .args(["instances", "--file", &applications_fixture()])
            .output()
            .unwrap();

        assert!(output.status.success());
        let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(view["grouping"], "group");
        assert_eq!(view["groups"][0]["name"], "shop");
    }

    #[test]
    fn test_no_config_file_runs_normally() {
        let dir = TempDir::new().unwrap();

        let output = cargo_bin_cmd!("sba-view")
            .current_dir(dir.path())
            .args(["beans", "--file", &beans_fixture()])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        // Default format is JSON
        assert!(stdout.contains("\"elements\""));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!stderr.contains("Auto-discovered config file"));
    }
}

// ============================================================================
// Explicit --config Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, "format: markdown\ngroup_by: group\n");

        let output = cargo_bin_cmd!("sba-view")
            .args(["instances", "--file", &applications_fixture(), "--config"])
            .arg(&config_path)
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("grouped by group."));
    }

    #[test]
    fn test_explicit_config_not_found() {
        cargo_bin_cmd!("sba-view")
            .args([
                "beans",
                "--file",
                &beans_fixture(),
                "--config",
                "/nonexistent/sba-view.config.yml",
            ])
            .assert()
            .code(3);
    }

    #[test]
    fn test_invalid_config_value_is_application_error() {
        let dir = TempDir::new().unwrap();
        write_discovered_config(dir.path(), "format: xml\n");

        let output = cargo_bin_cmd!("sba-view")
            .current_dir(dir.path())
            .args(["beans", "--file", &beans_fixture()])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Invalid config: format"));
    }

    #[test]
    fn test_invalid_yaml_is_application_error() {
        let dir = TempDir::new().unwrap();
        write_discovered_config(dir.path(), "format: [unclosed\n");

        cargo_bin_cmd!("sba-view")
            .current_dir(dir.path())
            .args(["beans", "--file", &beans_fixture()])
            .assert()
            .code(3);
    }

    #[test]
    fn test_unknown_fields_warn_but_succeed() {
        let dir = TempDir::new().unwrap();
        write_discovered_config(dir.path(), "refresh_interval: 5\nformat: json\n");

        let output = cargo_bin_cmd!("sba-view")
            .current_dir(dir.path())
            .args(["beans", "--file", &beans_fixture()])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Unknown config field 'refresh_interval'"));
    }
}

// ============================================================================
// CLI Override Tests
// ============================================================================

mod cli_override_tests {
    use super::*;

    #[test]
    fn test_cli_format_overrides_config() {
        let dir = TempDir::new().unwrap();
        write_discovered_config(dir.path(), "format: markdown\n");

        let output = cargo_bin_cmd!("sba-view")
            .current_dir(dir.path())
            .args(["beans", "--file", &beans_fixture(), "-f", "json"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(serde_json::from_str::<serde_json::Value>(&stdout).is_ok());
    }

    #[test]
    fn test_cli_bean_patterns_override_config() {
        let dir = TempDir::new().unwrap();
        write_discovered_config(dir.path(), "bean_patterns:\n  - dBean\n");

        let output = cargo_bin_cmd!("sba-view")
            .current_dir(dir.path())
            .args(["beans", "--file", &beans_fixture(), "-b", "cBean"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(view["selection"], serde_json::json!(["cBean"]));
    }

    #[test]
    fn test_cli_file_wins_over_configured_server() {
        let dir = TempDir::new().unwrap();
        // Unreachable server; reading must not touch it
        write_discovered_config(dir.path(), "server_url: http://127.0.0.1:9\n");

        cargo_bin_cmd!("sba-view")
            .current_dir(dir.path())
            .args(["beans", "--file", &beans_fixture()])
            .assert()
            .code(0);
    }

    #[test]
    fn test_configured_server_is_used_without_source() {
        let dir = TempDir::new().unwrap();
        write_discovered_config(dir.path(), "server_url: http://127.0.0.1:9\n");

        // Source resolves to the configured server, which refuses the connection
        cargo_bin_cmd!("sba-view")
            .current_dir(dir.path())
            .arg("instances")
            .assert()
            .code(3);
    }
}
