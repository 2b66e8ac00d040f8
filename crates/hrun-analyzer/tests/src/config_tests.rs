use std::path::PathBuf;

use super::*;

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[test]
fn defaults_without_config_file() {
    let root = fixtures_root().join("workspace");
    let config = WorkspaceConfig::load(&root);

    assert_eq!(config.debugtalk_path, root.join("debugtalk.py"));
    assert_eq!(config.tests_path, root.join("tests"));
    assert_eq!(config.conda_env, "base");
}

#[test]
fn overrides_from_config_file() {
    let root = fixtures_root().join("configured");
    let config = WorkspaceConfig::load(&root);

    assert_eq!(config.debugtalk_path, root.join("scripts/debugtalk.py"));
    assert_eq!(config.tests_path, root.join("suites"));
    assert_eq!(config.conda_env, "qa");
}

#[test]
fn malformed_config_falls_back_to_defaults() {
    let root = fixtures_root().join("badconfig");
    let config = WorkspaceConfig::load(&root);

    assert_eq!(config.debugtalk_path, root.join("debugtalk.py"));
    assert_eq!(config.conda_env, "base");
}

#[test]
fn nonexistent_override_is_rejected() {
    let root = fixtures_root().join("missingref");
    let config = WorkspaceConfig::load(&root);

    // The configured path does not exist, so the default is kept.
    assert_eq!(config.debugtalk_path, root.join("debugtalk.py"));
}
