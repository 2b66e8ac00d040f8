//! Workspace configuration from `lsp-config.yaml`.
//!
//! The file lives at the workspace root and is entirely optional. Every
//! field has a default; a missing or unparsable file falls back to defaults
//! without failing initialization.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

const CONFIG_FILE_NAME: &str = "lsp-config.yaml";
const DEFAULT_DEBUGTALK_PATH: &str = "debugtalk.py";
const DEFAULT_TESTS_PATH: &str = "tests";
const DEFAULT_CONDA_ENV: &str = "base";

/// Effective workspace configuration, all paths absolute.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceConfig {
    pub workspace_root: PathBuf,
    /// The companion script seeding the function index.
    pub debugtalk_path: PathBuf,
    /// Working directory for test invocations.
    pub tests_path: PathBuf,
    /// Conda environment used to run tests.
    pub conda_env: String,
}

/// Raw, partial shape of `lsp-config.yaml`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFilePatch {
    debugtalk_path: Option<String>,
    conda_env: Option<String>,
    tests_path: Option<String>,
}

impl WorkspaceConfig {
    /// Load the configuration for a workspace root.
    ///
    /// Relative-path overrides are only accepted when the target exists, so
    /// a typo in the config file degrades to the default rather than a dead
    /// companion path.
    pub fn load(workspace_root: &Path) -> Self {
        let mut debugtalk_path = DEFAULT_DEBUGTALK_PATH.to_string();
        let mut tests_path = DEFAULT_TESTS_PATH.to_string();
        let mut conda_env = DEFAULT_CONDA_ENV.to_string();

        let config_file = workspace_root.join(CONFIG_FILE_NAME);
        match std::fs::read_to_string(&config_file) {
            Ok(content) => match serde_yaml::from_str::<ConfigFilePatch>(&content) {
                Ok(patch) => {
                    info!("Loaded {}", config_file.display());
                    if let Some(value) = patch.debugtalk_path {
                        let value = value.trim().to_string();
                        if workspace_root.join(&value).exists() {
                            debugtalk_path = value;
                        } else {
                            warn!("Configured debugtalkPath does not exist: {value}");
                        }
                    }
                    if let Some(value) = patch.tests_path {
                        let value = value.trim().to_string();
                        if workspace_root.join(&value).exists() {
                            tests_path = value;
                        } else {
                            warn!("Configured testsPath does not exist: {value}");
                        }
                    }
                    if let Some(value) = patch.conda_env {
                        conda_env = value.trim().to_string();
                    }
                },
                Err(err) => {
                    warn!("Failed to parse {}: {err}; using defaults", config_file.display());
                },
            },
            Err(_) => {
                info!("No {CONFIG_FILE_NAME} in workspace; using defaults");
            },
        }

        Self {
            workspace_root: workspace_root.to_path_buf(),
            debugtalk_path: workspace_root.join(debugtalk_path),
            tests_path: workspace_root.join(tests_path),
            conda_env,
        }
    }
}

#[cfg(test)]
#[path = "../tests/src/config_tests.rs"]
mod tests;
