//! Configuration loading and validation.
//!
//! Precedence: explicit path, then the `HANDOFF_CONFIG` environment
//! variable, then built-in defaults. `HANDOFF_LOG` overrides the
//! configured log level either way.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::model::HandoffConfig;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "HANDOFF_CONFIG";

/// Environment variable overriding the configured log level.
pub const LOG_LEVEL_ENV: &str = "HANDOFF_LOG";

/// Load configuration from the environment-selected file, falling back to
/// defaults when no file is named.
///
/// # Errors
///
/// Returns an error when a named file cannot be read, parsed, or
/// validated.
pub fn load() -> ConfigResult<HandoffConfig> {
    load_with_env(
        std::env::var(CONFIG_PATH_ENV).ok(),
        std::env::var(LOG_LEVEL_ENV).ok(),
    )
}

/// Load configuration from an explicit file path.
///
/// # Errors
///
/// Returns an error when the file cannot be read, parsed, or validated.
pub fn load_from_path(path: &Path) -> ConfigResult<HandoffConfig> {
    let mut config = read_config(path)?;
    apply_log_override(&mut config, std::env::var(LOG_LEVEL_ENV).ok());
    validate(&config)?;
    debug!(path = %path.display(), "configuration loaded");
    Ok(config)
}

/// Environment-independent core of [`load`], taking the looked-up variable
/// values as parameters.
fn load_with_env(
    config_path: Option<String>,
    log_level: Option<String>,
) -> ConfigResult<HandoffConfig> {
    let mut config = match config_path {
        Some(path) => {
            let path = Path::new(&path);
            let config = read_config(path)?;
            debug!(path = %path.display(), "configuration loaded");
            config
        }
        None => {
            debug!("no configuration file named; using defaults");
            HandoffConfig::default()
        }
    };
    apply_log_override(&mut config, log_level);
    validate(&config)?;
    Ok(config)
}

fn read_config(path: &Path) -> ConfigResult<HandoffConfig> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        operation: "read_config",
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn apply_log_override(config: &mut HandoffConfig, level: Option<String>) {
    if let Some(level) = level
        && !level.is_empty()
    {
        config.telemetry.level = level;
    }
}

fn validate(config: &HandoffConfig) -> ConfigResult<()> {
    if config.permission.timeout_secs == 0 {
        return Err(ConfigError::InvalidField {
            section: "permission",
            field: "timeout_secs",
            reason: "must be positive",
            value: Some("0".to_string()),
        });
    }
    if config.share_roots.is_empty() {
        return Err(ConfigError::InvalidField {
            section: "share_roots",
            field: "share_roots",
            reason: "at least one shareable root is required",
            value: None,
        });
    }
    for root in &config.share_roots {
        if root.is_relative() {
            return Err(ConfigError::InvalidField {
                section: "share_roots",
                field: "share_roots",
                reason: "roots must be absolute",
                value: Some(root.display().to_string()),
            });
        }
    }
    if config.shared_storage_root.is_relative() {
        return Err(ConfigError::InvalidField {
            section: "shared_storage_root",
            field: "shared_storage_root",
            reason: "must be absolute",
            value: Some(config.shared_storage_root.display().to_string()),
        });
    }
    if config.app_identity.is_empty() {
        return Err(ConfigError::InvalidField {
            section: "app_identity",
            field: "app_identity",
            reason: "must not be empty",
            value: None,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PolicyKind;
    use std::path::PathBuf;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("handoff.json");
        fs::write(&path, contents).expect("write config file");
        (dir, path)
    }

    #[test]
    fn loads_a_complete_file() {
        let (_dir, path) = write_config(
            r#"{
                "shared_storage_root": "/mnt/shared",
                "share_roots": ["/mnt/shared", "/srv/library"],
                "app_identity": "com.example.viewer",
                "permission": { "policy": "prompt", "timeout_secs": 5 },
                "telemetry": { "level": "debug", "format": "json" }
            }"#,
        );
        let config = load_from_path(&path).expect("load config");
        assert_eq!(config.shared_storage_root, PathBuf::from("/mnt/shared"));
        assert_eq!(config.permission.policy, PolicyKind::Prompt);
        assert_eq!(config.permission.timeout_secs, 5);
    }

    #[test]
    fn partial_files_fall_back_to_defaults() {
        let (_dir, path) = write_config(r#"{ "app_identity": "com.example.viewer" }"#);
        let config = load_from_path(&path).expect("load config");
        assert_eq!(config.shared_storage_root, PathBuf::from("/sdcard"));
        assert_eq!(config.permission.policy, PolicyKind::Allow);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let (_dir, path) = write_config(r#"{ "permission": { "timeout_secs": 0 } }"#);
        let err = load_from_path(&path).expect_err("reject zero timeout");
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "timeout_secs",
                ..
            }
        ));
    }

    #[test]
    fn relative_share_roots_are_rejected() {
        let (_dir, path) = write_config(r#"{ "share_roots": ["relative/root"] }"#);
        let err = load_from_path(&path).expect_err("reject relative root");
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                section: "share_roots",
                ..
            }
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let (_dir, path) = write_config(r#"{ "unexpected": true }"#);
        assert!(matches!(
            load_from_path(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn environment_selected_file_is_loaded() {
        let (_dir, path) = write_config(
            r#"{
                "app_identity": "com.example.viewer",
                "telemetry": { "level": "warn" }
            }"#,
        );
        let config = load_with_env(Some(path.display().to_string()), None).expect("load config");
        assert_eq!(config.app_identity, "com.example.viewer");
        assert_eq!(config.telemetry.level, "warn");
    }

    #[test]
    fn log_override_replaces_the_configured_level() {
        let (_dir, path) = write_config(r#"{ "telemetry": { "level": "warn" } }"#);
        let config = load_with_env(
            Some(path.display().to_string()),
            Some("trace".to_string()),
        )
        .expect("load config");
        assert_eq!(config.telemetry.level, "trace");
    }

    #[test]
    fn log_override_applies_over_defaults() {
        let config = load_with_env(None, Some("debug".to_string())).expect("load defaults");
        assert_eq!(config.telemetry.level, "debug");
    }

    #[test]
    fn empty_log_override_is_ignored() {
        let config = load_with_env(None, Some(String::new())).expect("load defaults");
        assert_eq!(config.telemetry.level, "info");
    }

    #[test]
    fn missing_file_reports_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load_from_path(&dir.path().join("absent.json")).expect_err("missing file");
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
