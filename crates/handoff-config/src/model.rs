//! Typed configuration model and defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default shared-storage root requiring an explicit read grant.
pub const DEFAULT_SHARED_STORAGE_ROOT: &str = "/sdcard";

/// Default application identity used when minting share grants.
pub const DEFAULT_APP_IDENTITY: &str = "org.handoff.app";

/// Default deadline for a pending permission decision, in seconds.
pub const DEFAULT_PERMISSION_TIMEOUT_SECS: u64 = 60;

/// Top-level configuration for the handoff stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HandoffConfig {
    /// Storage region whose paths require the shared-storage read grant.
    pub shared_storage_root: PathBuf,
    /// Roots the share broker may mint grants under.
    pub share_roots: Vec<PathBuf>,
    /// Identity share grants are minted on behalf of.
    pub app_identity: String,
    /// Permission subsystem behaviour.
    pub permission: PermissionConfig,
    /// Logging behaviour.
    pub telemetry: TelemetryConfig,
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            shared_storage_root: PathBuf::from(DEFAULT_SHARED_STORAGE_ROOT),
            share_roots: vec![PathBuf::from("/")],
            app_identity: DEFAULT_APP_IDENTITY.to_string(),
            permission: PermissionConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

/// Permission subsystem behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PermissionConfig {
    /// How the authority answers requests.
    pub policy: PolicyKind,
    /// Deadline for a pending decision, in seconds.
    pub timeout_secs: u64,
}

impl Default for PermissionConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::Allow,
            timeout_secs: DEFAULT_PERMISSION_TIMEOUT_SECS,
        }
    }
}

/// Authority answer policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// Grant every request immediately.
    Allow,
    /// Deny every request immediately.
    Deny,
    /// Suspend until a decision is delivered.
    Prompt,
}

/// Logging behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TelemetryConfig {
    /// Log level directive (e.g. `info`, `handoff_service=debug`).
    pub level: String,
    /// Output format selection.
    pub format: LogFormatKind,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormatKind::Auto,
        }
    }
}

/// Log output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormatKind {
    /// Infer from the build profile.
    Auto,
    /// Structured JSON lines.
    Json,
    /// Human-readable output.
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = HandoffConfig::default();
        assert_eq!(
            config.shared_storage_root,
            PathBuf::from(DEFAULT_SHARED_STORAGE_ROOT)
        );
        assert_eq!(config.permission.policy, PolicyKind::Allow);
        assert_eq!(
            config.permission.timeout_secs,
            DEFAULT_PERMISSION_TIMEOUT_SECS
        );
        assert!(!config.share_roots.is_empty());
    }

    #[test]
    fn policy_kind_uses_snake_case() {
        let json = serde_json::to_string(&PolicyKind::Prompt).expect("serialise policy");
        assert_eq!(json, "\"prompt\"");
    }
}
