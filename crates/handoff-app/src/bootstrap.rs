//! Service assembly and command execution.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use handoff_bridge::{MethodCall, MethodResponse, dispatch, render_legacy};
use handoff_config::{HandoffConfig, LogFormatKind, PolicyKind};
use handoff_core::{AppIdentity, OpenFileResult, OpenStatus};
use handoff_host::{
    PermissionPolicy, PolicyPermissionAuthority, RootedShareBroker, StdFileProbe, SystemDispatch,
};
use handoff_service::{HostAdapters, OpenFileService, ServiceOptions};
use handoff_telemetry::{LogFormat, LoggingConfig, init_logging};
use serde_json::Value;
use tracing::info;

use crate::cli::{Cli, Command};

/// Run the parsed command to completion and return the process exit code.
///
/// # Errors
///
/// Returns an error for environment failures (unreadable configuration,
/// logging setup, malformed argument JSON); request outcomes are reported
/// through the printed response and the exit code instead.
pub async fn run(cli: Cli) -> Result<i32> {
    let config = match &cli.config {
        Some(path) => handoff_config::load_from_path(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => handoff_config::load().context("failed to load configuration")?,
    };

    init_logging(&logging_config(&config)).context("failed to initialise logging")?;
    info!(
        shared_storage_root = %config.shared_storage_root.display(),
        policy = ?config.permission.policy,
        "handoff starting"
    );

    let service = build_service(&config);

    let result = match cli.command {
        Command::Open { path, mime } => {
            let call = MethodCall::new(
                handoff_bridge::METHOD_OPEN_FILE,
                serde_json::json!({ "file_path": path, "type": mime }),
            );
            dispatch(&service, &call).await
        }
        Command::Call { method, args } => {
            let args: Value =
                serde_json::from_str(&args).context("arguments are not valid JSON")?;
            dispatch(&service, &MethodCall::new(method, args)).await
        }
    };

    print_response(&result, cli.legacy)?;
    Ok(exit_code(result.status))
}

/// Assemble the coordinator from configuration.
#[must_use]
pub fn build_service(config: &HandoffConfig) -> OpenFileService {
    let policy = match config.permission.policy {
        PolicyKind::Allow => PermissionPolicy::AllowAll,
        PolicyKind::Deny => PermissionPolicy::DenyAll,
        PolicyKind::Prompt => PermissionPolicy::Prompt,
    };

    let options = ServiceOptions::new(
        config.shared_storage_root.clone(),
        AppIdentity::new(config.app_identity.clone()),
    )
    .with_permission_timeout(Duration::from_secs(config.permission.timeout_secs));

    OpenFileService::new(
        HostAdapters {
            authority: Arc::new(PolicyPermissionAuthority::new(policy)),
            probe: Arc::new(StdFileProbe),
            broker: Arc::new(RootedShareBroker::new(config.share_roots.clone())),
            dispatch: Arc::new(SystemDispatch),
        },
        options,
    )
}

fn logging_config(config: &HandoffConfig) -> LoggingConfig<'_> {
    LoggingConfig {
        level: &config.telemetry.level,
        format: match config.telemetry.format {
            LogFormatKind::Auto => LogFormat::infer(),
            LogFormatKind::Json => LogFormat::Json,
            LogFormatKind::Pretty => LogFormat::Pretty,
        },
    }
}

fn print_response(response: &MethodResponse, legacy: bool) -> Result<()> {
    if legacy {
        let result = OpenFileResult {
            status: response.status,
            message: response.message.clone(),
        };
        println!("{}", render_legacy(&result));
    } else {
        println!(
            "{}",
            serde_json::to_string_pretty(response).context("failed to render response")?
        );
    }
    Ok(())
}

const fn exit_code(status: OpenStatus) -> i32 {
    match status {
        OpenStatus::Opened => 0,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handoff_config::PermissionConfig;
    use std::path::PathBuf;

    #[test]
    fn exit_codes_distinguish_success() {
        assert_eq!(exit_code(OpenStatus::Opened), 0);
        assert_eq!(exit_code(OpenStatus::NotFound), 1);
        assert_eq!(exit_code(OpenStatus::NotImplemented), 1);
    }

    #[tokio::test]
    async fn built_service_reports_missing_files() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = HandoffConfig {
            shared_storage_root: PathBuf::from("/definitely-not-here"),
            share_roots: vec![dir.path().to_path_buf()],
            permission: PermissionConfig::default(),
            ..HandoffConfig::default()
        };
        let service = build_service(&config);

        let call = MethodCall::new(
            handoff_bridge::METHOD_OPEN_FILE,
            serde_json::json!({ "file_path": dir.path().join("missing.pdf") }),
        );
        let response = dispatch(&service, &call).await;
        assert_eq!(response.status, OpenStatus::NotFound);
        assert_eq!(response.code, -2);
    }

    #[tokio::test]
    async fn unknown_methods_round_trip_as_not_implemented() {
        let config = HandoffConfig::default();
        let service = build_service(&config);
        let response = dispatch(
            &service,
            &MethodCall::new("delete_file", serde_json::json!({})),
        )
        .await;
        assert_eq!(response.status, OpenStatus::NotImplemented);
        assert_eq!(response.code, -5);
    }
}
