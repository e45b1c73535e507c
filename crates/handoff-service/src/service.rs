//! The `FileOpenRequestHandler` coordinator.
//!
//! # Design
//!
//! - Each request carries its own context and correlation identifier;
//!   there is no process-wide request slot, so overlapping requests never
//!   collide and a late permission decision cannot act on another
//!   request's data.
//! - The permission flow is an explicit two-state machine: the request
//!   suspends on the authority's decision future and resumes on
//!   `Granted`/`Denied`. A deadline bounds the suspension so a silent host
//!   cannot hang the request forever.
//! - Every terminal branch emits through the [`ResultGate`], keeping the
//!   at-most-one-result invariant observable.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use handoff_core::{
    AppIdentity, Capability, CorrelationId, FileProbe, HandlerDispatch, OpenFileRequest,
    OpenFileResult, PermissionAuthority, PermissionDecision, ShareBroker,
};
use tokio::time::timeout;
use tracing::{Instrument, info, info_span, warn};

use crate::gate::ResultGate;

/// Default bound on how long a request may wait for a permission decision.
pub const DEFAULT_PERMISSION_TIMEOUT: Duration = Duration::from_secs(60);

/// Host collaborators consumed by the coordinator.
#[derive(Clone)]
pub struct HostAdapters {
    /// Permission subsystem.
    pub authority: Arc<dyn PermissionAuthority>,
    /// Filesystem existence probe.
    pub probe: Arc<dyn FileProbe>,
    /// Share-grant minting mechanism.
    pub broker: Arc<dyn ShareBroker>,
    /// Default-handler dispatch.
    pub dispatch: Arc<dyn HandlerDispatch>,
}

/// Policy knobs for the coordinator.
#[derive(Debug, Clone)]
pub struct ServiceOptions {
    /// Storage region whose paths require an explicit read grant.
    pub shared_storage_root: PathBuf,
    /// Identity share grants are minted on behalf of.
    pub identity: AppIdentity,
    /// Deadline for a pending permission decision.
    pub permission_timeout: Duration,
}

impl ServiceOptions {
    /// Options with the default permission deadline.
    #[must_use]
    pub fn new(shared_storage_root: impl Into<PathBuf>, identity: AppIdentity) -> Self {
        Self {
            shared_storage_root: shared_storage_root.into(),
            identity,
            permission_timeout: DEFAULT_PERMISSION_TIMEOUT,
        }
    }

    /// Override the permission deadline.
    #[must_use]
    pub const fn with_permission_timeout(mut self, deadline: Duration) -> Self {
        self.permission_timeout = deadline;
        self
    }
}

/// Coordinator translating one open-file request into host calls and
/// exactly one terminal result.
pub struct OpenFileService {
    hosts: HostAdapters,
    options: ServiceOptions,
}

impl OpenFileService {
    /// Wire the coordinator to its host collaborators.
    #[must_use]
    pub fn new(hosts: HostAdapters, options: ServiceOptions) -> Self {
        Self { hosts, options }
    }

    /// Handle a single open-file request end to end.
    ///
    /// The only suspension point is the interval between a permission
    /// request and the host's decision; everything else completes within
    /// the call. Always returns exactly one result and never panics on
    /// host failures.
    pub async fn handle(&self, request: &OpenFileRequest) -> OpenFileResult {
        let id = CorrelationId::new();
        let span = info_span!("open_file", correlation_id = %id, path = %request.path);
        self.handle_inner(id, request).instrument(span).await
    }

    async fn handle_inner(&self, id: CorrelationId, request: &OpenFileRequest) -> OpenFileResult {
        let gate = ResultGate::new();

        if request.path.is_empty() {
            return finish(&gate, OpenFileResult::missing_path());
        }
        let path = Path::new(&request.path);

        if self.requires_permission(path) {
            let capability = Capability::ReadSharedStorage;
            if !self.hosts.authority.has_permission(capability).await {
                info!(capability = capability.as_str(), "requesting permission");
                let decision = timeout(
                    self.options.permission_timeout,
                    self.hosts.authority.request_permission(id, capability),
                )
                .await;
                match decision {
                    Ok(PermissionDecision::Granted) => {}
                    Ok(PermissionDecision::Denied) => {
                        warn!(capability = capability.as_str(), "permission denied");
                        return finish(&gate, OpenFileResult::permission_denied());
                    }
                    Err(_) => {
                        warn!(
                            capability = capability.as_str(),
                            deadline_ms = %self.options.permission_timeout.as_millis(),
                            "permission decision never arrived"
                        );
                        return finish(&gate, OpenFileResult::permission_timeout());
                    }
                }
            }
        }

        if !self.hosts.probe.exists(path).await {
            return finish(&gate, OpenFileResult::not_found());
        }

        let grant = match self.hosts.broker.mint(&self.options.identity, path) {
            Ok(grant) => grant,
            Err(err) => {
                // A path no provider can expose resolves the same way as a
                // missing handler: legacy code -1.
                warn!(error = %err, "share grant refused");
                return finish(&gate, OpenFileResult::no_handler());
            }
        };

        match self
            .hosts
            .dispatch
            .open_detached(&grant, &request.type_hint)
            .await
        {
            Ok(()) => {
                info!(uri = %grant.uri, hint = %request.type_hint, "handler launched");
                finish(&gate, OpenFileResult::opened())
            }
            Err(err) => {
                warn!(error = %err, uri = %grant.uri, "dispatch failed");
                finish(&gate, OpenFileResult::no_handler())
            }
        }
    }

    /// Prefix containment against the shared-storage root; not a general
    /// filesystem classifier.
    fn requires_permission(&self, path: &Path) -> bool {
        path.starts_with(&self.options.shared_storage_root)
    }
}

fn finish(gate: &ResultGate, result: OpenFileResult) -> OpenFileResult {
    // The coordinator is linear, so the claim always succeeds here; the
    // gate still records emission so a stray late path cannot double-emit.
    let claimed = gate.submit();
    debug_assert!(claimed, "request attempted to emit a second result");
    info!(status = result.status.kind(), "request finished");
    result
}
