//! Fake host adapters for exercising the coordinator without a real
//! permission dialog, filesystem, or handler launch.

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use handoff_core::{
    Capability, CorrelationId, DispatchError, FileProbe, HandlerDispatch, MimeHint,
    PermissionAuthority, PermissionDecision, ShareGrant,
};

/// Authority with a fixed grant state and a fixed request decision.
#[derive(Debug, Clone, Copy)]
pub struct StaticAuthority {
    already_granted: bool,
    decision: PermissionDecision,
}

impl StaticAuthority {
    /// Capability already granted; no request will be issued.
    #[must_use]
    pub const fn granted() -> Self {
        Self {
            already_granted: true,
            decision: PermissionDecision::Granted,
        }
    }

    /// Capability not granted; requests resolve to a grant.
    #[must_use]
    pub const fn granting() -> Self {
        Self {
            already_granted: false,
            decision: PermissionDecision::Granted,
        }
    }

    /// Capability not granted; requests resolve to a denial.
    #[must_use]
    pub const fn denying() -> Self {
        Self {
            already_granted: false,
            decision: PermissionDecision::Denied,
        }
    }
}

#[async_trait]
impl PermissionAuthority for StaticAuthority {
    async fn has_permission(&self, _capability: Capability) -> bool {
        self.already_granted
    }

    async fn request_permission(
        &self,
        _id: CorrelationId,
        _capability: Capability,
    ) -> PermissionDecision {
        self.decision
    }
}

/// Authority that never answers a request, for exercising deadlines.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAuthority;

#[async_trait]
impl PermissionAuthority for SilentAuthority {
    async fn has_permission(&self, _capability: Capability) -> bool {
        false
    }

    async fn request_permission(
        &self,
        _id: CorrelationId,
        _capability: Capability,
    ) -> PermissionDecision {
        std::future::pending().await
    }
}

/// Probe with a fixed answer, independent of the real filesystem.
#[derive(Debug, Clone, Copy)]
pub struct FixedProbe(bool);

impl FixedProbe {
    /// Probe that reports every path as existing.
    #[must_use]
    pub const fn always_found() -> Self {
        Self(true)
    }

    /// Probe that reports every path as missing.
    #[must_use]
    pub const fn never_found() -> Self {
        Self(false)
    }
}

#[async_trait]
impl FileProbe for FixedProbe {
    async fn exists(&self, _path: &Path) -> bool {
        self.0
    }
}

/// Dispatcher that records launches and optionally refuses them.
#[derive(Debug, Default)]
pub struct RecordingDispatch {
    refuse: bool,
    launches: Mutex<Vec<(String, String)>>,
}

impl RecordingDispatch {
    /// Dispatcher that accepts every launch.
    #[must_use]
    pub fn accepting() -> Self {
        Self::default()
    }

    /// Dispatcher that refuses every launch as if no handler existed.
    #[must_use]
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            launches: Mutex::new(Vec::new()),
        }
    }

    /// Recorded `(uri, hint)` pairs, in launch order.
    ///
    /// # Panics
    ///
    /// Panics if the launch log mutex has been poisoned.
    #[must_use]
    pub fn launches(&self) -> Vec<(String, String)> {
        self.launches
            .lock()
            .expect("launch log mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl HandlerDispatch for RecordingDispatch {
    async fn open_detached(
        &self,
        grant: &ShareGrant,
        hint: &MimeHint,
    ) -> Result<(), DispatchError> {
        if self.refuse {
            return Err(DispatchError::NoHandler {
                uri: grant.uri.clone(),
            });
        }
        self.launches
            .lock()
            .expect("launch log mutex poisoned")
            .push((grant.uri.clone(), hint.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn grant() -> ShareGrant {
        ShareGrant {
            uri: "file:///tmp/report.pdf".to_string(),
            path: PathBuf::from("/tmp/report.pdf"),
            read_only: true,
        }
    }

    #[tokio::test]
    async fn recording_dispatch_logs_launches() {
        let dispatch = RecordingDispatch::accepting();
        dispatch
            .open_detached(&grant(), &MimeHint::default())
            .await
            .expect("launch accepted");
        assert_eq!(
            dispatch.launches(),
            vec![("file:///tmp/report.pdf".to_string(), "*/*".to_string())]
        );
    }

    #[tokio::test]
    async fn refusing_dispatch_reports_no_handler() {
        let dispatch = RecordingDispatch::refusing();
        let err = dispatch
            .open_detached(&grant(), &MimeHint::default())
            .await
            .expect_err("launch refused");
        assert!(matches!(err, DispatchError::NoHandler { .. }));
        assert!(dispatch.launches().is_empty());
    }

    #[tokio::test]
    async fn static_authority_answers_match_construction() {
        assert!(
            StaticAuthority::granted()
                .has_permission(Capability::ReadSharedStorage)
                .await
        );
        assert_eq!(
            StaticAuthority::denying()
                .request_permission(CorrelationId::new(), Capability::ReadSharedStorage)
                .await,
            PermissionDecision::Denied
        );
    }
}
