//! Host environment traits implemented by platform adapters.
//!
//! The seams mirror the host collaborators the handler consumes but never
//! implements: permission subsystem, filesystem probe, content-sharing
//! mechanism, and default-handler dispatch. Fakes stand in for all of them
//! in tests, so the coordinator is exercised without a real permission
//! dialog or foreign application launch.

use std::path::Path;

use async_trait::async_trait;

use crate::error::{DispatchError, ShareError};
use crate::model::{
    AppIdentity, Capability, CorrelationId, MimeHint, PermissionDecision, ShareGrant,
};

/// Host permission subsystem.
#[async_trait]
pub trait PermissionAuthority: Send + Sync {
    /// Whether the capability is currently granted.
    async fn has_permission(&self, capability: Capability) -> bool;

    /// Ask the host for the capability. The returned future resolves when
    /// the host delivers its grant/deny decision for `id`; until then the
    /// request is suspended. Implementations must eventually resolve or the
    /// caller's deadline fires.
    async fn request_permission(
        &self,
        id: CorrelationId,
        capability: Capability,
    ) -> PermissionDecision;
}

/// Filesystem existence probe.
#[async_trait]
pub trait FileProbe: Send + Sync {
    /// Whether `path` refers to an existing filesystem entry.
    async fn exists(&self, path: &Path) -> bool;
}

/// Content-sharing mechanism minting capability-scoped locators.
pub trait ShareBroker: Send + Sync {
    /// Mint a temporary read grant for `path` on behalf of `owner`.
    ///
    /// # Errors
    ///
    /// Returns an error when the path lies outside every registered
    /// shareable root or cannot be expressed as a locator.
    fn mint(&self, owner: &AppIdentity, path: &Path) -> Result<ShareGrant, ShareError>;
}

/// Default-handler resolution and launch.
#[async_trait]
pub trait HandlerDispatch: Send + Sync {
    /// Launch the default handler for the grant as a detached, independent
    /// task. Launch success is the terminal outcome; the handler is never
    /// awaited to completion.
    ///
    /// # Errors
    ///
    /// Returns an error when no handler is registered for the resource or
    /// the launch itself fails.
    async fn open_detached(
        &self,
        grant: &ShareGrant,
        hint: &MimeHint,
    ) -> Result<(), DispatchError>;
}
