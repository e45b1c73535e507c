//! Request/result DTOs shared across the handoff pipeline.
//!
//! Everything here is scoped to a single request's lifetime: a request is
//! immutable once built, and exactly one [`OpenFileResult`] is produced for
//! it.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Universal wildcard MIME type used when the caller supplies no hint.
pub const WILDCARD_MIME: &str = "*/*";

/// MIME-type hint forwarded to the default-handler resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MimeHint(String);

impl MimeHint {
    /// Build a hint from a caller-supplied MIME string, falling back to the
    /// wildcard when the value is absent or empty.
    #[must_use]
    pub fn from_optional(value: Option<&str>) -> Self {
        match value {
            Some(hint) if !hint.is_empty() => Self(hint.to_string()),
            _ => Self::default(),
        }
    }

    /// The hint as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MimeHint {
    fn default() -> Self {
        Self(WILDCARD_MIME.to_string())
    }
}

impl fmt::Display for MimeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single open-file request as received at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenFileRequest {
    /// Absolute filesystem path supplied by the caller. May be empty when
    /// the caller passed nothing; the handler reports that as a terminal
    /// result rather than an error.
    pub path: String,
    /// MIME hint for handler resolution, wildcard when omitted.
    pub type_hint: MimeHint,
}

impl OpenFileRequest {
    /// Build a request with the default wildcard hint.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            type_hint: MimeHint::default(),
        }
    }

    /// Attach an explicit MIME hint to the request.
    #[must_use]
    pub fn with_hint(mut self, hint: MimeHint) -> Self {
        self.type_hint = hint;
        self
    }
}

/// Terminal status taxonomy for a handled request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenStatus {
    /// The default handler was launched; the handler itself is not awaited.
    Opened,
    /// No application is registered for the resource, or dispatch failed.
    NoHandler,
    /// The target file does not exist.
    NotFound,
    /// The host denied the storage-read permission.
    PermissionDenied,
    /// The host never delivered a permission decision within the deadline.
    PermissionTimeout,
    /// The caller supplied no path.
    MissingPath,
    /// The invoked method name is not part of the boundary contract.
    NotImplemented,
}

impl OpenStatus {
    /// Integer code used by the legacy string-encoded wire format.
    #[must_use]
    pub const fn legacy_code(self) -> i32 {
        match self {
            Self::Opened => 0,
            Self::NoHandler => -1,
            Self::NotFound => -2,
            Self::PermissionDenied | Self::PermissionTimeout => -3,
            Self::MissingPath => -4,
            Self::NotImplemented => -5,
        }
    }

    /// Machine-friendly discriminator for logs.
    #[must_use]
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Opened => "opened",
            Self::NoHandler => "no_handler",
            Self::NotFound => "not_found",
            Self::PermissionDenied => "permission_denied",
            Self::PermissionTimeout => "permission_timeout",
            Self::MissingPath => "missing_path",
            Self::NotImplemented => "not_implemented",
        }
    }
}

/// The single terminal result emitted for a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenFileResult {
    /// Terminal status for the request.
    pub status: OpenStatus,
    /// Human-readable outcome description.
    pub message: String,
}

impl OpenFileResult {
    /// Handler launched successfully.
    #[must_use]
    pub fn opened() -> Self {
        Self {
            status: OpenStatus::Opened,
            message: "done".to_string(),
        }
    }

    /// The caller supplied an empty or missing path.
    #[must_use]
    pub fn missing_path() -> Self {
        Self {
            status: OpenStatus::MissingPath,
            message: "the file path cannot be null".to_string(),
        }
    }

    /// The target file does not exist on the filesystem.
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            status: OpenStatus::NotFound,
            message: "The file does not exist".to_string(),
        }
    }

    /// No application could be resolved or launched for the file.
    #[must_use]
    pub fn no_handler() -> Self {
        Self {
            status: OpenStatus::NoHandler,
            message: "No application found to open the file.".to_string(),
        }
    }

    /// The host denied the storage-read permission.
    #[must_use]
    pub fn permission_denied() -> Self {
        Self {
            status: OpenStatus::PermissionDenied,
            message: "Permission denied: READ_SHARED_STORAGE".to_string(),
        }
    }

    /// The permission decision never arrived within the deadline.
    #[must_use]
    pub fn permission_timeout() -> Self {
        Self {
            status: OpenStatus::PermissionTimeout,
            message: "Permission request timed out".to_string(),
        }
    }

    /// The method name is not part of the boundary contract.
    #[must_use]
    pub fn not_implemented(method: &str) -> Self {
        Self {
            status: OpenStatus::NotImplemented,
            message: format!("method '{method}' is not implemented"),
        }
    }
}

/// Token linking an asynchronous permission decision back to its
/// originating request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrelationId(Uuid);

impl CorrelationId {
    /// Mint a fresh identifier for a new request.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Host capabilities the handler may need to acquire before acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Read access to the shared/external storage region.
    ReadSharedStorage,
}

impl Capability {
    /// Stable capability name used in logs and messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReadSharedStorage => "READ_SHARED_STORAGE",
        }
    }
}

/// Outcome of an asynchronous permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionDecision {
    /// The host granted the capability.
    Granted,
    /// The host denied the capability.
    Denied,
}

/// Identity of the application on whose behalf share grants are minted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppIdentity(String);

impl AppIdentity {
    /// Build an identity from its stable name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Temporary capability-scoped locator letting a foreign application read a
/// file without direct filesystem access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareGrant {
    /// Locator handed to the resolved default handler.
    pub uri: String,
    /// Filesystem path the grant resolves to.
    pub path: PathBuf,
    /// Grants are read-only; retained for future write-capable grants.
    pub read_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_hint_defaults_to_wildcard() {
        assert_eq!(MimeHint::default().as_str(), WILDCARD_MIME);
        assert_eq!(MimeHint::from_optional(None).as_str(), WILDCARD_MIME);
        assert_eq!(MimeHint::from_optional(Some("")).as_str(), WILDCARD_MIME);
        assert_eq!(
            MimeHint::from_optional(Some("application/pdf")).as_str(),
            "application/pdf"
        );
    }

    #[test]
    fn legacy_codes_match_wire_contract() {
        assert_eq!(OpenStatus::Opened.legacy_code(), 0);
        assert_eq!(OpenStatus::NoHandler.legacy_code(), -1);
        assert_eq!(OpenStatus::NotFound.legacy_code(), -2);
        assert_eq!(OpenStatus::PermissionDenied.legacy_code(), -3);
        assert_eq!(OpenStatus::PermissionTimeout.legacy_code(), -3);
        assert_eq!(OpenStatus::MissingPath.legacy_code(), -4);
        assert_eq!(OpenStatus::NotImplemented.legacy_code(), -5);
    }

    #[test]
    fn result_constructors_carry_contract_messages() {
        assert_eq!(
            OpenFileResult::missing_path().message,
            "the file path cannot be null"
        );
        assert_eq!(OpenFileResult::not_found().message, "The file does not exist");
        assert_eq!(
            OpenFileResult::no_handler().message,
            "No application found to open the file."
        );
    }

    #[test]
    fn status_serialises_snake_case() {
        let json = serde_json::to_string(&OpenStatus::PermissionDenied).expect("serialise status");
        assert_eq!(json, "\"permission_denied\"");
    }

    #[test]
    fn correlation_ids_are_unique() {
        assert_ne!(CorrelationId::new(), CorrelationId::new());
    }
}
