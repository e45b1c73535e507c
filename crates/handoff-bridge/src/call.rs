//! Method-call models and dispatch onto the open-file service.

use handoff_core::{MimeHint, OpenFileRequest, OpenFileResult, OpenStatus};
use handoff_service::OpenFileService;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// The single method name the boundary implements.
pub const METHOD_OPEN_FILE: &str = "open_file";

/// An inbound call as decoded off the transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodCall {
    /// Invoked method name.
    pub method: String,
    /// Method arguments as loosely-typed JSON.
    #[serde(default)]
    pub args: Value,
}

impl MethodCall {
    /// Build a call with the given arguments.
    #[must_use]
    pub fn new(method: impl Into<String>, args: Value) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }
}

/// Arguments accepted by `open_file`. Both fields are optional on the
/// wire; the handler reports a missing path as a terminal result.
#[derive(Debug, Clone, Default, Deserialize)]
struct OpenFileArgs {
    file_path: Option<String>,
    #[serde(rename = "type")]
    type_hint: Option<String>,
}

/// Structured response emitted for every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodResponse {
    /// Terminal status.
    pub status: OpenStatus,
    /// Legacy integer code for the status.
    pub code: i32,
    /// Human-readable outcome description.
    pub message: String,
}

impl From<OpenFileResult> for MethodResponse {
    fn from(result: OpenFileResult) -> Self {
        Self {
            status: result.status,
            code: result.status.legacy_code(),
            message: result.message,
        }
    }
}

/// Dispatch a decoded call. `open_file` runs the full pipeline; any other
/// method name produces a single not-implemented response and touches no
/// collaborator.
pub async fn dispatch(service: &OpenFileService, call: &MethodCall) -> MethodResponse {
    if call.method != METHOD_OPEN_FILE {
        debug!(method = %call.method, "unknown method");
        return OpenFileResult::not_implemented(&call.method).into();
    }

    // Malformed arguments behave like absent ones: the service reports
    // the missing path rather than the bridge rejecting the call.
    let args: OpenFileArgs = serde_json::from_value(call.args.clone()).unwrap_or_default();
    let request = OpenFileRequest::new(args.file_path.unwrap_or_default())
        .with_hint(MimeHint::from_optional(args.type_hint.as_deref()));

    service.handle(&request).await.into()
}
