//! Default-handler launch via the platform opener.
//!
//! The launch is detached: the foreign application runs as an independent
//! task and is never awaited. A successful spawn is the terminal outcome.

use std::io;

use async_trait::async_trait;
use handoff_core::{DispatchError, HandlerDispatch, MimeHint, ShareGrant};
use tracing::{debug, info};

/// Dispatcher backed by the operating system's default-handler resolution
/// (`xdg-open`, `open`, `start` depending on the platform).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDispatch;

#[async_trait]
impl HandlerDispatch for SystemDispatch {
    async fn open_detached(
        &self,
        grant: &ShareGrant,
        hint: &MimeHint,
    ) -> Result<(), DispatchError> {
        debug!(uri = %grant.uri, hint = %hint, "dispatching to default handler");
        let path = grant.path.clone();
        let uri = grant.uri.clone();

        // The opener spawns a short-lived resolver process; keep it off the
        // async worker threads.
        let outcome = tokio::task::spawn_blocking(move || open::that_detached(&path)).await;

        match outcome {
            Ok(Ok(())) => {
                info!(uri = %grant.uri, "default handler launched");
                Ok(())
            }
            Ok(Err(err)) if err.kind() == io::ErrorKind::NotFound => {
                Err(DispatchError::NoHandler { uri })
            }
            Ok(Err(err)) => Err(DispatchError::LaunchFailed { uri, source: err }),
            Err(join_err) => Err(DispatchError::LaunchFailed {
                uri,
                source: io::Error::other(join_err),
            }),
        }
    }
}
