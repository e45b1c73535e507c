//! # Design
//!
//! - Structured, constant-message errors for host adapter failures.
//! - Capture operation context (paths, locators) so failures reproduce in
//!   tests without string matching.
//! - Adapter errors never cross the boundary as faults; the coordinator
//!   folds them into terminal results.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while minting share grants.
#[derive(Debug, Error)]
pub enum ShareError {
    /// The path lies outside every registered shareable root.
    #[error("path outside registered share roots")]
    OutsideRoots {
        /// Path that failed containment.
        path: PathBuf,
    },
    /// The path escapes its containing root via parent segments.
    #[error("path escapes its share root")]
    Traversal {
        /// Offending path.
        path: PathBuf,
    },
    /// The path cannot be rendered as a locator.
    #[error("path is not representable as a share locator")]
    Unrepresentable {
        /// Offending path.
        path: PathBuf,
    },
}

/// Errors produced while dispatching to the default handler.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No application is registered for the resource type.
    #[error("no handler registered for the resource")]
    NoHandler {
        /// Locator that failed resolution.
        uri: String,
    },
    /// The resolved handler failed to launch.
    #[error("handler launch failed")]
    LaunchFailed {
        /// Locator being opened.
        uri: String,
        /// Underlying launch error.
        source: io::Error,
    },
}
