#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! File-backed configuration for the handoff stack.
//!
//! Layout: `model.rs` (typed config model and defaults), `loader.rs`
//! (file/env loading and validation), `error.rs` (structured errors).

pub mod error;
pub mod loader;
pub mod model;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_PATH_ENV, LOG_LEVEL_ENV, load, load_from_path};
pub use model::{HandoffConfig, LogFormatKind, PermissionConfig, PolicyKind, TelemetryConfig};
