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

//! Host-agnostic interfaces and DTOs for the open-file handoff pipeline.
//!
//! Layout: `model.rs` (request/result DTOs and the status taxonomy),
//! `host.rs` (traits implemented by platform adapters), `error.rs`
//! (structured errors surfaced by adapters).

pub mod error;
pub mod host;
pub mod model;

pub use error::{DispatchError, ShareError};
pub use host::{FileProbe, HandlerDispatch, PermissionAuthority, ShareBroker};
pub use model::{
    AppIdentity, Capability, CorrelationId, MimeHint, OpenFileRequest, OpenFileResult, OpenStatus,
    PermissionDecision, ShareGrant,
};
