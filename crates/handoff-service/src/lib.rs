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

//! The open-file request coordinator.
//!
//! Layout: `gate.rs` (single-result emission gate), `service.rs`
//! (`OpenFileService` driving validation, permission acquisition, share
//! minting, and handler dispatch).

pub mod gate;
pub mod service;

pub use gate::ResultGate;
pub use service::{HostAdapters, OpenFileService, ServiceOptions};
