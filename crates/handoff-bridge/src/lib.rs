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

//! Inbound method-call boundary.
//!
//! The transport carrying calls is someone else's problem; this crate maps
//! already-decoded calls onto the service and renders responses, including
//! the legacy `"Type: <code> Message: <message>"` string kept for wire
//! compatibility with existing callers.
//!
//! Layout: `call.rs` (call/response models and dispatch), `legacy.rs`
//! (string-encoded rendering).

pub mod call;
pub mod legacy;

pub use call::{METHOD_OPEN_FILE, MethodCall, MethodResponse, dispatch};
pub use legacy::render_legacy;
