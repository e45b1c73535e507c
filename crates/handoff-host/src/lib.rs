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

//! Desktop host adapters for the handoff seams.
//!
//! Layout: `probe.rs` (filesystem existence probe), `share.rs` (rooted
//! share broker), `dispatch.rs` (default-handler launch), `permission.rs`
//! (policy-driven permission authority with a decision inbox).

pub mod dispatch;
pub mod permission;
pub mod probe;
pub mod share;

pub use dispatch::SystemDispatch;
pub use permission::{DecisionInbox, PermissionPolicy, PolicyPermissionAuthority};
pub use probe::StdFileProbe;
pub use share::RootedShareBroker;
