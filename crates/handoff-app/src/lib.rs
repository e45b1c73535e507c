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

//! Application wiring for the `handoff` binary.
//!
//! Layout: `cli.rs` (argument definitions), `bootstrap.rs` (config/
//! telemetry/service assembly and command execution).

pub mod bootstrap;
pub mod cli;

pub use bootstrap::run;
pub use cli::{Cli, Command};
