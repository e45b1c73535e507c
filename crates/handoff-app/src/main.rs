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

//! Binary entrypoint wiring the handoff services together.

use std::process;

use clap::Parser;
use handoff_app::{Cli, run};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(exit_code) => {
            if exit_code != 0 {
                process::exit(exit_code);
            }
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            process::exit(70);
        }
    }
}
