//! Command-line argument definitions for the `handoff` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ask the host operating system to open a file with its default handler.
#[derive(Debug, Parser)]
#[command(name = "handoff", version, about)]
pub struct Cli {
    /// Configuration file; defaults to `HANDOFF_CONFIG` or built-ins.
    #[arg(long, global = true, env = "HANDOFF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the legacy `"Type: <code> Message: <message>"` string instead
    /// of the structured JSON response.
    #[arg(long, global = true)]
    pub legacy: bool,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open a file with the system default handler.
    Open {
        /// Absolute path to the file.
        path: String,
        /// MIME-type hint for handler resolution.
        #[arg(long, default_value = "*/*")]
        mime: String,
    },
    /// Invoke the method-call boundary directly with raw arguments.
    Call {
        /// Method name (only `open_file` is implemented).
        method: String,
        /// JSON-encoded arguments.
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_open_with_mime() {
        let cli = Cli::try_parse_from([
            "handoff",
            "open",
            "/sdcard/report.pdf",
            "--mime",
            "application/pdf",
        ])
        .expect("parse open command");
        match cli.command {
            Command::Open { path, mime } => {
                assert_eq!(path, "/sdcard/report.pdf");
                assert_eq!(mime, "application/pdf");
            }
            Command::Call { .. } => panic!("expected open command"),
        }
    }

    #[test]
    fn parses_call_with_default_args() {
        let cli = Cli::try_parse_from(["handoff", "call", "close_file"])
            .expect("parse call command");
        match cli.command {
            Command::Call { method, args } => {
                assert_eq!(method, "close_file");
                assert_eq!(args, "{}");
            }
            Command::Open { .. } => panic!("expected call command"),
        }
    }
}
