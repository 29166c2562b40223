//! CLI command definitions for the `deskmate` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Customer support chat desk.
#[derive(Parser)]
#[command(name = "deskmate", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive support chat in the terminal.
    Chat {
        /// Contact identifier (email or phone) used to look up order facts.
        #[arg(short, long)]
        contact: Option<String>,

        /// Conversation language (English, Telugu, Hindi).
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Start the REST API server.
    Serve {
        /// Port to listen on (defaults to `server.port` in config.toml).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (defaults to `server.host` in config.toml).
        #[arg(long)]
        host: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl Cli {
    /// Tracing filter for the requested verbosity. `RUST_LOG` overrides it.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "warn",
            1 => "info,deskmate=debug",
            _ => "trace",
        }
    }
}
