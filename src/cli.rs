//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::operation::MediaKind;

#[derive(Debug, Parser)]
#[command(
    name = "compresor",
    version,
    about = "Cliente del servicio compresor: comprime y descomprime archivos de texto, imagen y audio"
)]
pub struct Cli {
    /// Base URL of the compresor server. Overrides the saved setting for this
    /// run; with the `config` subcommand it is persisted instead.
    #[arg(long, global = true, env = "COMPRESOR_SERVER")]
    pub server: Option<String>,

    /// Request timeout in seconds. Same override/persist split as `--server`.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compress a file through the remote service.
    Compress {
        /// Media category; picks the server endpoint.
        #[arg(value_enum)]
        media: MediaKind,
        /// File to submit.
        file: PathBuf,
        /// Directory to save the produced artifact into.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Decompress a previously compressed file.
    Decompress {
        /// Media category; picks the server endpoint.
        #[arg(value_enum)]
        media: MediaKind,
        /// File to submit.
        file: PathBuf,
        /// Directory to save the produced artifact into.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check whether the server is reachable.
    Ping,
    /// Show the saved client settings, or persist the global flags.
    Config,
}
