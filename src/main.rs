use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use compresor_client::cli::{Cli, Command};
use compresor_client::commands;
use compresor_client::error::Result;
use compresor_client::models::operation::{MediaKind, Operation, OperationKind};
use compresor_client::models::settings::AppSettings;
use compresor_client::models::state::DisplayState;
use compresor_client::storage;

// One cooperative thread; the only suspension points are the HTTP awaits.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Compress {
            media,
            file,
            output,
        } => {
            let settings = effective_settings(cli.server, cli.timeout);
            operate(
                OperationKind::Compress,
                media,
                &file,
                output.as_deref(),
                &settings,
            )
            .await
        }
        Command::Decompress {
            media,
            file,
            output,
        } => {
            let settings = effective_settings(cli.server, cli.timeout);
            operate(
                OperationKind::Decompress,
                media,
                &file,
                output.as_deref(),
                &settings,
            )
            .await
        }
        Command::Ping => {
            let settings = effective_settings(cli.server, cli.timeout);
            Ok(if commands::network::ping(&settings).await {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Config => {
            commands::config::run(cli.server, cli.timeout)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn operate(
    kind: OperationKind,
    media: MediaKind,
    file: &Path,
    output: Option<&Path>,
    settings: &AppSettings,
) -> Result<ExitCode> {
    let state =
        commands::operate::run(Operation::new(kind, media), file, settings, output).await?;
    Ok(match state {
        DisplayState::Error(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}

/// Saved settings with the per-run flag overrides applied.
fn effective_settings(server: Option<String>, timeout: Option<u64>) -> AppSettings {
    let mut settings = storage::settings::get_settings();
    if let Some(url) = server {
        settings.server_url = url.trim_end_matches('/').to_string();
    }
    if let Some(secs) = timeout {
        settings.timeout_secs = secs;
    }
    settings
}
