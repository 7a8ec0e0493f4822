//! Run one compress/decompress operation end to end.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::v1::CompressionApiV1;
use crate::api::CompressionApi;
use crate::error::Result;
use crate::models::operation::Operation;
use crate::models::outcome::OperationOutcome;
use crate::models::settings::AppSettings;
use crate::models::state::DisplayState;
use crate::services::dispatcher::PipelineController;
use crate::services::selection::{FileInput, FileNameReporter};
use crate::ui::console::{ConsoleLabel, ConsoleSurface};

/// Dispatch `operation` on the file at `path`, reporting through the terminal.
///
/// Returns the terminal display state so the caller can derive an exit code.
/// With `output_dir` set, a successful operation additionally fetches the
/// produced artifact and writes it there.
pub async fn run(
    operation: Operation,
    path: &Path,
    settings: &AppSettings,
    output_dir: Option<&Path>,
) -> Result<DisplayState> {
    if !has_expected_extension(operation, path) {
        log::warn!(
            "{} normally expects one of {:?}; the server decides whether {} is acceptable",
            operation,
            operation.expected_extensions(),
            path.display()
        );
    }

    let api = new_api(settings)?;
    let input = FileInput::new(FileNameReporter::bind(ConsoleLabel));
    let mut controller = PipelineController::new(api, input, ConsoleSurface);
    controller.input_mut().select(path)?;
    controller.dispatch(operation).await;

    if let (DisplayState::Success(outcome), Some(dir)) = (controller.state(), output_dir) {
        let saved = save_artifact(&new_api(settings)?, outcome, dir).await?;
        println!("Guardado en: {}", saved.display());
    }

    Ok(controller.state().clone())
}

fn new_api(settings: &AppSettings) -> Result<CompressionApiV1> {
    CompressionApiV1::new(
        &settings.server_url,
        Duration::from_secs(settings.timeout_secs),
    )
}

fn has_expected_extension(operation: Operation, path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .is_some_and(|ext| operation.expected_extensions().contains(&ext.as_str()))
}

/// File name taken from the last segment of the download URL.
fn artifact_name(download_url: &str) -> &str {
    download_url
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or("resultado.bin")
}

async fn save_artifact(
    api: &CompressionApiV1,
    outcome: &OperationOutcome,
    dir: &Path,
) -> Result<PathBuf> {
    let bytes = api.fetch_result(&outcome.download_url).await?;
    let target = dir.join(artifact_name(&outcome.download_url));
    tokio::fs::create_dir_all(dir).await?;
    tokio::fs::write(&target, &bytes).await?;
    Ok(target)
}
