//! The operation pipeline — one controller per input/result pair.
//!
//! `dispatch` runs a full operation: validate the selection, build the payload,
//! show the loading view, submit through the api seam, interpret the outcome
//! and render the terminal state. Errors never escape to the caller; every
//! dispatch leaves the container showing `Success` or `Error`.

use crate::api::{CompressionApi, SubmitParams};
use crate::error::{AppError, Result};
use crate::models::operation::Operation;
use crate::models::outcome::OperationOutcome;
use crate::models::state::DisplayState;
use crate::services::selection::{FileInput, FileLabel, SelectedFile};
use crate::ui::render::{render, ResultSurface};

/// Shown when dispatch is attempted with no file selected.
pub const MSG_NO_FILE: &str = "Por favor, selecciona un archivo primero.";
/// Shown for any failure that is not a server-reported error.
pub const MSG_CONNECTION_ERROR: &str = "Error de conexión con el servidor. Inténtalo de nuevo.";

/// Owns one file input, one result surface and their display state.
///
/// Constructed per invocation and dropped with it. Because `dispatch` takes
/// `&mut self`, two dispatches can never overlap on the same container.
pub struct PipelineController<A, S, L>
where
    A: CompressionApi,
    S: ResultSurface,
    L: FileLabel,
{
    api: A,
    input: FileInput<L>,
    surface: S,
    state: DisplayState,
}

impl<A, S, L> PipelineController<A, S, L>
where
    A: CompressionApi,
    S: ResultSurface,
    L: FileLabel,
{
    pub fn new(api: A, input: FileInput<L>, surface: S) -> Self {
        Self {
            api,
            input,
            surface,
            state: DisplayState::Idle,
        }
    }

    pub fn input_mut(&mut self) -> &mut FileInput<L> {
        &mut self.input
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Run one end-to-end operation.
    ///
    /// With no file selected the container goes straight to `Error` and no
    /// request is made. Otherwise the loading view renders before the network
    /// call, and the response (or its failure) decides the terminal state.
    pub async fn dispatch(&mut self, operation: Operation) {
        let Some(file) = self.input.selected().cloned() else {
            self.transition(DisplayState::Error(MSG_NO_FILE.to_string()));
            return;
        };

        self.transition(DisplayState::Loading);

        let result = self.submit(operation, file).await;
        match result {
            Ok(outcome) => self.transition(DisplayState::Success(outcome)),
            Err(AppError::Api(message)) => self.transition(DisplayState::Error(message)),
            Err(err) => {
                // Diagnostic channel; the container shows the generic message.
                log::error!("{} failed: {}", operation.endpoint(), err);
                self.transition(DisplayState::Error(MSG_CONNECTION_ERROR.to_string()));
            }
        }
        debug_assert!(self.state.is_terminal());
    }

    async fn submit(&self, operation: Operation, file: SelectedFile) -> Result<OperationOutcome> {
        let data = tokio::fs::read(&file.path).await?;
        self.api
            .submit(SubmitParams {
                endpoint: operation.endpoint(),
                file_name: file.name,
                data,
            })
            .await
    }

    fn transition(&mut self, next: DisplayState) {
        self.state = next;
        render(&mut self.surface, &self.state);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::fs;
    use std::rc::Rc;
    use std::time::Duration;

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::v1::CompressionApiV1;
    use crate::models::operation::{MediaKind, OperationKind};
    use crate::services::selection::FileNameReporter;
    use crate::ui::render::{RenderedView, Tone};

    #[derive(Clone, Default)]
    struct RecordingSurface(Rc<RefCell<Vec<RenderedView>>>);

    impl ResultSurface for RecordingSurface {
        fn show(&mut self, view: RenderedView) {
            self.0.borrow_mut().push(view);
        }
    }

    #[derive(Default)]
    struct NullLabel;

    impl FileLabel for NullLabel {
        fn set_text(&mut self, _text: &str) {}
    }

    fn compress_text() -> Operation {
        Operation::new(OperationKind::Compress, MediaKind::Text)
    }

    fn controller_for(
        server_url: &str,
    ) -> (
        PipelineController<CompressionApiV1, RecordingSurface, NullLabel>,
        Rc<RefCell<Vec<RenderedView>>>,
    ) {
        let api = CompressionApiV1::new(server_url, Duration::from_secs(5)).unwrap();
        let input = FileInput::new(FileNameReporter::bind(NullLabel));
        let surface = RecordingSurface::default();
        let views = surface.0.clone();
        (PipelineController::new(api, input, surface), views)
    }

    fn write_fixture(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("report.txt");
        fs::write(&path, "hello world").unwrap();
        path
    }

    #[tokio::test]
    async fn test_dispatch_without_selection_errors_and_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let (mut controller, views) = controller_for(&server.uri());
        controller.dispatch(compress_text()).await;

        let views = views.borrow();
        assert_eq!(views.len(), 1, "no loading view before validation");
        assert_eq!(views[0].tone, Tone::Error);
        assert_eq!(
            views[0].lines,
            vec!["Error: Por favor, selecciona un archivo primero.".to_string()]
        );
        server.verify().await;
    }

    #[tokio::test]
    async fn test_dispatch_success_renders_loading_then_result() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/compress_text"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"original_size": 2048, "compressed_size": 1024, "download_url": "/files/out.bin"}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let file = write_fixture(&dir);
        let (mut controller, views) = controller_for(&server.uri());
        controller.input_mut().select(&file).unwrap();
        controller.dispatch(compress_text()).await;

        let views = views.borrow();
        assert_eq!(views.len(), 2);
        assert!(views[0].busy);
        assert_eq!(views[0].lines, vec!["Procesando solicitud...".to_string()]);
        assert_eq!(
            views[1].lines,
            vec![
                "Operación completada con éxito.".to_string(),
                "Tamaño Original: 2 KB".to_string(),
                "Tamaño Final: 1 KB (Reducción del 50.00%)".to_string(),
                "Descargar Resultado: /files/out.bin".to_string(),
            ]
        );
        assert!(matches!(controller.state(), DisplayState::Success(_)));
    }

    #[tokio::test]
    async fn test_dispatch_server_error_shows_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_raw(r#"{"error": "disk full"}"#, "application/json"),
            )
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let file = write_fixture(&dir);
        let (mut controller, views) = controller_for(&server.uri());
        controller.input_mut().select(&file).unwrap();
        controller.dispatch(compress_text()).await;

        let views = views.borrow();
        assert_eq!(views.last().unwrap().lines, vec!["Error: disk full".to_string()]);
        assert_eq!(views.last().unwrap().tone, Tone::Error);
        assert_eq!(
            controller.state(),
            &DisplayState::Error("disk full".to_string())
        );
    }

    #[tokio::test]
    async fn test_dispatch_server_error_without_message_uses_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_raw("{}", "application/json"))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let file = write_fixture(&dir);
        let (mut controller, views) = controller_for(&server.uri());
        controller.input_mut().select(&file).unwrap();
        controller.dispatch(compress_text()).await;

        assert_eq!(
            views.borrow().last().unwrap().lines,
            vec!["Error: Ocurrió un error desconocido.".to_string()]
        );
    }

    #[tokio::test]
    async fn test_dispatch_transport_failure_shows_generic_message() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_fixture(&dir);
        // Nothing listens on port 1.
        let (mut controller, views) = controller_for("http://127.0.0.1:1");
        controller.input_mut().select(&file).unwrap();
        controller.dispatch(compress_text()).await;

        assert_eq!(
            views.borrow().last().unwrap().lines,
            vec!["Error: Error de conexión con el servidor. Inténtalo de nuevo.".to_string()]
        );
        assert_eq!(
            controller.state(),
            &DisplayState::Error(MSG_CONNECTION_ERROR.to_string())
        );
    }

    #[tokio::test]
    async fn test_dispatch_invalid_success_shape_shows_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"original_size": "big"}"#, "application/json"),
            )
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let file = write_fixture(&dir);
        let (mut controller, views) = controller_for(&server.uri());
        controller.input_mut().select(&file).unwrap();
        controller.dispatch(compress_text()).await;

        assert_eq!(
            views.borrow().last().unwrap().lines,
            vec!["Error: Error de conexión con el servidor. Inténtalo de nuevo.".to_string()]
        );
    }

    #[tokio::test]
    async fn test_dispatch_unreadable_file_shows_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let file = write_fixture(&dir);
        let (mut controller, views) = controller_for(&server.uri());
        controller.input_mut().select(&file).unwrap();
        // Selection still points at the file when it disappears underneath.
        fs::remove_file(&file).unwrap();
        controller.dispatch(compress_text()).await;

        let views = views.borrow();
        assert!(views[0].busy, "loading renders before the payload is read");
        assert_eq!(
            views.last().unwrap().lines,
            vec!["Error: Error de conexión con el servidor. Inténtalo de nuevo.".to_string()]
        );
        server.verify().await;
    }

    #[tokio::test]
    async fn test_dispatch_posts_to_the_operation_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/decompress_audio"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"original_size": 10, "compressed_size": 20, "download_url": "/d/x.wav"}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let file = write_fixture(&dir);
        let (mut controller, _views) = controller_for(&server.uri());
        controller.input_mut().select(&file).unwrap();
        controller
            .dispatch(Operation::new(OperationKind::Decompress, MediaKind::Audio))
            .await;

        assert!(matches!(controller.state(), DisplayState::Success(_)));
        server.verify().await;
    }

    #[test]
    fn test_message_constants_match_the_page_literals() {
        assert_eq!(MSG_NO_FILE, "Por favor, selecciona un archivo primero.");
        assert_eq!(
            MSG_CONNECTION_ERROR,
            "Error de conexión con el servidor. Inténtalo de nuevo."
        );
    }
}
