//! Result-container rendering.
//!
//! Turns a `DisplayState` into a `RenderedView` and hands it to the bound
//! `ResultSurface`. Every state has exactly one rendering; the surface decides
//! nothing about content.

use crate::models::state::DisplayState;
use crate::ui::format::format_bytes;

/// Shown while a request is in flight.
pub const MSG_PROCESSING: &str = "Procesando solicitud...";
/// Confirmation line of a successful operation.
pub const MSG_COMPLETED: &str = "Operación completada con éxito.";

/// Visual tone of a rendered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Error,
}

/// One fully rendered state of a result container.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedView {
    pub visible: bool,
    /// A progress indicator accompanies the lines.
    pub busy: bool,
    pub tone: Tone,
    pub lines: Vec<String>,
}

/// Where rendered views land: the terminal in the shipped binary, an in-memory
/// recorder in tests.
pub trait ResultSurface {
    fn show(&mut self, view: RenderedView);
}

/// Render `state` into `surface`. Total over `DisplayState`.
pub fn render(surface: &mut dyn ResultSurface, state: &DisplayState) {
    surface.show(view_for(state));
}

fn view_for(state: &DisplayState) -> RenderedView {
    match state {
        DisplayState::Idle => RenderedView {
            visible: false,
            busy: false,
            tone: Tone::Neutral,
            lines: Vec::new(),
        },
        DisplayState::Loading => RenderedView {
            visible: true,
            busy: true,
            tone: Tone::Neutral,
            lines: vec![MSG_PROCESSING.to_string()],
        },
        DisplayState::Success(outcome) => {
            let final_size = match outcome.reduction_percent() {
                Some(percent) => format!(
                    "Tamaño Final: {} (Reducción del {:.2}%)",
                    format_bytes(outcome.compressed_size),
                    percent
                ),
                None => format!("Tamaño Final: {}", format_bytes(outcome.compressed_size)),
            };
            RenderedView {
                visible: true,
                busy: false,
                tone: Tone::Neutral,
                lines: vec![
                    MSG_COMPLETED.to_string(),
                    format!("Tamaño Original: {}", format_bytes(outcome.original_size)),
                    final_size,
                    format!("Descargar Resultado: {}", outcome.download_url),
                ],
            }
        }
        DisplayState::Error(message) => RenderedView {
            visible: true,
            busy: false,
            tone: Tone::Error,
            lines: vec![format!("Error: {message}")],
        },
    }
}
