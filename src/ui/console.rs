//! Terminal renditions of the result container and the file-name label.

use colored::Colorize;

use crate::services::selection::FileLabel;
use crate::ui::render::{RenderedView, ResultSurface, Tone};

/// Result container backed by the terminal. Each shown view prints as a block;
/// error views go to stderr in red.
#[derive(Debug, Default)]
pub struct ConsoleSurface;

impl ResultSurface for ConsoleSurface {
    fn show(&mut self, view: RenderedView) {
        if !view.visible {
            return;
        }
        for line in &view.lines {
            match view.tone {
                Tone::Error => eprintln!("{}", line.red()),
                Tone::Neutral if view.busy => println!("{}", line.dimmed()),
                Tone::Neutral => println!("{line}"),
            }
        }
    }
}

/// File-name label backed by the terminal. Empty text (a cleared selection)
/// prints nothing; the terminal has no standing region to blank out.
#[derive(Debug, Default)]
pub struct ConsoleLabel;

impl FileLabel for ConsoleLabel {
    fn set_text(&mut self, text: &str) {
        if !text.is_empty() {
            println!("{}", text.bold());
        }
    }
}
