//! File-selection tracking and the file-name label binding.

use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

/// The file currently chosen for an input. Name and location only; bytes are
/// read at dispatch time, never held here.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
}

/// Sink for the visible file-name label.
pub trait FileLabel {
    fn set_text(&mut self, text: &str);
}

/// Keeps the label in sync with the selection: `"Archivo: {name}"` while a
/// file is chosen, empty text otherwise.
#[derive(Debug)]
pub struct FileNameReporter<L: FileLabel> {
    label: L,
}

impl<L: FileLabel> FileNameReporter<L> {
    pub fn bind(label: L) -> Self {
        Self { label }
    }

    /// Change signal from the owning input.
    fn on_change(&mut self, selection: Option<&SelectedFile>) {
        match selection {
            Some(file) => self.label.set_text(&format!("Archivo: {}", file.name)),
            None => self.label.set_text(""),
        }
    }
}

/// One file input: at most one selected file, plus its bound reporter.
#[derive(Debug)]
pub struct FileInput<L: FileLabel> {
    selected: Option<SelectedFile>,
    reporter: FileNameReporter<L>,
}

impl<L: FileLabel> FileInput<L> {
    pub fn new(reporter: FileNameReporter<L>) -> Self {
        Self {
            selected: None,
            reporter,
        }
    }

    /// Select the file at `path`, replacing any previous selection.
    pub fn select(&mut self, path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(AppError::Io(format!(
                "Path is not a regular file: {}",
                path.display()
            )));
        }
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                AppError::Io(format!("Path has no usable file name: {}", path.display()))
            })?
            .to_string();
        self.selected = Some(SelectedFile {
            name,
            path: path.to_path_buf(),
        });
        self.reporter.on_change(self.selected.as_ref());
        Ok(())
    }

    /// Clear the selection; the label empties.
    pub fn clear(&mut self) {
        self.selected = None;
        self.reporter.on_change(None);
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }
}
