//! Pipeline layer.
//!
//! File-selection tracking and the dispatch pipeline. Called by the `commands`
//! layer; delegates HTTP to `api` and rendering to `ui`.

pub mod dispatcher;
pub mod selection;
