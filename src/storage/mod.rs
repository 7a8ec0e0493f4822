//! Local persistence of client settings.
//!
//! Settings live as a JSON file under the user config directory and are
//! written to disk immediately on change.

pub mod settings;
