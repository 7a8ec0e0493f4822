//! Native client for the compresor compression service.
//!
//! The operation pipeline (selection → dispatch → interpretation → rendering)
//! lives in `services` and `ui`; all HTTP goes through the `api` seam;
//! `commands` are the thin entry handlers used by the binary.

pub mod api;
pub mod cli;
pub mod commands;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod ui;
