//! Application-level orchestration utilities.
//!
//! This module owns scan and regenerate lifecycles (start/cancel/quit) and
//! post-scan processing such as timestamping and suggestions. UI/CLI layers
//! call into this module to keep responsibilities separated.

mod controller;
mod post_process;

pub(crate) use controller::{run_controller, UiCommand};
pub(crate) use post_process::{now_local, process_scan_completion, ProcessedScan};
#[cfg(feature = "tui")]
pub(crate) use post_process::stamp_scan;
