//! Process-wide one-time backend initialization.
//!
//! Inference engines load one backend before any worker thread starts
//! and share its table for the life of the process. This module is that
//! readiness gate: the first `init_global` performs the load, every
//! later or concurrent call observes the first outcome, and the handle
//! is never closed — it lives until process exit, so the table can be
//! dispatched from any thread without further synchronization.
//!
//! Per-request or short-lived backends should hold their own
//! [`BlasBackend`] instead of going through this gate.

use std::sync::OnceLock;

use crate::backend::{BlasBackend, BlasFuncs};
use crate::config::BackendConfig;
use crate::error::BlasError;

static BACKEND: OnceLock<Result<BlasBackend, BlasError>> = OnceLock::new();

/// Load the process-wide backend from `config`, exactly once.
///
/// The first caller performs the load; concurrent callers block until it
/// finishes and all callers, including later ones with a different
/// config, get the first attempt's result. A failed first attempt is
/// final for the process — pick the backend path before initializing.
pub fn init_global(config: &BackendConfig) -> Result<&'static BlasBackend, &'static BlasError> {
    BACKEND
        .get_or_init(|| BlasBackend::load(&config.path))
        .as_ref()
}

/// The process-wide backend, if `init_global` has succeeded.
pub fn global() -> Option<&'static BlasBackend> {
    BACKEND.get().and_then(|r| r.as_ref().ok())
}

/// The process-wide dispatch table, if `init_global` has succeeded.
pub fn global_funcs() -> Option<&'static BlasFuncs> {
    global().map(BlasBackend::funcs)
}

/// Whether a backend is loaded and ready for dispatch.
pub fn is_available() -> bool {
    global().is_some()
}
