//! Backend loading and the resolved dispatch table.
//!
//! A backend is opened from a shared library path, every required entry
//! point is resolved up front, and the result is exposed as [`BlasFuncs`]:
//! a flat, immutable table of plain function pointers. Numeric call sites
//! dispatch straight through the table with no per-call branching or
//! re-resolution. Construction is all-or-nothing — if any symbol is
//! absent, no table is produced and the just-opened handle is released
//! before the error reaches the caller.

use std::path::{Path, PathBuf};

use libloading::Library;

use crate::cblas::{
    SgemmBatchFn, SgemmFn, SscalFn, TanhFn, SYM_SGEMM, SYM_SGEMM_BATCH, SYM_SSCAL, SYM_TANH,
};
use crate::config::BlasVendor;
use crate::error::{BlasError, BlasResult};

/// Resolved entry points of one loaded backend.
///
/// Exists only in the fully-resolved state; every pointer was looked up
/// against the same binary before the table became observable. The table
/// does not own the library handle — the [`BlasBackend`] that produced it
/// does, and keeps the handle alive for as long as the table is reachable
/// through it.
///
/// Calls go through the pointers verbatim: no argument validation, no
/// dimension checks. Dimension, stride, and pointer liveness are the
/// caller's contract with the vendor library.
#[derive(Debug, Clone, Copy)]
pub struct BlasFuncs {
    pub sgemm: SgemmFn,
    pub sgemm_batch: SgemmBatchFn,
    pub sscal: SscalFn,
    pub tanh: TanhFn,
}

/// Owner of one backend handle and the table resolved from it.
///
/// The handle is released exactly once: either by an explicit [`close`]
/// or on drop, whichever comes first. Loading the same path through two
/// guards yields two independent handles; there is no registry or cache
/// at this layer.
///
/// [`close`]: BlasBackend::close
#[derive(Debug)]
pub struct BlasBackend {
    path: PathBuf,
    funcs: BlasFuncs,
    // None once the handle has been released.
    lib: Option<Library>,
}

impl BlasBackend {
    /// Open the shared library at `path` and resolve all entry points.
    ///
    /// Fails with [`BlasError::LibraryNotFound`] if the path does not
    /// open as a loadable binary for this architecture, and with
    /// [`BlasError::SymbolNotFound`] if any required export is absent.
    /// On either failure nothing is leaked: the handle, if it was
    /// opened, is closed before the error propagates.
    pub fn load(path: impl AsRef<Path>) -> BlasResult<Self> {
        let path = path.as_ref();
        // SAFETY: loading a shared object runs its initializers; the
        // backend binary is trusted per the ABI contract.
        let lib = unsafe { Library::new(path) }.map_err(|e| BlasError::LibraryNotFound {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        // Resolve everything before the table becomes observable. An
        // early return here drops `lib`, closing the handle.
        let funcs = unsafe {
            BlasFuncs {
                sgemm: resolve(&lib, SYM_SGEMM)?,
                sgemm_batch: resolve(&lib, SYM_SGEMM_BATCH)?,
                sscal: resolve(&lib, SYM_SSCAL)?,
                tanh: resolve(&lib, SYM_TANH)?,
            }
        };

        log::info!("loaded blas backend from {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            funcs,
            lib: Some(lib),
        })
    }

    /// Try a vendor's candidate sonames in order and keep the first that
    /// loads. Relative names go through the dynamic linker search path.
    ///
    /// Returns the last error if no candidate loads.
    pub fn load_vendor(vendor: BlasVendor) -> BlasResult<Self> {
        let mut last_err = None;
        for &name in vendor.candidate_names() {
            match Self::load(name) {
                Ok(backend) => {
                    log::info!("selected {} backend ({name})", vendor.name());
                    return Ok(backend);
                }
                Err(err) => {
                    log::debug!("{} candidate {name} unavailable: {err}", vendor.name());
                    last_err = Some(err);
                }
            }
        }
        Err(last_err.expect("vendor candidate list is never empty"))
    }

    /// Try every known vendor in priority order and keep the first that
    /// loads. For deployments that pin a binary, prefer [`load`] with an
    /// explicit path from [`BackendConfig`](crate::config::BackendConfig).
    ///
    /// [`load`]: BlasBackend::load
    pub fn load_any() -> BlasResult<Self> {
        let mut last_err = None;
        for vendor in BlasVendor::ALL {
            match Self::load_vendor(vendor) {
                Ok(backend) => return Ok(backend),
                Err(err) => last_err = Some(err),
            }
        }
        Err(last_err.expect("vendor list is never empty"))
    }

    /// The resolved dispatch table.
    ///
    /// # Panics
    ///
    /// Panics if the backend has been closed. Dispatching through a table
    /// whose handle is gone would call into unmapped memory, so the
    /// accessor refuses instead of handing out stale pointers.
    pub fn funcs(&self) -> &BlasFuncs {
        assert!(self.lib.is_some(), "blas backend already closed");
        &self.funcs
    }

    /// Whether the underlying handle is still open.
    pub fn is_open(&self) -> bool {
        self.lib.is_some()
    }

    /// Path the backend was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Release the backend handle.
    ///
    /// The first call closes the handle; later calls are no-ops that
    /// return `Ok`. A [`BlasError::CloseFailed`] reports an OS-level
    /// close error — the handle is still considered gone and is never
    /// re-closed or retried.
    pub fn close(&mut self) -> BlasResult<()> {
        match self.lib.take() {
            Some(lib) => lib
                .close()
                .map_err(|e| BlasError::CloseFailed(e.to_string())),
            None => Ok(()),
        }
    }
}

impl Drop for BlasBackend {
    fn drop(&mut self) {
        if let Some(lib) = self.lib.take() {
            if let Err(err) = lib.close() {
                log::warn!(
                    "failed to close blas backend {}: {err}",
                    self.path.display()
                );
            }
        }
    }
}

/// Look up `name` in the library and cast it to the statically known
/// function pointer type.
///
/// This is a name lookup only — native binaries offer no runtime
/// signature check, so an export under the expected name with a
/// different signature is undefined behavior at the call boundary.
///
/// # Safety
///
/// `T` must be the correct pointer type for the symbol's actual
/// signature in every conforming backend.
unsafe fn resolve<T: Copy>(lib: &Library, name: &'static str) -> BlasResult<T> {
    lib.get::<T>(name.as_bytes())
        .map(|sym| *sym)
        .map_err(|_| BlasError::SymbolNotFound(name))
}
