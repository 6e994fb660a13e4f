//! Backend selection: where the BLAS shared library comes from.
//!
//! The loader itself takes a plain filesystem path; this module covers
//! the two ways deployments produce one. Either the operator pins the
//! exact binary through `BLAS_BACKEND_PATH`, or a vendor is named and
//! its usual sonames are tried through the dynamic linker search path.
//! Selection is explicit configuration handed to the loader at startup —
//! there is no hidden global that decides the backend.

use std::env;
use std::path::PathBuf;

/// Environment variable naming the backend binary to load.
pub const BACKEND_PATH_ENV: &str = "BLAS_BACKEND_PATH";

/// Vendor BLAS implementations known to export the required entry points.
///
/// Listed in the order worth trying on a typical deployment: MKL where
/// available, then OpenBLAS, then BLIS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlasVendor {
    Mkl,
    OpenBlas,
    Blis,
}

impl BlasVendor {
    pub const ALL: [BlasVendor; 3] = [BlasVendor::Mkl, BlasVendor::OpenBlas, BlasVendor::Blis];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Mkl => "MKL",
            Self::OpenBlas => "OpenBLAS",
            Self::Blis => "BLIS",
        }
    }

    /// Sonames to try for this vendor, most specific install paths last.
    pub fn candidate_names(&self) -> &'static [&'static str] {
        match self {
            Self::Mkl => &[
                "libmkl_rt.so",
                "libmkl_rt.so.2",
                "/opt/intel/mkl/lib/intel64/libmkl_rt.so",
            ],
            Self::OpenBlas => &["libopenblas.so", "libopenblas.so.0"],
            Self::Blis => &["libblis.so", "libblis.so.4"],
        }
    }
}

/// Resolved backend selection passed to the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Path (or bare soname) of the backend binary.
    pub path: PathBuf,
}

impl BackendConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the backend path from `BLAS_BACKEND_PATH`.
    ///
    /// Returns `None` when the variable is unset or empty; the caller
    /// decides whether to fall back to a vendor default.
    pub fn from_env() -> Option<Self> {
        match env::var(BACKEND_PATH_ENV) {
            Ok(path) if !path.is_empty() => {
                log::debug!("backend path from {BACKEND_PATH_ENV}: {path}");
                Some(Self::new(path))
            }
            _ => None,
        }
    }
}
