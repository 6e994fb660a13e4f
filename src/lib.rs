//! blas-runtime: runtime-loaded vendor BLAS backends for CPU inference.
//!
//! Vendor BLAS libraries (MKL, OpenBLAS, BLIS) export the same C entry
//! points compiled for different CPU families. This crate picks one at
//! process start — no recompilation — and exposes it through:
//!
//! - **All-or-nothing loading**: every required symbol resolves or no
//!   table is produced and the handle is closed
//! - **Flat dispatch**: an immutable table of pre-resolved function
//!   pointers, no per-call branching or lookup
//! - **Scoped ownership**: one guard owns one handle and releases it
//!   exactly once
//!
//! # Quick Start
//!
//! ```ignore
//! use blas_runtime::{BackendConfig, BlasBackend, BlasVendor, CBLAS_ROW_MAJOR, CBLAS_NO_TRANS};
//!
//! let backend = match BackendConfig::from_env() {
//!     Some(config) => BlasBackend::load(&config.path)?,
//!     None => BlasBackend::load_vendor(BlasVendor::OpenBlas)?,
//! };
//! let funcs = backend.funcs();
//! unsafe {
//!     (funcs.sscal)(n, 2.0, x.as_mut_ptr(), 1);
//! }
//! ```
//!
//! Argument correctness (dimensions, strides, pointer liveness) is the
//! caller's responsibility; the table is a dispatch surface, not a
//! safety boundary. Thread safety of the numeric kernels is the loaded
//! vendor's contract.

pub mod backend;
pub mod cblas;
pub mod config;
pub mod error;
pub mod global;

pub use backend::{BlasBackend, BlasFuncs};
pub use cblas::{
    BlasInt, CblasLayout, CblasTranspose, SgemmBatchFn, SgemmFn, SscalFn, TanhFn, CBLAS_COL_MAJOR,
    CBLAS_CONJ_TRANS, CBLAS_NO_TRANS, CBLAS_ROW_MAJOR, CBLAS_TRANS,
};
pub use config::{BackendConfig, BlasVendor, BACKEND_PATH_ENV};
pub use error::{BlasError, BlasResult};
pub use global::{global, global_funcs, init_global, is_available};
