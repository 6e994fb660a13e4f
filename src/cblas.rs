//! CBLAS ABI surface shared by all interchangeable backends.
//!
//! Every vendor library (MKL, OpenBLAS, BLIS) exports the same C entry
//! points; this module pins down the integer codes, the function pointer
//! signatures, and the exported symbol names that make those binaries
//! interchangeable. Signatures are fixed per operation — they are never
//! inferred from the loaded binary, which offers no safe way to check them.

use std::ffi::c_int;

/// Integer type used across the CBLAS interface.
pub type BlasInt = c_int;

// Matrix storage order codes
pub type CblasLayout = c_int;
pub const CBLAS_ROW_MAJOR: CblasLayout = 101;
pub const CBLAS_COL_MAJOR: CblasLayout = 102;

// Transposition codes
pub type CblasTranspose = c_int;
pub const CBLAS_NO_TRANS: CblasTranspose = 111;
pub const CBLAS_TRANS: CblasTranspose = 112;
pub const CBLAS_CONJ_TRANS: CblasTranspose = 113;

/// Single-precision matrix multiply: `C = alpha * op(A) * op(B) + beta * C`.
pub type SgemmFn = unsafe extern "C" fn(
    CblasLayout,
    CblasTranspose, // op(A)
    CblasTranspose, // op(B)
    BlasInt,        // M
    BlasInt,        // N
    BlasInt,        // K
    f32,            // alpha
    *const f32,     // A
    BlasInt,        // lda
    *const f32,     // B
    BlasInt,        // ldb
    f32,            // beta
    *mut f32,       // C
    BlasInt,        // ldc
);

/// Grouped batch of matrix multiplies with heterogeneous sizes.
///
/// Per-group parameter arrays (`trans`, dimensions, scalars, leading
/// dimensions, `group_size`) hold `group_count` entries; the matrix
/// pointer arrays hold one entry per matrix, flattened group by group.
pub type SgemmBatchFn = unsafe extern "C" fn(
    CblasLayout,
    *const CblasTranspose, // trans_a per group
    *const CblasTranspose, // trans_b per group
    *const BlasInt,        // M per group
    *const BlasInt,        // N per group
    *const BlasInt,        // K per group
    *const f32,            // alpha per group
    *const *const f32,     // A per matrix
    *const BlasInt,        // lda per group
    *const *const f32,     // B per matrix
    *const BlasInt,        // ldb per group
    *const f32,            // beta per group
    *const *mut f32,       // C per matrix
    *const BlasInt,        // ldc per group
    BlasInt,               // group count
    *const BlasInt,        // multiplies per group
);

/// In-place vector scale: `X = alpha * X` over `n` elements with stride `inc_x`.
pub type SscalFn = unsafe extern "C" fn(BlasInt, f32, *mut f32, BlasInt);

/// Elementwise hyperbolic tangent: `Y[i] = tanh(X[i])`.
pub type TanhFn = unsafe extern "C" fn(BlasInt, *const f32, *mut f32);

// Exported symbol names a backend binary must provide with C linkage.
// A binary exporting one of these names with a different calling signature
// is undefined behavior at the dispatch boundary; only the names are
// checked at load time.
pub const SYM_SGEMM: &str = "cblas_sgemm";
pub const SYM_SGEMM_BATCH: &str = "cblas_sgemm_batch";
pub const SYM_SSCAL: &str = "cblas_sscal";
pub const SYM_TANH: &str = "cblas_tanh";
