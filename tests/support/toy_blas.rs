//! Toy BLAS backend compiled into a shared library by the loader tests.
//!
//! Naive reference kernels, correct for any layout/transpose combination.
//! Built standalone with `rustc --crate-type cdylib`; not part of the
//! test binary.

use std::os::raw::c_int;

const ROW_MAJOR: c_int = 101;
const NO_TRANS: c_int = 111;

unsafe fn elem(p: *const f32, layout: c_int, trans: c_int, ld: c_int, i: c_int, j: c_int) -> f32 {
    let (r, c) = if trans == NO_TRANS { (i, j) } else { (j, i) };
    let idx = if layout == ROW_MAJOR {
        r as isize * ld as isize + c as isize
    } else {
        r as isize + c as isize * ld as isize
    };
    *p.offset(idx)
}

#[no_mangle]
pub unsafe extern "C" fn cblas_sgemm(
    layout: c_int,
    trans_a: c_int,
    trans_b: c_int,
    m: c_int,
    n: c_int,
    k: c_int,
    alpha: f32,
    a: *const f32,
    lda: c_int,
    b: *const f32,
    ldb: c_int,
    beta: f32,
    c: *mut f32,
    ldc: c_int,
) {
    for i in 0..m {
        for j in 0..n {
            let mut acc = 0.0f32;
            for l in 0..k {
                acc += elem(a, layout, trans_a, lda, i, l) * elem(b, layout, trans_b, ldb, l, j);
            }
            let idx = if layout == ROW_MAJOR {
                i as isize * ldc as isize + j as isize
            } else {
                i as isize + j as isize * ldc as isize
            };
            let dst = c.offset(idx);
            // beta == 0 overwrites; the destination may be uninitialized.
            *dst = if beta == 0.0 {
                alpha * acc
            } else {
                alpha * acc + beta * *dst
            };
        }
    }
}

#[no_mangle]
pub unsafe extern "C" fn cblas_sgemm_batch(
    layout: c_int,
    trans_a: *const c_int,
    trans_b: *const c_int,
    m: *const c_int,
    n: *const c_int,
    k: *const c_int,
    alpha: *const f32,
    a: *const *const f32,
    lda: *const c_int,
    b: *const *const f32,
    ldb: *const c_int,
    beta: *const f32,
    c: *const *mut f32,
    ldc: *const c_int,
    group_count: c_int,
    group_size: *const c_int,
) {
    // Per-group arrays are indexed by group; matrix pointer arrays by
    // flattened matrix position.
    let mut flat = 0isize;
    for g in 0..group_count as isize {
        for _ in 0..*group_size.offset(g) {
            cblas_sgemm(
                layout,
                *trans_a.offset(g),
                *trans_b.offset(g),
                *m.offset(g),
                *n.offset(g),
                *k.offset(g),
                *alpha.offset(g),
                *a.offset(flat),
                *lda.offset(g),
                *b.offset(flat),
                *ldb.offset(g),
                *beta.offset(g),
                *c.offset(flat),
                *ldc.offset(g),
            );
            flat += 1;
        }
    }
}

#[no_mangle]
pub unsafe extern "C" fn cblas_sscal(n: c_int, alpha: f32, x: *mut f32, inc_x: c_int) {
    for i in 0..n as isize {
        *x.offset(i * inc_x as isize) *= alpha;
    }
}

#[no_mangle]
pub unsafe extern "C" fn cblas_tanh(n: c_int, x: *const f32, y: *mut f32) {
    for i in 0..n as isize {
        *y.offset(i) = (*x.offset(i)).tanh();
    }
}
