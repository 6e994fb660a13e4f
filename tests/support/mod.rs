//! Builds the toy backend shared libraries used by the loader tests.
//!
//! Each backend source under `tests/support/` is compiled once per test
//! binary with the same `rustc` that built the tests, into
//! `CARGO_TARGET_TMPDIR`.

use std::env;
use std::path::PathBuf;
use std::process::Command;
use std::sync::OnceLock;

fn build(source: &str, libname: &str, cell: &'static OnceLock<PathBuf>) -> PathBuf {
    cell.get_or_init(|| {
        let src = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/support")
            .join(source);
        let out = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(format!(
            "{}{}{}",
            env::consts::DLL_PREFIX,
            libname,
            env::consts::DLL_SUFFIX
        ));
        let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
        let output = Command::new(rustc)
            .args(["--edition", "2021", "--crate-type", "cdylib", "-o"])
            .arg(&out)
            .arg(&src)
            .output()
            .expect("spawn rustc");
        assert!(
            output.status.success(),
            "rustc failed for {source}:\n{}",
            String::from_utf8_lossy(&output.stderr)
        );
        out
    })
    .clone()
}

/// Backend exporting all four required entry points.
pub fn full_backend() -> PathBuf {
    static FULL: OnceLock<PathBuf> = OnceLock::new();
    build("toy_blas.rs", "toy_blas", &FULL)
}

/// Backend missing `cblas_tanh`.
pub fn partial_backend() -> PathBuf {
    static PARTIAL: OnceLock<PathBuf> = OnceLock::new();
    build("partial_blas.rs", "partial_blas", &PARTIAL)
}

pub fn init_logging() {
    static INIT: OnceLock<()> = OnceLock::new();
    INIT.get_or_init(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}
