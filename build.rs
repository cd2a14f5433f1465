use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=FVEC_BLAS_LIB");
    println!("cargo:rerun-if-env-changed=FVEC_BLAS_LIB_DIR");

    if env::var_os("CARGO_FEATURE_SYSTEM_BLAS").is_some() {
        link_system_blas();
        return;
    }

    let mut build = cc::Build::new();

    build
        .file("c/fblas_l1.c")
        .include("include")
        .flag_if_supported("-O3")
        .flag_if_supported("-std=c99") // Enforce C99 standard
        .flag_if_supported("-pedantic") // Ensure strict compliance with the C standard
        .warnings(false);

    build.compile("fblas_l1");

    // The kernel uses `sqrt`, `hypot` and `fabs` from libm.
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os == "linux" || target_os == "android" || target_os.ends_with("bsd") {
        println!("cargo:rustc-link-lib=m");
    }

    println!("cargo:rerun-if-changed=c/fblas_l1.c");
    println!("cargo:rerun-if-changed=include/fvec/fblas_l1.h");
}

fn link_system_blas() {
    if let Some(dir) = env::var_os("FVEC_BLAS_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", dir.to_string_lossy());
    }
    let name = env::var("FVEC_BLAS_LIB").unwrap_or_else(|_| "blas".to_owned());
    println!("cargo:rustc-link-lib={}", name);
}
