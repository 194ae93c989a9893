use std::env;
use std::path::PathBuf;

#[cfg(feature = "c_std_qsort")]
fn build_and_link_c_std_qsort() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let c_std_qsort_path = manifest_dir
        .join("src")
        .join("c_std_qsort")
        .join("c_std_qsort.c")
        .canonicalize()
        .unwrap();

    // Tell Cargo that if the given file changes, to rerun this build script.
    println!("cargo:rerun-if-changed={}", c_std_qsort_path.display());

    cc::Build::new()
        .file(&c_std_qsort_path)
        .flag_if_supported("-std=c11")
        .opt_level(2)
        .warnings(true)
        .extra_warnings(true)
        .compile("c_std_qsort");
}

#[cfg(not(feature = "c_std_qsort"))]
fn build_and_link_c_std_qsort() {}

// C code that reaches the sort only through the shipped header, exercised by the tests.
fn build_and_link_c_caller() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let include_dir = manifest_dir.join("include");
    let c_caller_path = manifest_dir
        .join("src")
        .join("c_caller")
        .join("c_caller.c")
        .canonicalize()
        .unwrap();

    println!("cargo:rerun-if-changed={}", c_caller_path.display());
    println!(
        "cargo:rerun-if-changed={}",
        include_dir.join("swish_qsort.h").display()
    );

    cc::Build::new()
        .file(&c_caller_path)
        .include(&include_dir)
        .flag_if_supported("-std=c11")
        .opt_level(2)
        .warnings(true)
        .extra_warnings(true)
        .compile("c_caller");
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let build_rs_path = manifest_dir.join("build.rs").canonicalize().unwrap();

    // By default without this line, cargo re-runs the build script for all source changes.
    println!("cargo:rerun-if-changed={}", build_rs_path.display());

    build_and_link_c_std_qsort();
    build_and_link_c_caller();
}
