pub mod rust_bsd_qsort;

// Call the platform libc qsort via FFI.
#[cfg(feature = "c_std_qsort")]
pub mod c_std_qsort;
