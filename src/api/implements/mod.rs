mod ffi_script_manager_impl;

pub use ffi_script_manager_impl::*;
