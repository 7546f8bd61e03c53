use std::ffi::{c_char, CStr};

use crate::common::errors::SkipListError;

/// Copy a nul terminated C string into an owned `String`.
///
/// # Safety
/// `ptr` must be null or point to a nul terminated string valid for the duration of the call.
pub unsafe fn convert_c_str(ptr: *const c_char, name: &str) -> Result<String, SkipListError> {
    if ptr.is_null() {
        return Err(SkipListError::InvalidArgument(format!("`{}` can't be nullptr", name)));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map(|s| s.to_owned())
        .map_err(|e| {
            SkipListError::InvalidArgument(format!("`{}` (string) is invalid: {}", name, e))
        })
}
