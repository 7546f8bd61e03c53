use std::ffi::c_char;

use crate::common::errors::SkipListError;
use crate::error_sl;

use super::implements::{
    ffi_skip_list_compile_impl, ffi_skip_list_free_impl, ffi_skip_list_load_config_impl,
    ffi_skip_list_needs_score_impl, ffi_skip_list_score_impl,
};
use super::utils::convert_c_str;

/// Load `skip_list_config.json` from `config_directory`.
/// Scripts compiled afterwards use the loaded config.
///
/// Returns `false` and keeps the current config when the file is missing or invalid.
///
/// # Safety
/// `config_directory` must be null or a valid nul terminated string.
#[no_mangle]
pub unsafe extern "C" fn ffi_skip_list_load_config(config_directory: *const c_char) -> bool {
    static FUNC_NAME: &str = "ffi_skip_list_load_config";

    let result = convert_c_str(config_directory, "config_directory")
        .and_then(|directory| ffi_skip_list_load_config_impl(&directory));
    match result {
        Ok(_) => true,
        Err(e) => {
            error_sl!("[{}] failed load config: {}", FUNC_NAME, e);
            false
        }
    }
}

/// Compile a `roaring` score script and keep it under `script_id`.
///
/// Returns `false` when an argument is invalid, the source is unknown,
/// or `field`/`data` is missing. A `data` payload that fails to decode still compiles.
///
/// # Safety
/// Every pointer must be null or a valid nul terminated string.
#[no_mangle]
pub unsafe extern "C" fn ffi_skip_list_compile(
    script_id: *const c_char,
    script_source: *const c_char,
    field: *const c_char,
    data: *const c_char,
) -> bool {
    static FUNC_NAME: &str = "ffi_skip_list_compile";

    let args = convert_compile_args(script_id, script_source, field, data);
    let (script_id, script_source, field, data) = match args {
        Ok(args) => args,
        Err(e) => {
            error_sl!("[{}] failed convert arguments: {}", FUNC_NAME, e);
            return false;
        }
    };

    match ffi_skip_list_compile_impl(&script_id, &script_source, &field, &data) {
        Ok(_) => true,
        Err(e) => {
            error_sl!("[{}] failed compile script [{}]: {}", FUNC_NAME, script_id, e);
            false
        }
    }
}

unsafe fn convert_compile_args(
    script_id: *const c_char,
    script_source: *const c_char,
    field: *const c_char,
    data: *const c_char,
) -> Result<(String, String, String, String), SkipListError> {
    Ok((
        convert_c_str(script_id, "script_id")?,
        convert_c_str(script_source, "script_source")?,
        convert_c_str(field, "field")?,
        convert_c_str(data, "data")?,
    ))
}

/// Score one document. `has_value` tells whether the document holds the configured field.
///
/// Never fails: unknown scripts and invalid arguments return `ambient_score`.
///
/// # Safety
/// `script_id` must be null or a valid nul terminated string.
#[no_mangle]
pub unsafe extern "C" fn ffi_skip_list_score(
    script_id: *const c_char,
    has_value: bool,
    field_value: i64,
    ambient_score: f64,
) -> f64 {
    let script_id = match convert_c_str(script_id, "script_id") {
        Ok(id) => id,
        Err(_) => return ambient_score,
    };
    let field_value = if has_value { Some(field_value) } else { None };
    ffi_skip_list_score_impl(&script_id, field_value, ambient_score)
}

/// Whether the host must compute the real score before calling [`ffi_skip_list_score`].
///
/// # Safety
/// `script_id` must be null or a valid nul terminated string.
#[no_mangle]
pub unsafe extern "C" fn ffi_skip_list_needs_score(script_id: *const c_char) -> bool {
    static FUNC_NAME: &str = "ffi_skip_list_needs_score";

    let result =
        convert_c_str(script_id, "script_id").and_then(|id| ffi_skip_list_needs_score_impl(&id));
    match result {
        Ok(needs_score) => needs_score,
        Err(e) => {
            // asking for the score is always safe.
            error_sl!("[{}] {}", FUNC_NAME, e);
            true
        }
    }
}

/// Drop the script kept under `script_id`. Returns `false` if nothing was cached.
///
/// # Safety
/// `script_id` must be null or a valid nul terminated string.
#[no_mangle]
pub unsafe extern "C" fn ffi_skip_list_free(script_id: *const c_char) -> bool {
    match convert_c_str(script_id, "script_id") {
        Ok(id) => ffi_skip_list_free_impl(&id),
        Err(e) => {
            error_sl!("[ffi_skip_list_free] {}", e);
            false
        }
    }
}
