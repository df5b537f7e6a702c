// src/c_api.rs
//
// C ABI surface so a host UI (mobile shell, input framework) can embed
// the translator. Raw pointers plus catch_unwind keep panics from ever
// crossing the boundary; every failure mode returns well-formed JSON.
use crate::TranslatorEngine;
use libc::c_char;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

static mut TRANSLATOR: *mut TranslatorEngine = ptr::null_mut();

unsafe fn get_engine<'a>() -> Option<&'a TranslatorEngine> {
    (*ptr::addr_of!(TRANSLATOR)).as_ref()
}

fn to_json_ptr(json: String) -> *mut c_char {
    // Serde output never contains interior NULs.
    CString::new(json).unwrap_or_default().into_raw()
}

unsafe fn text_arg<'a>(text: *const c_char) -> &'a str {
    if text.is_null() {
        return "";
    }
    CStr::from_ptr(text).to_str().unwrap_or("")
}

/// Initializes the global engine. `manifest_path` may be null, in
/// which case the builtin asset catalog is used. Idempotent.
#[no_mangle]
pub extern "C" fn gesturio_engine_init(manifest_path: *const c_char) {
    let result = catch_unwind(|| unsafe {
        if !(*ptr::addr_of!(TRANSLATOR)).is_null() {
            return;
        }
        let engine = if manifest_path.is_null() {
            TranslatorEngine::new()
        } else {
            TranslatorEngine::from_manifest_or_default(text_arg(manifest_path))
        };
        TRANSLATOR = Box::into_raw(Box::new(engine));
        log::info!("translator engine initialized");
    });
    if result.is_err() {
        log::error!("panic during translator engine initialization");
        unsafe { TRANSLATOR = ptr::null_mut() };
    }
}

#[no_mangle]
pub extern "C" fn gesturio_engine_destroy() {
    unsafe {
        if (*ptr::addr_of!(TRANSLATOR)).is_null() {
            return;
        }
        drop(Box::from_raw(TRANSLATOR));
        TRANSLATOR = ptr::null_mut();
    }
}

/// Renders `text` into the full card grid as a JSON `SignSheet`.
/// The returned string must be released with `gesturio_free_string`.
#[no_mangle]
pub extern "C" fn gesturio_render(text: *const c_char) -> *mut c_char {
    let result = catch_unwind(AssertUnwindSafe(|| unsafe {
        let input = text_arg(text);
        if let Some(engine) = get_engine() {
            let sheet = engine.render(input);
            return serde_json::to_string(&sheet).unwrap_or_else(|_| "{\"words\":[]}".to_string());
        }
        "{\"words\":[]}".to_string()
    }));
    let json = result.unwrap_or_else(|_| {
        log::error!("panic in gesturio_render");
        "{\"words\":[]}".to_string()
    });
    to_json_ptr(json)
}

/// The hero-preview card for the most recent letter, as JSON; the JSON
/// literal `null` when the text holds no alphanumeric character.
#[no_mangle]
pub extern "C" fn gesturio_active_sign(text: *const c_char) -> *mut c_char {
    let result = catch_unwind(AssertUnwindSafe(|| unsafe {
        let input = text_arg(text);
        if let Some(engine) = get_engine() {
            let card = engine.active_sign(input);
            return serde_json::to_string(&card).unwrap_or_else(|_| "null".to_string());
        }
        "null".to_string()
    }));
    let json = result.unwrap_or_else(|_| {
        log::error!("panic in gesturio_active_sign");
        "null".to_string()
    });
    to_json_ptr(json)
}

#[no_mangle]
pub extern "C" fn gesturio_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}
