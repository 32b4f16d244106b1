//! Browser console output.
//!
//! Warnings are always written; debug lines only with the `debug_log` feature.

use wasm_bindgen::JsValue;

pub(crate) fn warn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

/// Warn with the error value attached (DOM failures come back as `JsValue`).
pub(crate) fn warn_err(context: &str, err: &JsValue) {
    web_sys::console::warn_2(&JsValue::from_str(context), err);
}

#[cfg(feature = "debug_log")]
pub(crate) fn debug(msg: &str) {
    web_sys::console::debug_1(&JsValue::from_str(msg));
}

#[cfg(not(feature = "debug_log"))]
#[inline(always)]
pub(crate) fn debug(_msg: &str) {}
