//! WASM bindings for parsing exports in the browser.
//!
//! The block tree crosses into JavaScript as a JSON string.

use wasm_bindgen::prelude::*;

use crate::{ParseOptions, parse_with};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Parse export HTML and return the block tree as JSON.
///
/// `merge_list` merges adjacent list blocks into nested lists.
#[wasm_bindgen]
pub fn parse_html(markup: &str, merge_list: bool) -> Result<String, JsValue> {
    let options = ParseOptions::new().with_normalize_lists(merge_list);
    let nodes = parse_with(markup, &options);
    serde_json::to_string(&nodes).map_err(|e| JsValue::from_str(&e.to_string()))
}
