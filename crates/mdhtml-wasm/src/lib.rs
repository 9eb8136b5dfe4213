//! WASM bindings for the mdhtml converter.
//!
//! Exposes `convert()` and `check()` to JavaScript via wasm-bindgen.

use mdhtml_parser::ParseError;
use wasm_bindgen::prelude::*;

/// Convert Markdown source to an HTML fragment.
///
/// Throws a JS error if the source is empty or fails to parse.
#[wasm_bindgen]
pub fn convert(source: &str) -> Result<String, JsError> {
    mdhtml_codegen::convert(source).map_err(|e| JsError::new(&e.to_string()))
}

/// Check Markdown source for syntax errors without rendering.
///
/// Returns `null` when the source parses, otherwise a plain JS object
/// `{ line: number, column: number, message: string }`.
#[wasm_bindgen]
pub fn check(source: &str) -> Result<JsValue, JsError> {
    let err = match mdhtml_parser::Parser::parse(source) {
        Ok(_) => return Ok(JsValue::NULL),
        Err(e) => e,
    };
    let (line, column, message) = diagnostic(&err);

    let js_obj = js_sys::Object::new();
    js_sys::Reflect::set(&js_obj, &"line".into(), &line.into())
        .map_err(|_| JsError::new("Failed to set line property"))?;
    js_sys::Reflect::set(&js_obj, &"column".into(), &column.into())
        .map_err(|_| JsError::new("Failed to set column property"))?;
    js_sys::Reflect::set(&js_obj, &"message".into(), &message.into())
        .map_err(|_| JsError::new("Failed to set message property"))?;

    Ok(js_obj.into())
}

/// The `(line, column, message)` triple `check()` hands to JavaScript.
fn diagnostic(err: &ParseError) -> (u32, u32, String) {
    (err.line() as u32, err.column() as u32, err.to_string())
}

/// Get the converter version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
