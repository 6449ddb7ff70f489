#![forbid(unsafe_code)]

//! `wasm-bindgen` exports. Only compiled on `wasm32` targets.

use wasm_bindgen::prelude::*;

use crate::binding_core;
use crate::question::Question;

/// Spell `number` (a decimal string, e.g. from `BigInt.prototype.toString`)
/// as the answer to `question`.
///
/// Throws a JS `Error` carrying the validation message on bad input. Every
/// input either spells or throws, so no panic hook is installed.
#[wasm_bindgen]
pub fn to_letters_js(number: String, question: Question) -> Result<String, JsValue> {
    binding_core::to_letters(&number, question)
        .map_err(|err| js_sys::Error::new(&err.to_string()).into())
}
