//! Errors from browser APIs.
use std::result::Result as StdResult;
use thiserror::Error;
use wasm_bindgen::JsValue;

// *************
// *** Error ***
// *************

#[derive(Error, Debug)]
pub enum Error {
    /// No `window` or `document`, e.g. outside a browser.
    #[error("no browser document available")]
    NoDocument,

    /// A DOM call threw.
    #[error("dom call failed: {0:?}")]
    Js(JsValue),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Self::Js(value)
    }
}

// **************
// *** Result ***
// **************

pub type Result<T = ()> = StdResult<T, Error>;
