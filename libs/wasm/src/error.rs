//! # Facade Errors
//!
//! Errors raised while decoding or encoding payloads at the JS boundary.

use braid_params::ParamError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors that can occur in a facade call.
#[derive(Debug, Error)]
pub enum FacadeError {
    /// Parameters parsed but failed strict validation
    #[error("Invalid parameters: {0}")]
    Params(#[from] ParamError),

    /// Malformed JSON or a serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<FacadeError> for JsValue {
    fn from(err: FacadeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
