//! WASM-facing entry points for the braid preflight pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Parameters cross the boundary as JSON text using the
//! wire names `radius`, `length`, `strandCount`, `angleDeg`, `tension`.
//! Native tests interact with the `*_internal` helpers to avoid depending
//! on a JS host.
//!
//! ```
//! let handle = braid_wasm::generate_geometry_internal(
//!     r#"{"radius":12,"length":120,"strandCount":24,"angleDeg":55,"tension":0.55}"#,
//! ).unwrap();
//! assert_eq!(handle.strand_count(), 24);
//! ```

use braid_params::{field_specs, BraidParams, BraidParamsPayload, RawBraidParams};
use tracing::warn;
use wasm_bindgen::prelude::*;

mod error;
mod export;
mod report;
mod strands_handle;

pub use error::FacadeError;
pub use export::{ExportPayload, EXPORT_NOTE};
pub use report::{Band, ConstraintReport};
pub use strands_handle::StrandsHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "braid-wasm";
/// // init_panic_hook();
/// ```
#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Returns the default parameter set as JSON.
///
/// # Errors
/// Returns a JavaScript error value if serialization fails.
#[wasm_bindgen]
pub fn default_params() -> Result<String, JsValue> {
    Ok(default_params_internal()?)
}

/// Host-only helper behind [`default_params`].
pub fn default_params_internal() -> Result<String, FacadeError> {
    Ok(serde_json::to_string(&BraidParams::default())?)
}

/// Returns widget descriptions (`key`, `label`, `min`, `max`, `step`,
/// `unit`, `default`) for every parameter, as a JSON array.
#[wasm_bindgen]
pub fn param_fields() -> Result<String, JsValue> {
    Ok(param_fields_internal()?)
}

/// Host-only helper behind [`param_fields`].
pub fn param_fields_internal() -> Result<String, FacadeError> {
    Ok(serde_json::to_string(&field_specs())?)
}

/// Clamps loose parameter JSON into range and returns the cleaned JSON.
///
/// Missing keys take their defaults.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const clean = JSON.parse(sanitize_params(JSON.stringify({ strandCount: 0 })));
/// // clean.strandCount === 6
/// ```
#[wasm_bindgen]
pub fn sanitize_params(json: &str) -> Result<String, JsValue> {
    Ok(sanitize_params_internal(json)?)
}

/// Host-only helper behind [`sanitize_params`].
pub fn sanitize_params_internal(json: &str) -> Result<String, FacadeError> {
    let raw: RawBraidParams = serde_json::from_str(json)?;
    Ok(serde_json::to_string(&raw.sanitize())?)
}

/// Generates strand geometry for strictly valid parameter JSON.
///
/// # Errors
/// Returns a JavaScript error naming the offending field when the
/// parameters are out of range, or the JSON parse error.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // try {
/// //   const strands = generate_geometry(JSON.stringify(params));
/// //   console.log("Strands:", strands.strand_count);
/// // } catch (error) {
/// //   console.error("Invalid parameters:", error);
/// // }
/// ```
#[wasm_bindgen]
pub fn generate_geometry(json: &str) -> Result<StrandsHandle, JsValue> {
    Ok(generate_geometry_internal(json)?)
}

/// Host-only helper behind [`generate_geometry`].
pub fn generate_geometry_internal(json: &str) -> Result<StrandsHandle, FacadeError> {
    let params = parse_params(json)?;
    let strands = braid_geometry::generate_geometry(&params);
    Ok(StrandsHandle::from(strands.as_slice()))
}

/// Evaluates manufacturability constraints for strictly valid parameter JSON.
///
/// # Errors
/// Returns a JavaScript error when the parameters are invalid.
#[wasm_bindgen]
pub fn evaluate_constraints(json: &str) -> Result<ConstraintReport, JsValue> {
    Ok(evaluate_constraints_internal(json)?)
}

/// Host-only helper behind [`evaluate_constraints`].
pub fn evaluate_constraints_internal(json: &str) -> Result<ConstraintReport, FacadeError> {
    let params = parse_params(json)?;
    Ok(braid_constraints::evaluate_constraints(&params).into())
}

/// Encodes parameters as a share-link query string (without the `?`).
#[wasm_bindgen]
pub fn share_query(json: &str) -> Result<String, JsValue> {
    Ok(share_query_internal(json)?)
}

/// Host-only helper behind [`share_query`].
pub fn share_query_internal(json: &str) -> Result<String, FacadeError> {
    Ok(parse_params(json)?.to_query_string())
}

/// Decodes a share-link query into clamped parameter JSON. Unreadable
/// values fall back to defaults, so this only fails if serialization does.
#[wasm_bindgen]
pub fn parse_share_query(query: &str) -> Result<String, JsValue> {
    Ok(parse_share_query_internal(query)?)
}

/// Host-only helper behind [`parse_share_query`].
pub fn parse_share_query_internal(query: &str) -> Result<String, FacadeError> {
    Ok(serde_json::to_string(&BraidParams::from_query_string(query))?)
}

/// Builds the pretty-printed export payload, stamped with the current time.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // navigator.clipboard.writeText(export_payload(JSON.stringify(params)));
/// ```
#[wasm_bindgen]
pub fn export_payload(json: &str) -> Result<String, JsValue> {
    let exported_at = String::from(js_sys::Date::new_0().to_iso_string());
    Ok(export_payload_internal(json, &exported_at)?)
}

/// Host-only helper behind [`export_payload`]; the timestamp is supplied
/// by the caller.
pub fn export_payload_internal(json: &str, exported_at: &str) -> Result<String, FacadeError> {
    let params = parse_params(json)?;
    Ok(ExportPayload::new(params, exported_at).to_json_pretty()?)
}

/// Strict parse: malformed JSON, missing or unknown keys and out-of-range
/// values are all rejected.
fn parse_params(json: &str) -> Result<BraidParams, FacadeError> {
    let payload: BraidParamsPayload = serde_json::from_str(json).map_err(|err| {
        warn!(error = %err, "malformed parameter payload");
        err
    })?;
    BraidParams::try_from(payload).map_err(|err| {
        warn!(error = %err, "rejected parameter payload");
        FacadeError::from(err)
    })
}
