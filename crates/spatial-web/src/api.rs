//! API client for the upload service

use gloo_net::http::Request;
use spatial_types::{
    error_message, resolve_image_url, ApiErrorBody, CreateImageResponse, CREATE_IMAGE_PATH,
    DEFAULT_API_BASE, UPLOAD_FIELD,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{File, FormData};

/// Base URL of the upload service, overridable at build time with `SPATIAL_API_BASE`
pub const API_BASE: &str = match option_env!("SPATIAL_API_BASE") {
    Some(base) => base,
    None => DEFAULT_API_BASE,
};

/// Full URL of the upload endpoint
pub fn endpoint_url() -> String {
    format!("{}{}", API_BASE.trim_end_matches('/'), CREATE_IMAGE_PATH)
}

/// Resolve a returned image URL so the browser can load it
pub fn image_url(processed_image_url: &str) -> String {
    resolve_image_url(API_BASE, processed_image_url)
}

/// Upload one file and return the service's response
pub async fn create_spatial_image(file: &File) -> Result<CreateImageResponse, String> {
    let form = FormData::new().map_err(|e| format!("Form error: {}", js_error_message(&e)))?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(|e| format!("Form error: {}", js_error_message(&e)))?;

    let response = Request::post(&endpoint_url())
        .body(form)
        .map_err(|e| format!("Request error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let body = response.json::<ApiErrorBody>().await.ok();
        return Err(error_message(response.status(), body));
    }

    response
        .json::<CreateImageResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Object URL for previewing a local file
pub fn preview_url(file: &File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}

/// Release an object URL created by [`preview_url`]
pub fn revoke_preview_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}

fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
