use crate::core::{decode_hdr, EnvMapError, EnvironmentMap};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn fetch_error(path: &str, e: wasm_bindgen::JsValue) -> EnvMapError {
    EnvMapError::Fetch {
        path: path.to_string(),
        reason: format!("{:?}", e),
    }
}

/// Fetch and decode the environment reflection map at `path`.
pub async fn load_environment_map(path: &str) -> Result<EnvironmentMap, EnvMapError> {
    let window = web::window().ok_or_else(|| EnvMapError::Fetch {
        path: path.to_string(),
        reason: "no window".to_string(),
    })?;
    let resp = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| fetch_error(path, e))?;
    let resp: web::Response = resp.dyn_into().map_err(|e| fetch_error(path, e))?;
    if !resp.ok() {
        return Err(EnvMapError::Status {
            path: path.to_string(),
            status: resp.status(),
        });
    }
    let body = resp.array_buffer().map_err(|e| fetch_error(path, e))?;
    let buf = JsFuture::from(body)
        .await
        .map_err(|e| fetch_error(path, e))?;
    let bytes = js_sys::Uint8Array::new(&buf).to_vec();
    decode_hdr(&bytes)
}
