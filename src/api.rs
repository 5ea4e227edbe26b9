use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, FormData, HtmlAnchorElement, RequestInit, Response, Url};

use crate::utils::{detail_message, download_filename, NETWORK_ERROR_MSG};

pub const ENCODE_URL: &str = "/encode";
pub const DECODE_URL: &str = "/decode";

/// How a dispatched request failed. `Rejected` carries the service's own
/// reason; `Network` covers every transport-level fault.
#[derive(Debug)]
pub enum ApiError {
    Rejected(String),
    Network,
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            Self::Rejected(detail) => detail,
            Self::Network => NETWORK_ERROR_MSG,
        }
    }
}

/// An encoded artifact ready to be offered as a download.
pub struct AudioDownload {
    pub blob: Blob,
    pub filename: String,
}

async fn post_multipart(url: &str, payload: &FormData) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or(ApiError::Network)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(payload.as_ref());

    let fetched = JsFuture::from(window.fetch_with_str_and_init(url, &init))
        .await
        .map_err(|_| ApiError::Network)?;
    let response: Response = fetched.dyn_into().map_err(|_| ApiError::Network)?;

    if response.ok() {
        return Ok(response);
    }

    let body = match response.text() {
        Ok(promise) => JsFuture::from(promise).await.ok().and_then(|v| v.as_string()),
        Err(_) => None,
    };
    Err(ApiError::Rejected(detail_message(body.as_deref())))
}

/// POSTs the encode payload and reads the WAV body, naming the download
/// from the `Content-Disposition` header when the service provides one.
pub async fn post_encode(payload: &FormData) -> Result<AudioDownload, ApiError> {
    let response = post_multipart(ENCODE_URL, payload).await?;

    let disposition = response.headers().get("Content-Disposition").ok().flatten();
    let filename = download_filename(disposition.as_deref());

    let promise = response.blob().map_err(|_| ApiError::Network)?;
    let blob: Blob = JsFuture::from(promise)
        .await
        .map_err(|_| ApiError::Network)?
        .dyn_into()
        .map_err(|_| ApiError::Network)?;

    Ok(AudioDownload { blob, filename })
}

/// POSTs the decode payload and returns the recovered text verbatim.
pub async fn post_decode(payload: &FormData) -> Result<String, ApiError> {
    let response = post_multipart(DECODE_URL, payload).await?;

    let promise = response.text().map_err(|_| ApiError::Network)?;
    let text = JsFuture::from(promise).await.map_err(|_| ApiError::Network)?;
    text.as_string().ok_or(ApiError::Network)
}

/// Offers the artifact to the user through a synthetic anchor click. The
/// object URL backing the download is revoked even when the click wiring
/// fails, so the blob's memory is never pinned past this call.
pub fn save_artifact(download: &AudioDownload) -> Result<(), JsValue> {
    let url = Url::create_object_url_with_blob(&download.blob)?;
    let clicked = click_download_anchor(&url, &download.filename);
    let _ = Url::revoke_object_url(&url);
    clicked
}

fn click_download_anchor(url: &str, filename: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(url);
    anchor.set_download(filename);
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();
    Ok(())
}

/// Places the decoded text on the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let clipboard = web_sys::window()
        .map(|w| w.navigator().clipboard())
        .ok_or_else(|| "clipboard unavailable".to_string())?;
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(extract_error)
}

pub fn extract_error(err: JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(&err, &"message".into())
                .ok()
                .and_then(|v| v.as_string())
        })
        .unwrap_or_else(|| "Unknown error".to_string())
}
