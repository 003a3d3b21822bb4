//! `Transport` over the browser's `fetch`, via `gloo-net`.
//!
//! Client-side (csr): real HTTP calls; JSON bodies are sent as-is and
//! multipart bodies are rebuilt as a `FormData` so the browser sets the
//! boundary. Elsewhere (host tests): every call fails with
//! [`ApiError::Request`].
//!
//! ERROR HANDLING
//! ==============
//! Non-OK statuses become [`ApiError::Status`] carrying the backend's
//! `message`/`error` field when the body has one.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde_json::Value;
use storefront::net::{Endpoint, RequestOptions, Transport};
use storefront::{ApiError, ClientConfig};

#[cfg(feature = "csr")]
use storefront::net::{Body, Method, MultipartForm, Part};

/// Sends requests relative to the configured base URL (empty for
/// same-origin).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowserTransport {
    config: ClientConfig,
}

impl BrowserTransport {
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self { config: config.clone() }
    }

    fn url(&self, endpoint: &Endpoint) -> String {
        self.config.url(endpoint.path())
    }
}

#[cfg(any(test, feature = "csr"))]
fn status_error(status: u16, body: &str) -> ApiError {
    ApiError::status(status, storefront::net::transport::error_message_from_body(body))
}

/// Empty bodies decode to `Value::Null`, as delete endpoints send nothing.
#[cfg(any(test, feature = "csr"))]
fn decode_body(body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(body)?)
}

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, endpoint: &Endpoint, options: RequestOptions) -> Result<Value, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.url(endpoint);
            let mut builder = gloo_net::http::RequestBuilder::new(&url).method(gloo_method(options.method));
            for (name, value) in &options.headers {
                builder = builder.header(name, value);
            }
            let request = match options.body {
                Body::Empty => builder.build(),
                Body::Json(value) => builder.json(&value),
                Body::Multipart(form) => builder.body(form_data(&form)?),
            }
            .map_err(|e| ApiError::Request(e.to_string()))?;

            let resp = request.send().await.map_err(|e| ApiError::Request(e.to_string()))?;
            let text = resp.text().await.map_err(|e| ApiError::Request(e.to_string()))?;
            if !resp.ok() {
                log::warn!("{} {url} -> {}", options.method.as_str(), resp.status());
                return Err(status_error(resp.status(), &text));
            }
            decode_body(&text)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Request(format!(
                "{} {} is only available in the browser",
                options.method.as_str(),
                self.url(endpoint)
            )))
        }
    }
}

#[cfg(feature = "csr")]
fn gloo_method(method: Method) -> gloo_net::http::Method {
    match method {
        Method::Get => gloo_net::http::Method::GET,
        Method::Post => gloo_net::http::Method::POST,
        Method::Put => gloo_net::http::Method::PUT,
        Method::Patch => gloo_net::http::Method::PATCH,
        Method::Delete => gloo_net::http::Method::DELETE,
    }
}

#[cfg(feature = "csr")]
fn form_data(form: &MultipartForm) -> Result<web_sys::FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Encode(format!("{e:?}"));
    let data = web_sys::FormData::new().map_err(js_err)?;
    for part in form.parts() {
        let name = part.name();
        match part {
            Part::Text { value, .. } => data.append_with_str(name, value).map_err(js_err)?,
            Part::File { file, .. } => {
                let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
                let chunks = js_sys::Array::of1(&bytes);
                let props = web_sys::BlobPropertyBag::new();
                props.set_type(&file.content_type);
                let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&chunks, &props).map_err(js_err)?;
                data.append_with_blob_and_filename(name, &blob, &file.name).map_err(js_err)?;
            }
        }
    }
    Ok(data)
}
