//! `Transport` over `reqwest` for the command line.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use serde_json::Value;
use storefront::{ApiError, ClientConfig};
use storefront::net::transport::error_message_from_body;
use storefront::net::{Body, Endpoint, Method, MultipartForm, Part, RequestOptions, Transport};

pub struct ReqwestTransport {
    client: reqwest::Client,
    config: ClientConfig,
    auth_token: Option<String>,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig, auth_token: Option<String>) -> Self {
        Self { client: reqwest::Client::new(), config: config.clone(), auth_token }
    }

    fn url(&self, endpoint: &Endpoint) -> String {
        self.config.url(endpoint.path())
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, endpoint: &Endpoint, options: RequestOptions) -> Result<Value, ApiError> {
        let url = self.url(endpoint);
        let mut request = self.client.request(reqwest_method(options.method), &url);
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }
        request = match options.body {
            Body::Empty => request,
            Body::Json(value) => request.json(&value),
            Body::Multipart(form) => request.multipart(to_multipart(form)?),
        };

        tracing::debug!(method = options.method.as_str(), %url, "sending request");
        let response = request.send().await.map_err(|e| ApiError::Request(e.to_string()))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| ApiError::Request(e.to_string()))?;
        if !status.is_success() {
            return Err(ApiError::status(status.as_u16(), error_message_from_body(&text)));
        }
        decode_body(&text)
    }
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn to_multipart(form: MultipartForm) -> Result<reqwest::multipart::Form, ApiError> {
    let mut out = reqwest::multipart::Form::new();
    for part in form.parts() {
        let name = part.name().to_owned();
        out = match part {
            Part::Text { value, .. } => out.text(name, value.clone()),
            Part::File { file, .. } => {
                let body = reqwest::multipart::Part::bytes(file.bytes.clone())
                    .file_name(file.name.clone())
                    .mime_str(&file.content_type)
                    .map_err(|e| ApiError::Encode(e.to_string()))?;
                out.part(name, body)
            }
        };
    }
    Ok(out)
}

fn decode_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(text)?)
}
