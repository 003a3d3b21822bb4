//! Request shape and the transport trait every HTTP backend implements.
//!
//! DESIGN
//! ======
//! A request is an [`Endpoint`] plus [`RequestOptions`] (method, headers,
//! body); a response is the decoded JSON body. Non-success statuses surface
//! as [`ApiError::Status`] so hooks have one failure path to record.
//!
//! The trait is `?Send` because the browser implementation awaits JS promises
//! that are tied to the main thread.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use serde_json::Value;

use super::endpoints::Endpoint;
use crate::error::ApiError;
use crate::model::menu::ImageFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// One field of a multipart body.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Text { name: String, value: String },
    File { name: String, file: ImageFile },
}

impl Part {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }
}

/// Ordered multipart form. Repeated names are allowed and kept in order,
/// which is how list fields such as `allergyIds` are sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartForm {
    parts: Vec<Part>,
}

impl MultipartForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_text(&mut self, name: impl Into<String>, value: impl ToString) {
        self.parts.push(Part::Text { name: name.into(), value: value.to_string() });
    }

    pub fn append_file(&mut self, name: impl Into<String>, file: ImageFile) {
        self.parts.push(Part::File { name: name.into(), file });
    }

    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// All text values appended under `name`, in append order.
    #[cfg(test)]
    pub(crate) fn text_values(&self, name: &str) -> Vec<&str> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                Part::Text { name: n, value } if n == name => Some(value.as_str()),
                _ => None,
            })
            .collect()
    }

    /// First text value under `name`.
    #[cfg(test)]
    pub(crate) fn text(&self, name: &str) -> Option<&str> {
        self.text_values(name).into_iter().next()
    }

    /// First file appended under `name`.
    #[cfg(test)]
    pub(crate) fn file(&self, name: &str) -> Option<&ImageFile> {
        self.parts.iter().find_map(|part| match part {
            Part::File { name: n, file } if n == name => Some(file),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Body {
    #[default]
    Empty,
    Json(Value),
    Multipart(MultipartForm),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Body,
}

impl RequestOptions {
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self { method, headers: Vec::new(), body: Body::Empty }
    }

    #[must_use]
    pub fn get() -> Self {
        Self::new(Method::Get)
    }

    #[must_use]
    pub fn delete() -> Self {
        Self::new(Method::Delete)
    }

    #[must_use]
    pub fn patch() -> Self {
        Self::new(Method::Patch)
    }

    /// JSON body; the serializer error becomes [`ApiError::Encode`].
    ///
    /// # Errors
    ///
    /// Returns an error if `body` cannot be represented as JSON.
    pub fn json<T: serde::Serialize>(method: Method, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(Self { method, headers: Vec::new(), body: Body::Json(value) })
    }

    #[must_use]
    pub fn multipart(method: Method, form: MultipartForm) -> Self {
        Self { method, headers: Vec::new(), body: Body::Multipart(form) }
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[cfg(test)]
    pub(crate) fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// HTTP client used by every hook.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// Perform one request and return the decoded JSON body (`Value::Null`
    /// for an empty body).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] when no response arrives,
    /// [`ApiError::Status`] for non-success statuses, and
    /// [`ApiError::Decode`] for a body that is not JSON.
    async fn send(&self, endpoint: &Endpoint, options: RequestOptions) -> Result<Value, ApiError>;
}

#[async_trait::async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for std::rc::Rc<T> {
    async fn send(&self, endpoint: &Endpoint, options: RequestOptions) -> Result<Value, ApiError> {
        (**self).send(endpoint, options).await
    }
}

/// Pull a backend error message out of a JSON error body, if it has one.
#[must_use]
pub fn error_message_from_body(body: &str) -> Option<String> {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => {
            let trimmed = body.trim();
            return (!trimmed.is_empty()).then(|| trimmed.to_owned());
        }
    };
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::to_owned)
}
