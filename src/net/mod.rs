//! Networking seam between hooks and the HTTP stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! `endpoints` names every backend route, `transport` defines the request
//! shape and the [`Transport`] trait that the browser and CLI implement, and
//! `envelope` decodes the backend's `{ "data": ... }` wrappers.

pub mod endpoints;
pub mod envelope;
pub mod transport;

pub use endpoints::Endpoint;
pub use transport::{Body, Method, MultipartForm, Part, RequestOptions, Transport};
