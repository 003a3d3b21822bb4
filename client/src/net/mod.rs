//! Networking for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` implements the core crate's `Transport` on top of `gloo-net`; the
//! hooks in `storefront::state` issue every request through it.

pub mod http;

pub use http::BrowserTransport;
