//! # storefront-client
//!
//! Leptos + WASM frontend for the food-ordering platform: consumer store
//! browsing and search, and the owner's store and menu management screens.
//!
//! This crate holds only browser glue. Store/menu state, validation, and
//! request building live in the `storefront` crate; here they are wired to
//! `gloo-net`, `window.alert`/`window.confirm`, and Leptos signals.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;
