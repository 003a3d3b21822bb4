//! # storefront
//!
//! Platform-neutral core of the food-ordering web UI: store and menu models,
//! display normalization, the REST endpoint registry, and the state objects
//! ("hooks") that the browser client and the CLI drive.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing in this crate touches the browser or a socket directly. Network
//! access goes through [`net::Transport`] and blocking dialogs through
//! [`notify::Notifier`], so the `client` crate (Leptos + `gloo-net`) and the
//! `cli` crate (`reqwest`) plug in their own implementations.

pub mod config;
pub mod error;
pub mod menu;
pub mod model;
pub mod net;
pub mod notify;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{ClientConfig, ImageConfig};
pub use error::{ApiError, MenuFormError};
