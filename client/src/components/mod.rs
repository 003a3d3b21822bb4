//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render store and menu surfaces. Each one drives a hook or
//! controller from the `storefront` crate and mirrors its state into signals.

pub mod image_upload;
pub mod menu_manage_modal;
pub mod menu_tab_content;
pub mod store_card;
