//! Menu management logic behind the owner's menu screens.
//!
//! DESIGN
//! ======
//! The browser components stay thin: everything that decides what gets sent,
//! what gets alerted, and what gets rendered lives here so it runs under
//! plain `cargo test`.
//!
//! - `form`: the create/edit draft, its validation, and the multipart payload.
//! - `allergies`: the allergen reference list the form loads when it opens.
//! - `tab`: the per-store menu list controller (load, delete, update).

pub mod allergies;
pub mod form;
pub mod tab;

pub use allergies::{LoadState, filter_allergies, load_allergies};
pub use form::{IMAGE_ASPECT_RATIO, MAX_IMAGES, MenuDraft, SubmitOutcome, parse_price, submit_menu};
pub use tab::{DeleteOutcome, MenuTab, MenuTabView, UpdateOutcome, format_price};
