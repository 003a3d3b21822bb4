//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser APIs (dialogs, file inputs, route
//! parameters) from page and component logic. `generation` tags
//! controllers so stale async results can be dropped.

pub mod dialogs;
pub mod file_pick;
pub mod generation;
pub mod route;
