//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (which hook, which id) and
//! delegates rendering details to `components`.

pub mod menu_create;
pub mod owner_store;
pub mod owner_stores;
pub mod store_list;
