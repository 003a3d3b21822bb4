//! Endpoint registry keyed by resource and id.
//!
//! DESIGN
//! ======
//! Hooks never format paths themselves; they ask this registry for an
//! [`Endpoint`] and hand it to the transport untouched.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use std::fmt;

/// Opaque backend route. Only the transport looks inside.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    path: String,
}

impl Endpoint {
    fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Path relative to the configured API base URL.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

pub mod store {
    use super::Endpoint;

    /// Consumer-facing store list.
    #[must_use]
    pub fn list() -> Endpoint {
        Endpoint::new("/api/stores")
    }

    /// Stores owned by the signed-in merchant.
    #[must_use]
    pub fn my_stores() -> Endpoint {
        Endpoint::new("/api/owner/stores")
    }

    #[must_use]
    pub fn detail(store_id: i64) -> Endpoint {
        Endpoint::new(format!("/api/stores/{store_id}"))
    }

    #[must_use]
    pub fn create() -> Endpoint {
        Endpoint::new("/api/owner/stores")
    }

    #[must_use]
    pub fn update(store_id: i64) -> Endpoint {
        Endpoint::new(format!("/api/owner/stores/{store_id}"))
    }

    #[must_use]
    pub fn delete(store_id: i64) -> Endpoint {
        Endpoint::new(format!("/api/owner/stores/{store_id}"))
    }

    #[must_use]
    pub fn toggle_like(store_id: i64) -> Endpoint {
        Endpoint::new(format!("/api/stores/{store_id}/like"))
    }
}

pub mod search {
    use super::Endpoint;

    #[must_use]
    pub fn stores() -> Endpoint {
        Endpoint::new("/api/search/stores")
    }
}

pub mod menu {
    use super::Endpoint;

    /// Menus of one store as seen by its owner.
    #[must_use]
    pub fn owner_list(store_id: i64) -> Endpoint {
        Endpoint::new(format!("/api/owner/stores/{store_id}/menus"))
    }

    #[must_use]
    pub fn create(store_id: i64) -> Endpoint {
        Endpoint::new(format!("/api/owner/stores/{store_id}/menus"))
    }

    #[must_use]
    pub fn update(store_id: i64, menu_id: i64) -> Endpoint {
        Endpoint::new(format!("/api/owner/stores/{store_id}/menus/{menu_id}"))
    }

    #[must_use]
    pub fn delete(store_id: i64, menu_id: i64) -> Endpoint {
        Endpoint::new(format!("/api/owner/stores/{store_id}/menus/{menu_id}"))
    }
}

pub mod allergy {
    use super::Endpoint;

    #[must_use]
    pub fn list() -> Endpoint {
        Endpoint::new("/api/allergies")
    }
}

/// Browser route of the menu-creation screen for a store.
#[must_use]
pub fn menu_create_route(store_id: i64) -> String {
    format!("/owner/stores/{store_id}/menus/create")
}
