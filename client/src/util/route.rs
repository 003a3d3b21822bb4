//! Route parameter parsing.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// Parse a numeric id route segment such as `/owner/stores/{id}`.
#[must_use]
pub fn parse_id(raw: Option<String>) -> Option<i64> {
    raw?.trim().parse().ok()
}

/// Owner store page for `store_id`.
#[must_use]
pub fn owner_store_route(store_id: i64) -> String {
    format!("/owner/stores/{store_id}")
}
