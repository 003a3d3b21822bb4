//! Menu tab controller: one store's menu list and the card actions on it.
//!
//! DESIGN
//! ======
//! [`MenuTab`] pairs an [`OwnerMenus`] hook with a [`Notifier`]. Every card
//! action resolves to an outcome value after it has alerted the user, so the
//! component only decides what to re-render. The list is refreshed once after
//! a successful mutation and never after a failed one.

#[cfg(test)]
#[path = "tab_test.rs"]
mod tab_test;

use crate::model::Menu;
use crate::net::{MultipartForm, Transport, endpoints};
use crate::notify::Notifier;
use crate::state::{MenusState, OwnerMenus};

pub const DELETED: &str = "Menu deleted.";
pub const DELETE_FAILED: &str = "Failed to delete the menu. Please try again.";
pub const UPDATED: &str = "Menu updated.";
pub const UPDATE_FAILED: &str = "Failed to update the menu. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user dismissed the confirmation; nothing was sent.
    Declined,
    Failed,
    Deleted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    Failed,
    Updated,
}

pub struct MenuTab<T, N> {
    store_id: i64,
    menus: OwnerMenus<T>,
    notifier: N,
}

impl<T: Transport, N: Notifier> MenuTab<T, N> {
    pub fn new(store_id: i64, menus: OwnerMenus<T>, notifier: N) -> Self {
        Self { store_id, menus, notifier }
    }

    #[must_use]
    pub fn store_id(&self) -> i64 {
        self.store_id
    }

    #[must_use]
    pub fn menus(&self) -> &OwnerMenus<T> {
        &self.menus
    }

    #[must_use]
    pub fn view(&self) -> MenuTabView {
        MenuTabView::from_state(&self.menus.snapshot())
    }

    /// Route of the menu creation page for this store.
    #[must_use]
    pub fn create_route(&self) -> String {
        endpoints::menu_create_route(self.store_id)
    }

    pub async fn load(&self) {
        self.menus.fetch_owner_menus(self.store_id).await;
    }

    /// Confirm, delete, alert, and refresh on success.
    pub async fn delete_menu(&self, menu: &Menu) -> DeleteOutcome {
        if !self.notifier.confirm(&format!("Delete the menu \"{}\"?", menu.name)) {
            return DeleteOutcome::Declined;
        }
        match self.menus.delete_menu(self.store_id, menu.id).await {
            Ok(()) => {
                self.notifier.alert(DELETED);
                self.load().await;
                DeleteOutcome::Deleted
            }
            Err(err) => {
                tracing::error!(store_id = self.store_id, menu_id = menu.id, error = %err, "menu delete failed");
                self.notifier.alert(DELETE_FAILED);
                DeleteOutcome::Failed
            }
        }
    }

    /// Replace a menu with the modal's payload, alert, and refresh on
    /// success. Failure is reported here and not passed back, so the modal
    /// that issued it closes either way.
    pub async fn update_menu(&self, menu_id: i64, form: MultipartForm) -> UpdateOutcome {
        match self.menus.update_menu(self.store_id, menu_id, form).await {
            Ok(()) => {
                self.notifier.alert(UPDATED);
                self.load().await;
                UpdateOutcome::Updated
            }
            Err(err) => {
                tracing::error!(store_id = self.store_id, menu_id, error = %err, "menu update failed");
                self.notifier.alert(UPDATE_FAILED);
                UpdateOutcome::Failed
            }
        }
    }
}

/// What the tab body shows for a given list state.
#[derive(Clone, Debug, PartialEq)]
pub enum MenuTabView {
    Loading,
    Error(String),
    Empty,
    Menus(Vec<Menu>),
}

impl MenuTabView {
    #[must_use]
    pub fn from_state(state: &MenusState) -> Self {
        if state.loading() {
            Self::Loading
        } else if let Some(message) = &state.error {
            Self::Error(message.clone())
        } else if state.menus.is_empty() {
            Self::Empty
        } else {
            Self::Menus(state.menus.clone())
        }
    }
}

/// Price with thousands separators and the won suffix, e.g. `12,000원`.
/// The fraction is rounded to at most three digits, trailing zeros dropped.
#[must_use]
pub fn format_price(price: f64) -> String {
    let text = format!("{:.3}", price.abs());
    let text = text.trim_end_matches('0').trim_end_matches('.');
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 + 4);
    if price < 0.0 {
        grouped.push('-');
    }
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped.push('원');
    grouped
}
