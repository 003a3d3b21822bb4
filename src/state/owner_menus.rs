//! Owner-side menu hook: the menu list of one store plus menu mutations.
//!
//! Only the list fetch drives `loading`/`error`; mutations return their
//! result to the screen that issued them.

#[cfg(test)]
#[path = "owner_menus_test.rs"]
mod owner_menus_test;

use std::rc::Rc;

use serde_json::Value;

use super::{Pending, StateCell, Tracked};
use crate::error::ApiError;
use crate::model::Menu;
use crate::net::{Method, MultipartForm, RequestOptions, Transport, endpoints, envelope};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenusState {
    pub menus: Vec<Menu>,
    pub pending: u32,
    pub error: Option<String>,
}

impl MenusState {
    #[must_use]
    pub fn loading(&self) -> bool {
        self.pending > 0
    }
}

impl Tracked for MenusState {
    fn pending_mut(&mut self) -> &mut u32 {
        &mut self.pending
    }
}

struct OwnerMenusInner<T> {
    transport: T,
    state: StateCell<MenusState>,
}

pub struct OwnerMenus<T> {
    inner: Rc<OwnerMenusInner<T>>,
}

impl<T> Clone for OwnerMenus<T> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<T: Transport> OwnerMenus<T> {
    pub fn new(transport: T) -> Self {
        Self { inner: Rc::new(OwnerMenusInner { transport, state: StateCell::default() }) }
    }

    #[must_use]
    pub fn snapshot(&self) -> Rc<MenusState> {
        self.inner.state.snapshot()
    }

    pub fn subscribe(&self, observer: impl Fn(&MenusState) + 'static) {
        self.inner.state.subscribe(observer);
    }

    /// Load the menus of `store_id`. A successful load clears any earlier
    /// error.
    pub async fn fetch_owner_menus(&self, store_id: i64) {
        let inner = &*self.inner;
        let _pending = Pending::start(&inner.state);
        let result = inner
            .transport
            .send(&endpoints::menu::owner_list(store_id), RequestOptions::get())
            .await
            .and_then(|resp| envelope::bare_list::<Menu>(&resp));
        match result {
            Ok(menus) => {
                tracing::debug!(store_id, count = menus.len(), "menus loaded");
                inner.state.update(|s| {
                    s.menus = menus;
                    s.error = None;
                });
            }
            Err(err) => {
                tracing::error!(store_id, error = %err, "menu list fetch failed");
                let message = err.message();
                inner.state.update(|s| s.error = Some(message));
            }
        }
    }

    /// Create a menu from a multipart form and return the response's `data`.
    ///
    /// # Errors
    ///
    /// Returns the request failure.
    pub async fn create_menu(&self, store_id: i64, form: MultipartForm) -> Result<Value, ApiError> {
        let resp = self
            .inner
            .transport
            .send(&endpoints::menu::create(store_id), RequestOptions::multipart(Method::Post, form))
            .await?;
        tracing::info!(store_id, "menu created");
        Ok(envelope::data_value(&resp))
    }

    /// Replace a menu with the contents of a multipart form.
    ///
    /// # Errors
    ///
    /// Returns the request failure.
    pub async fn update_menu(&self, store_id: i64, menu_id: i64, form: MultipartForm) -> Result<(), ApiError> {
        self.inner
            .transport
            .send(&endpoints::menu::update(store_id, menu_id), RequestOptions::multipart(Method::Put, form))
            .await?;
        tracing::info!(store_id, menu_id, "menu updated");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the request failure.
    pub async fn delete_menu(&self, store_id: i64, menu_id: i64) -> Result<(), ApiError> {
        self.inner
            .transport
            .send(&endpoints::menu::delete(store_id, menu_id), RequestOptions::delete())
            .await?;
        tracing::info!(store_id, menu_id, "menu deleted");
        Ok(())
    }
}
