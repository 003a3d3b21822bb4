//! Merchant-side store hook: list, detail, create, update, delete.
//!
//! ERROR HANDLING
//! ==============
//! Fetches record failures into state only. Mutations record the failure and
//! also return it so the calling screen can alert.

#[cfg(test)]
#[path = "owner_stores_test.rs"]
mod owner_stores_test;

use std::rc::Rc;

use serde_json::Value;
use time::Time;

use super::Pending;
use super::stores::{StoreHookCore, StoresState};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::model::store::local_time_of_day;
use crate::model::{Store, StoreInput};
use crate::net::{Method, RequestOptions, Transport, endpoints, envelope};

pub struct OwnerStores<T> {
    core: Rc<StoreHookCore<T>>,
}

impl<T> Clone for OwnerStores<T> {
    fn clone(&self) -> Self {
        Self { core: Rc::clone(&self.core) }
    }
}

impl<T: Transport> OwnerStores<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self::with_clock(transport, config, local_time_of_day)
    }

    /// Like [`OwnerStores::new`] with an explicit time-of-day source for
    /// open/closed derivation.
    pub fn with_clock(transport: T, config: ClientConfig, clock: fn() -> Time) -> Self {
        Self { core: Rc::new(StoreHookCore::new(transport, config, clock)) }
    }

    #[must_use]
    pub fn snapshot(&self) -> Rc<StoresState> {
        self.core.state.snapshot()
    }

    pub fn subscribe(&self, observer: impl Fn(&StoresState) + 'static) {
        self.core.state.subscribe(observer);
    }

    /// Load the signed-in owner's stores.
    pub async fn fetch_stores(&self) {
        let core = &*self.core;
        let _pending = Pending::start(&core.state);
        let result = core
            .transport
            .send(&endpoints::store::my_stores(), RequestOptions::get())
            .await
            .and_then(|resp| envelope::page_content::<Store>(&resp));
        match result {
            Ok(stores) => {
                let stores = core.normalize(stores);
                tracing::debug!(count = stores.len(), "owner stores loaded");
                core.state.update(|s| s.stores = stores);
            }
            Err(err) => core.record_error("fetch_stores", &err),
        }
    }

    pub async fn fetch_store_detail(&self, store_id: i64) {
        self.core.fetch_detail(store_id).await;
    }

    pub fn set_store(&self, store: Option<Store>) {
        self.core.set_store(store);
    }

    /// Create a store and return the response's `data`.
    ///
    /// # Errors
    ///
    /// Returns the request failure after recording it into state.
    pub async fn create_store(&self, input: &StoreInput) -> Result<Value, ApiError> {
        let core = &*self.core;
        let _pending = Pending::start(&core.state);
        let result = async {
            let options = RequestOptions::json(Method::Post, input)?;
            let resp = core.transport.send(&endpoints::store::create(), options).await?;
            Ok::<_, ApiError>(envelope::data_value(&resp))
        }
        .await;
        if result.is_ok() {
            tracing::info!(name = %input.name, "store created");
        }
        core.recorded("create_store", result)
    }

    /// Replace a store's editable fields and return the response's `data`.
    ///
    /// # Errors
    ///
    /// Returns the request failure after recording it into state.
    pub async fn update_store(&self, store_id: i64, input: &StoreInput) -> Result<Value, ApiError> {
        let core = &*self.core;
        let _pending = Pending::start(&core.state);
        let result = async {
            let options = RequestOptions::json(Method::Put, input)?;
            let resp = core.transport.send(&endpoints::store::update(store_id), options).await?;
            Ok::<_, ApiError>(envelope::data_value(&resp))
        }
        .await;
        if result.is_ok() {
            tracing::info!(store_id, "store updated");
        }
        core.recorded("update_store", result)
    }

    /// # Errors
    ///
    /// Returns the request failure after recording it into state.
    pub async fn delete_store(&self, store_id: i64) -> Result<(), ApiError> {
        let core = &*self.core;
        let _pending = Pending::start(&core.state);
        let result = core
            .transport
            .send(&endpoints::store::delete(store_id), RequestOptions::delete())
            .await
            .map(|_| ());
        if result.is_ok() {
            tracing::info!(store_id, "store deleted");
        }
        core.recorded("delete_store", result)
    }
}
