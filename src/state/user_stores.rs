//! Consumer-side store hook: search, list, detail, like toggle.

#[cfg(test)]
#[path = "user_stores_test.rs"]
mod user_stores_test;

use std::rc::Rc;

use serde::Serialize;
use serde_json::Value;
use time::Time;

use super::Pending;
use super::cell::InFlight;
use super::stores::{StoreHookCore, StoresState};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::model::store::local_time_of_day;
use crate::model::{SearchFilters, Store};
use crate::net::{Method, RequestOptions, Transport, endpoints, envelope};

#[derive(Serialize)]
struct SearchRequest<'a> {
    keyword: &'a str,
    filters: &'a SearchFilters,
    size: u32,
}

struct UserStoresInner<T> {
    core: StoreHookCore<T>,
    list_fetch: InFlight,
}

pub struct UserStores<T> {
    inner: Rc<UserStoresInner<T>>,
}

impl<T> Clone for UserStores<T> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<T: Transport> UserStores<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self::with_clock(transport, config, local_time_of_day)
    }

    pub fn with_clock(transport: T, config: ClientConfig, clock: fn() -> Time) -> Self {
        Self {
            inner: Rc::new(UserStoresInner {
                core: StoreHookCore::new(transport, config, clock),
                list_fetch: InFlight::default(),
            }),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Rc<StoresState> {
        self.inner.core.state.snapshot()
    }

    pub fn subscribe(&self, observer: impl Fn(&StoresState) + 'static) {
        self.inner.core.state.subscribe(observer);
    }

    /// Search stores by keyword and category filters.
    ///
    /// Results come back as sent by the backend (not normalized) and are not
    /// stored in state.
    ///
    /// # Errors
    ///
    /// Returns the request failure; state is left untouched.
    pub async fn search_stores(&self, keyword: &str, filters: &SearchFilters) -> Result<Vec<Store>, ApiError> {
        let core = &self.inner.core;
        let body = SearchRequest { keyword, filters, size: core.config.search_page_size };
        let result = async {
            let options =
                RequestOptions::json(Method::Post, &body)?.with_header("Content-Type", "application/json");
            let resp = core.transport.send(&endpoints::search::stores(), options).await?;
            envelope::data_field::<Vec<Store>>(&resp, "stores")
        }
        .await;
        match &result {
            Ok(stores) => tracing::debug!(keyword, count = stores.len(), "store search finished"),
            Err(err) => tracing::error!(keyword, error = %err, "store search failed"),
        }
        result
    }

    /// Load the consumer store list.
    ///
    /// A call made while another list fetch is still running returns at once
    /// without a request.
    pub async fn fetch_stores(&self) {
        let Some(_in_flight) = self.inner.list_fetch.try_acquire() else {
            tracing::debug!("store list fetch already running; skipped");
            return;
        };
        let core = &self.inner.core;
        let _pending = Pending::start(&core.state);
        let result = core
            .transport
            .send(&endpoints::store::list(), RequestOptions::get())
            .await
            .and_then(|resp| envelope::page_content::<Store>(&resp));
        match result {
            Ok(stores) => {
                let stores: Vec<Store> = core
                    .normalize(stores)
                    .into_iter()
                    .map(|mut s| {
                        s.distance = s.distance.filter(|d| *d > 0.0);
                        s
                    })
                    .collect();
                core.state.update(|s| s.stores = stores);
            }
            Err(err) => core.record_error("fetch_stores", &err),
        }
    }

    pub async fn fetch_store_detail(&self, store_id: i64) {
        self.inner.core.fetch_detail(store_id).await;
    }

    pub fn set_store(&self, store: Option<Store>) {
        self.inner.core.set_store(store);
    }

    /// Toggle the consumer's like on a store, refresh the list so counts
    /// update, and return the toggle response's `data`.
    ///
    /// # Errors
    ///
    /// Returns the toggle failure; the list is not refreshed in that case.
    pub async fn toggle_store_like(&self, store_id: i64) -> Result<Value, ApiError> {
        let resp = match self
            .inner
            .core
            .transport
            .send(&endpoints::store::toggle_like(store_id), RequestOptions::patch())
            .await
        {
            Ok(resp) => resp,
            Err(err) => {
                tracing::error!(store_id, error = %err, "like toggle failed");
                return Err(err);
            }
        };
        tracing::info!(store_id, "store like toggled");

        self.fetch_stores().await;
        if let Some(store) = self.snapshot().find(store_id) {
            tracing::debug!(store_id, like_count = store.like_count, "like count refreshed");
        }

        Ok(envelope::data_value(&resp))
    }
}
