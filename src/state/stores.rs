//! State shared in shape (not in instance) by the owner and consumer store
//! hooks.

#[cfg(test)]
#[path = "stores_test.rs"]
mod stores_test;

use time::Time;

use super::{Pending, StateCell, Tracked};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::model::Store;
use crate::net::{RequestOptions, Transport, endpoints, envelope};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoresState {
    pub stores: Vec<Store>,
    /// Detail record for the store currently being viewed.
    pub store: Option<Store>,
    /// Requests currently running against this state.
    pub pending: u32,
    /// Message of the most recent failure; later failures overwrite it.
    pub error: Option<String>,
}

impl StoresState {
    #[must_use]
    pub fn loading(&self) -> bool {
        self.pending > 0
    }

    #[must_use]
    pub fn find(&self, store_id: i64) -> Option<&Store> {
        self.stores.iter().find(|s| s.id == store_id)
    }
}

impl Tracked for StoresState {
    fn pending_mut(&mut self) -> &mut u32 {
        &mut self.pending
    }
}

/// Transport, config, clock and state behind one store hook instance.
pub(crate) struct StoreHookCore<T> {
    pub(crate) transport: T,
    pub(crate) config: ClientConfig,
    pub(crate) clock: fn() -> Time,
    pub(crate) state: StateCell<StoresState>,
}

impl<T: Transport> StoreHookCore<T> {
    pub(crate) fn new(transport: T, config: ClientConfig, clock: fn() -> Time) -> Self {
        Self { transport, config, clock, state: StateCell::default() }
    }

    pub(crate) fn normalize(&self, stores: Vec<Store>) -> Vec<Store> {
        let now = (self.clock)();
        stores
            .into_iter()
            .map(|s| s.normalized(now, &self.config.image))
            .collect()
    }

    /// Log a failure and make it the state's current error.
    pub(crate) fn record_error(&self, action: &str, err: &ApiError) {
        tracing::error!(action, error = %err, "store request failed");
        let message = err.message();
        self.state.update(|s| s.error = Some(message));
    }

    /// Record the error of a failed mutation and hand the result back.
    pub(crate) fn recorded<R>(&self, action: &str, result: Result<R, ApiError>) -> Result<R, ApiError> {
        if let Err(err) = &result {
            self.record_error(action, err);
        }
        result
    }

    /// Fetch one store, normalize it, and make it the detail record.
    pub(crate) async fn fetch_detail(&self, store_id: i64) {
        let _pending = Pending::start(&self.state);
        let result = self
            .transport
            .send(&endpoints::store::detail(store_id), RequestOptions::get())
            .await
            .and_then(|resp| envelope::data::<Store>(&resp));
        match result {
            Ok(store) => {
                let store = store.normalized((self.clock)(), &self.config.image);
                self.state.update(|s| s.store = Some(store));
            }
            Err(err) => self.record_error("fetch_store_detail", &err),
        }
    }

    pub(crate) fn set_store(&self, store: Option<Store>) {
        self.state.update(|s| s.store = store);
    }
}
