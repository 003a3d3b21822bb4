//! Hook state objects driven by the UI and the CLI.
//!
//! DESIGN
//! ======
//! One object per screen concern (`owner_stores`, `user_stores`,
//! `owner_menus`). Each owns its list/detail/loading/error state in a
//! [`cell::StateCell`]; instances never share state.

pub mod cell;
pub mod owner_menus;
pub mod owner_stores;
pub mod stores;
pub mod user_stores;

pub use cell::{InFlight, StateCell};
pub use owner_menus::{MenusState, OwnerMenus};
pub use owner_stores::OwnerStores;
pub use stores::StoresState;
pub use user_stores::UserStores;

/// State with an in-flight request counter.
pub trait Tracked: Clone {
    fn pending_mut(&mut self) -> &mut u32;
}

/// Counts one running request against a [`Tracked`] state for as long as it
/// lives.
pub(crate) struct Pending<'a, S: Tracked> {
    cell: &'a StateCell<S>,
}

impl<'a, S: Tracked> Pending<'a, S> {
    pub(crate) fn start(cell: &'a StateCell<S>) -> Self {
        cell.update(|s| *s.pending_mut() += 1);
        Self { cell }
    }
}

impl<S: Tracked> Drop for Pending<'_, S> {
    fn drop(&mut self) {
        self.cell.update(|s| {
            let pending = s.pending_mut();
            *pending = pending.saturating_sub(1);
        });
    }
}
