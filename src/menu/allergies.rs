//! Allergen reference list for the menu form.
//!
//! The form loads the list once when it opens. A failed load is logged and
//! leaves the form usable with no allergen choices.

#[cfg(test)]
#[path = "allergies_test.rs"]
mod allergies_test;

use crate::model::Allergy;
use crate::net::{RequestOptions, Transport, endpoints, envelope};

/// Progress of a one-shot load.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl LoadState<Vec<Allergy>> {
    /// The loaded allergens, or none while loading or after a failure.
    #[must_use]
    pub fn allergies(&self) -> &[Allergy] {
        match self.ready() {
            Some(list) => list,
            None => &[],
        }
    }
}

/// Fetch the allergen list. Never fails outright: errors end in
/// [`LoadState::Failed`].
pub async fn load_allergies<T: Transport + ?Sized>(transport: &T) -> LoadState<Vec<Allergy>> {
    let result = transport
        .send(&endpoints::allergy::list(), RequestOptions::get())
        .await
        .and_then(|resp| envelope::bare_list::<Allergy>(&resp));
    match result {
        Ok(list) => {
            tracing::debug!(count = list.len(), "allergies loaded");
            LoadState::Ready(list)
        }
        Err(err) => {
            tracing::error!(error = %err, "allergy list fetch failed");
            LoadState::Failed(err.message())
        }
    }
}

/// Allergens whose name contains `term`, ignoring case. An empty term keeps
/// everything.
#[must_use]
pub fn filter_allergies<'a>(allergies: &'a [Allergy], term: &str) -> Vec<&'a Allergy> {
    let needle = term.to_lowercase();
    allergies
        .iter()
        .filter(|a| needle.is_empty() || a.name.to_lowercase().contains(&needle))
        .collect()
}
