//! Consumer landing page: nearby stores, keyword search, and likes.

#[cfg(test)]
#[path = "store_list_test.rs"]
mod store_list_test;

use leptos::prelude::*;
use serde_json::Value;
use storefront::model::store::local_time_of_day;
use storefront::model::{SearchFilters, Store};
use storefront::notify::Notifier;
use storefront::state::{StoresState, UserStores};
use storefront::{ApiError, ClientConfig};

use crate::components::store_card::StoreCard;
use crate::net::BrowserTransport;
use crate::util::dialogs::BrowserNotifier;

/// What the page does once a like toggle settles.
#[derive(Debug, PartialEq, Eq)]
enum LikeFollowup {
    Alert(String),
    /// Search rows are not part of the refreshed list; fetch them again.
    Research(String),
    Done,
}

fn like_followup(toggled: Result<Value, ApiError>, searched: Option<String>) -> LikeFollowup {
    match (toggled, searched) {
        (Err(err), _) => LikeFollowup::Alert(err.message()),
        (Ok(_), Some(term)) => LikeFollowup::Research(term),
        (Ok(_), None) => LikeFollowup::Done,
    }
}

#[component]
pub fn StoreListPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let images = config.image.clone();
    let hook = UserStores::new(BrowserTransport::from_config(&config), config);
    let state = RwSignal::new(StoresState::default());
    hook.subscribe(move |s| state.set(s.clone()));
    let stores = StoredValue::new_local(hook);

    let keyword = RwSignal::new(String::new());
    let results = RwSignal::new(None::<Vec<Store>>);
    let search_error = RwSignal::new(None::<String>);
    let searched = RwSignal::new(None::<String>);

    let initial = stores.get_value();
    leptos::task::spawn_local(async move {
        initial.fetch_stores().await;
    });

    let run_search = move |term: String| {
        let hook = stores.get_value();
        let images = images.clone();
        leptos::task::spawn_local(async move {
            match hook.search_stores(&term, &SearchFilters::default()).await {
                Ok(found) => {
                    // Search rows arrive raw; derive display fields here.
                    let now = local_time_of_day();
                    let found = found.into_iter().map(|s| s.normalized(now, &images)).collect();
                    search_error.set(None);
                    results.set(Some(found));
                }
                Err(err) => search_error.set(Some(err.message())),
            }
        });
    };
    let run_search = StoredValue::new(run_search);

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let term = keyword.get_untracked();
        if term.trim().is_empty() {
            searched.set(None);
            results.set(None);
            search_error.set(None);
            return;
        }
        searched.set(Some(term.clone()));
        run_search.with_value(|run| run(term));
    };

    let on_like = Callback::new(move |store_id: i64| {
        let hook = stores.get_value();
        leptos::task::spawn_local(async move {
            let toggled = hook.toggle_store_like(store_id).await;
            match like_followup(toggled, searched.get_untracked()) {
                LikeFollowup::Alert(message) => BrowserNotifier.alert(&message),
                LikeFollowup::Research(term) => run_search.with_value(|run| run(term)),
                LikeFollowup::Done => {}
            }
        });
    });

    let shown = move || results.get().unwrap_or_else(|| state.with(|s| s.stores.clone()));

    view! {
        <div class="store-list-page">
            <form class="store-search" on:submit=on_search>
                <input
                    type="search"
                    class="store-search__input"
                    placeholder="Search stores"
                    prop:value=move || keyword.get()
                    on:input=move |ev| keyword.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn--primary">"Search"</button>
            </form>
            <Show when=move || search_error.get().is_some()>
                <p class="store-list-page__error">{move || search_error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="store-list-page__error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || !state.with(StoresState::loading) fallback=|| view! { <p>"Loading stores..."</p> }>
                <div class="store-list-page__cards">
                    <For each=shown key=|store| (store.id, store.like_count) children=move |store: Store| {
                        view! { <StoreCard store on_like/> }
                    }/>
                </div>
            </Show>
        </div>
    }
}
