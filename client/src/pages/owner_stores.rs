//! Owner's store list with links into each store's management page.

use leptos::prelude::*;
use storefront::ClientConfig;
use storefront::model::Store;
use storefront::notify::Notifier;
use storefront::state::{OwnerStores, StoresState};

use crate::components::store_card::StoreCard;
use crate::net::BrowserTransport;
use crate::util::dialogs::BrowserNotifier;
use crate::util::route::owner_store_route;

#[component]
pub fn OwnerStoresPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let hook = OwnerStores::new(BrowserTransport::from_config(&config), config);
    let state = RwSignal::new(StoresState::default());
    hook.subscribe(move |s| state.set(s.clone()));
    let stores = StoredValue::new_local(hook);

    let initial = stores.get_value();
    leptos::task::spawn_local(async move {
        initial.fetch_stores().await;
    });

    let on_delete = Callback::new(move |store_id: i64| {
        if !BrowserNotifier.confirm("Delete this store?") {
            return;
        }
        let hook = stores.get_value();
        leptos::task::spawn_local(async move {
            match hook.delete_store(store_id).await {
                Ok(()) => hook.fetch_stores().await,
                Err(err) => BrowserNotifier.alert(&err.message()),
            }
        });
    });

    view! {
        <div class="owner-stores-page">
            <h1>"My stores"</h1>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="owner-stores-page__error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || !state.with(StoresState::loading) fallback=|| view! { <p>"Loading stores..."</p> }>
                <div class="owner-stores-page__cards">
                    <For
                        each=move || state.with(|s| s.stores.clone())
                        key=|store| store.id
                        children=move |store: Store| {
                            let href = owner_store_route(store.id);
                            view! { <StoreCard store href on_delete/> }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
