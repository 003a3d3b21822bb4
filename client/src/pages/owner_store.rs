//! Owner's single-store page: store header plus the menu tab.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use storefront::ClientConfig;
use storefront::state::{OwnerStores, StoresState};

use crate::components::menu_tab_content::MenuTabContent;
use crate::net::BrowserTransport;
use crate::util::route::parse_id;

#[component]
pub fn OwnerStorePage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let params = use_params_map();
    let store_id = Memo::new(move |_| parse_id(params.read().get("id")));

    let hook = OwnerStores::new(BrowserTransport::from_config(&config), config);
    let state = RwSignal::new(StoresState::default());
    hook.subscribe(move |s| state.set(s.clone()));
    let stores = StoredValue::new_local(hook);

    Effect::new(move || {
        let Some(id) = store_id.get() else {
            return;
        };
        let hook = stores.get_value();
        leptos::task::spawn_local(async move {
            hook.fetch_store_detail(id).await;
        });
    });

    let header = move || {
        state.with(|s| {
            s.store.as_ref().map(|store| {
                let status = if store.is_open { "Open now" } else { "Closed" };
                view! {
                    <header class="owner-store-page__header">
                        <img class="owner-store-page__image" src=store.image.clone().unwrap_or_default() alt=store.name.clone()/>
                        <h1>{store.name.clone()}</h1>
                        <span class="owner-store-page__status">{status}</span>
                        <span class="owner-store-page__likes">{format!("♥ {}", store.like_count)}</span>
                    </header>
                }
            })
        })
    };

    view! {
        <Show
            when=move || store_id.get().is_some()
            fallback=|| view! { <p class="owner-store-page__missing">"Store not found."</p> }
        >
            <div class="owner-store-page">
                {header}
                <Show when=move || state.with(|s| s.error.is_some())>
                    <p class="owner-store-page__error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
                </Show>
                <MenuTabContent store_id=Signal::derive(move || store_id.get().unwrap_or_default())/>
            </div>
        </Show>
    }
}
