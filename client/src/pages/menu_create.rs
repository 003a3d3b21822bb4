//! Menu creation page: the menu form with no menu, posting a new item.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use storefront::ClientConfig;
use storefront::state::OwnerMenus;

use crate::components::menu_manage_modal::{MenuManageModal, MenuSubmit};
use crate::net::BrowserTransport;
use crate::util::route::{owner_store_route, parse_id};

#[component]
pub fn MenuCreatePage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let params = use_params_map();
    let store_id = Memo::new(move |_| parse_id(params.read().get("id")));
    let menus = StoredValue::new_local(OwnerMenus::new(BrowserTransport::from_config(&config)));
    let navigate = StoredValue::new_local(use_navigate());

    let on_close = Callback::new(move |()| {
        let target = store_id.get_untracked().map_or_else(|| "/owner/stores".to_owned(), owner_store_route);
        navigate.with_value(|navigate| navigate(&target, NavigateOptions::default()));
    });

    let create = move |id: i64| {
        let menus = menus.get_value();
        MenuSubmit::new(move |form| {
            let menus = menus.clone();
            async move { menus.create_menu(id, form).await.map(|_| ()) }
        })
    };

    view! {
        <div class="menu-create-page">
            {move || match store_id.get() {
                Some(id) => view! { <MenuManageModal on_submit=create(id) on_close/> }.into_any(),
                None => view! { <p class="menu-create-page__missing">"Store not found."</p> }.into_any(),
            }}
        </div>
    }
}
