//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use storefront::ClientConfig;

use crate::pages::{
    menu_create::MenuCreatePage, owner_store::OwnerStorePage, owner_stores::OwnerStoresPage,
    store_list::StoreListPage,
};

/// Root application component.
///
/// Provides the client configuration to every page and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ClientConfig::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Storefront"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=StoreListPage/>
                <Route path=(StaticSegment("owner"), StaticSegment("stores")) view=OwnerStoresPage/>
                <Route
                    path=(StaticSegment("owner"), StaticSegment("stores"), ParamSegment("id"))
                    view=OwnerStorePage
                />
                <Route
                    path=(
                        StaticSegment("owner"),
                        StaticSegment("stores"),
                        ParamSegment("id"),
                        StaticSegment("menus"),
                        StaticSegment("create"),
                    )
                    view=MenuCreatePage
                />
            </Routes>
        </Router>
    }
}
