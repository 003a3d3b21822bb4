//! Menu tab of the owner's store page: the menu list and per-menu cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! A [`MenuTab`] controller is rebuilt whenever the store id changes; its
//! hook state is mirrored into a signal that the tab body renders through
//! [`MenuTabView`]. Delete and update flows, including their alerts and the
//! list refresh, run inside the controller.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use storefront::ClientConfig;
use storefront::menu::{MenuTab, MenuTabView, format_price};
use storefront::model::Menu;
use storefront::state::{MenusState, OwnerMenus};

use crate::components::menu_manage_modal::{MenuManageModal, MenuSubmit};
use crate::net::BrowserTransport;
use crate::util::dialogs::BrowserNotifier;
use crate::util::generation::Generations;

type Tab = MenuTab<BrowserTransport, BrowserNotifier>;

/// Menu list for one store, with create/edit/delete actions.
#[component]
pub fn MenuTabContent(#[prop(into)] store_id: Signal<i64>) -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let state = RwSignal::new(MenusState::default());
    let tab = StoredValue::new_local(None::<Rc<Tab>>);
    let generations = StoredValue::new(Generations::default());
    let navigate = use_navigate();

    Effect::new(move || {
        let id = store_id.get();
        let mut token = 0;
        generations.update_value(|g| token = g.advance());
        let menus = OwnerMenus::new(BrowserTransport::from_config(&config));
        menus.subscribe(move |s| {
            // Late results from a replaced controller are dropped, even one
            // built for the same store id.
            if generations.with_value(|g| g.is_current(token)) {
                state.set(s.clone());
            }
        });
        let next = Rc::new(MenuTab::new(id, menus, BrowserNotifier));
        tab.set_value(Some(Rc::clone(&next)));
        leptos::task::spawn_local(async move {
            next.load().await;
        });
    });

    let on_delete = Callback::new(move |menu: Menu| {
        let Some(current) = tab.get_value() else {
            return;
        };
        leptos::task::spawn_local(async move {
            current.delete_menu(&menu).await;
        });
    });

    let update_handler = move |menu_id: i64| {
        MenuSubmit::new(move |form| {
            let current = tab.get_value();
            async move {
                if let Some(current) = current {
                    current.update_menu(menu_id, form).await;
                }
                Ok(())
            }
        })
    };

    let on_create = move |_| {
        let route = tab
            .with_value(|t| t.as_ref().map(|t| t.create_route()))
            .unwrap_or_else(|| storefront::net::endpoints::menu_create_route(store_id.get_untracked()));
        navigate(&route, NavigateOptions::default());
    };

    view! {
        <div class="menu-tab">
            <div class="menu-tab__actions">
                <button class="btn btn--primary" on:click=on_create>"+ Add menu"</button>
            </div>
            {move || match MenuTabView::from_state(&state.get()) {
                MenuTabView::Loading => {
                    view! { <div class="menu-tab__spinner" role="status" aria-label="Loading menus"></div> }
                        .into_any()
                }
                MenuTabView::Error(message) => view! { <p class="menu-tab__error">{message}</p> }.into_any(),
                MenuTabView::Empty => view! { <p class="menu-tab__empty">"No menus registered yet."</p> }.into_any(),
                MenuTabView::Menus(menus) => {
                    view! {
                        <div class="menu-tab__list">
                            {menus
                                .into_iter()
                                .map(|menu| {
                                    let on_submit = update_handler(menu.id);
                                    view! { <MenuCard menu on_delete on_submit/> }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// One menu row: image, name, description, price, allergens, and actions.
#[component]
pub fn MenuCard(menu: Menu, on_delete: Callback<Menu>, on_submit: MenuSubmit) -> impl IntoView {
    let editing = RwSignal::new(false);
    let on_submit = StoredValue::new_local(on_submit);
    let delete_target = menu.clone();
    let edit_target = menu.clone();
    let allergy_line = (!menu.allergies.is_empty()).then(|| format!("Allergens: {}", menu.allergies.join(", ")));
    let image = menu.image_url.clone().filter(|url| !url.is_empty());
    let alt = menu.name.clone();

    view! {
        <div class="menu-card">
            {image.map(|src| view! { <img class="menu-card__image" src=src alt=alt/> })}
            <div class="menu-card__body">
                <h4 class="menu-card__name">{menu.name}</h4>
                {menu.description.map(|text| view! { <p class="menu-card__description">{text}</p> })}
                <p class="menu-card__price">{format_price(menu.price)}</p>
                {allergy_line.map(|text| view! { <p class="menu-card__allergies">{text}</p> })}
            </div>
            <div class="menu-card__actions">
                <button class="btn" title="Edit menu" on:click=move |_| editing.set(true)>
                    "Edit"
                </button>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(delete_target.clone())>
                    "Delete"
                </button>
            </div>
            <Show when=move || editing.get()>
                <MenuManageModal
                    menu=edit_target.clone()
                    on_submit=on_submit.get_value()
                    on_close=Callback::new(move |()| editing.set(false))
                />
            </Show>
        </div>
    }
}
