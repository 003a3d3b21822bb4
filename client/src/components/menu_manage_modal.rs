//! Create/edit form for one menu item.
//!
//! DESIGN
//! ======
//! The modal owns a [`MenuDraft`] signal and the allergen [`LoadState`].
//! Validation, payload building, and alerts all happen in
//! `storefront::menu::submit_menu`; the modal only closes when that reports
//! the submission went through.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use leptos::prelude::*;
use storefront::menu::{
    IMAGE_ASPECT_RATIO, LoadState, MAX_IMAGES, MenuDraft, filter_allergies, load_allergies, submit_menu,
};
use storefront::model::{Allergy, Menu};
use storefront::net::MultipartForm;
use storefront::{ApiError, ClientConfig};

use crate::components::image_upload::ImageUploadField;
use crate::net::BrowserTransport;
use crate::util::dialogs::BrowserNotifier;

pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), ApiError>>>>;

/// Async submit callback handed to the modal by its host.
#[derive(Clone)]
pub struct MenuSubmit(Rc<dyn Fn(MultipartForm) -> SubmitFuture>);

impl MenuSubmit {
    pub fn new<F, Fut>(submit: F) -> Self
    where
        F: Fn(MultipartForm) -> Fut + 'static,
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        Self(Rc::new(move |form| Box::pin(submit(form))))
    }

    pub fn call(&self, form: MultipartForm) -> SubmitFuture {
        (self.0)(form)
    }
}

/// Menu form modal. Pass `menu` to edit; omit it to create.
#[component]
pub fn MenuManageModal(
    #[prop(optional)] menu: Option<Menu>,
    on_submit: MenuSubmit,
    on_close: Callback<()>,
) -> impl IntoView {
    let menu_id = menu.as_ref().map(|m| m.id);
    let title = if menu_id.is_some() { "Edit menu" } else { "Add menu" };
    let draft = RwSignal::new(MenuDraft::for_menu(menu.as_ref()));
    let allergies = RwSignal::new(LoadState::<Vec<Allergy>>::Idle);
    let search = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let on_submit = StoredValue::new_local(on_submit);

    // Allergen reference data, once per open.
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let transport = BrowserTransport::from_config(&config);
    allergies.set(LoadState::Loading);
    leptos::task::spawn_local(async move {
        let loaded = load_allergies(&transport).await;
        allergies.set(loaded);
    });

    let visible_allergies = move || {
        let term = search.get();
        allergies.with(|state| filter_allergies(state.allergies(), &term).into_iter().cloned().collect::<Vec<_>>())
    };

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);
        let current = draft.get_untracked();
        let handler = on_submit.get_value();
        leptos::task::spawn_local(async move {
            let outcome = submit_menu(&current, menu_id, &BrowserNotifier, |form| handler.call(form)).await;
            submitting.set(false);
            if outcome.closes_modal() {
                on_close.run(());
            }
        });
    };

    let on_backdrop = move |_| on_close.run(());
    let on_cancel = move |_| on_close.run(());

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div class="dialog dialog--menu" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <form class="menu-form" on:submit=on_form_submit>
                    <div class="menu-form__field">
                        <label class="menu-form__label">"Menu image"</label>
                        <ImageUploadField
                            images=Signal::derive(move || draft.with(|d| d.images.clone()))
                            on_change=Callback::new(move |images| draft.update(|d| d.set_images(images)))
                            max_images=MAX_IMAGES
                            aspect_ratio=IMAGE_ASPECT_RATIO
                        />
                    </div>

                    <div class="menu-form__field">
                        <label class="menu-form__label">"Menu name"</label>
                        <input
                            type="text"
                            class="menu-form__input"
                            placeholder="Enter a menu name"
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                        />
                    </div>

                    <div class="menu-form__field">
                        <label class="menu-form__label">"Price"</label>
                        <input
                            type="number"
                            class="menu-form__input"
                            placeholder="Enter a price"
                            prop:value=move || draft.with(|d| d.price.clone())
                            on:input=move |ev| draft.update(|d| d.price = event_target_value(&ev))
                        />
                    </div>

                    <div class="menu-form__field">
                        <label class="menu-form__label">"Allergens"</label>
                        <input
                            type="text"
                            class="menu-form__input"
                            placeholder="Search allergens"
                            prop:value=move || search.get()
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                        <Show when=move || allergies.with(LoadState::is_loading)>
                            <p class="menu-form__hint">"Loading allergens…"</p>
                        </Show>
                        <div class="menu-form__allergies">
                            <For
                                each=visible_allergies
                                key=|allergy| allergy.id
                                children=move |allergy: Allergy| {
                                    let id = allergy.id;
                                    view! {
                                        <label class="menu-form__allergy">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || draft.with(|d| d.has_allergy(id))
                                                on:change=move |_| draft.update(|d| d.toggle_allergy(id))
                                            />
                                            {allergy.name}
                                        </label>
                                    }
                                }
                            />
                        </div>
                    </div>

                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=on_cancel>"Cancel"</button>
                        <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
